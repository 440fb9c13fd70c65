use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Jira issue key (e.g., QA-1234)
    #[clap(short, long, env = "JIRA_IMPACT_ISSUE")]
    pub issue: String,

    /// Path to Jira issues JSON [default: fixtures/jira_issues.json]
    #[clap(short, long, env = "JIRA_IMPACT_ISSUES")]
    pub jira: Option<PathBuf>,

    /// Path to git log file [default: fixtures/git_changes.txt]
    #[clap(short, long, env = "JIRA_IMPACT_GIT_LOG")]
    pub git: Option<PathBuf>,

    /// Optional YAML file overriding the default input paths
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[clap(short, long, value_parser, default_value_t = false)]
    pub verbose: bool,
}
