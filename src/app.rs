use serde_json::Value;
use tracing::debug;

use crate::cli::Args;
use crate::config::{Config, Settings};
use crate::correlate;
use crate::error::Result;
use crate::git;
use crate::jira;
use crate::report;

/// Result of analyzing one issue
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The issue key is not in the Jira export
    NotFound(String),
    /// Jira field update carrying the report
    Payload(Value),
}

impl Outcome {
    /// Text written to stdout for this outcome
    pub fn render(&self) -> Result<String> {
        match self {
            Outcome::NotFound(key) => Ok(format!("Jira issue {} not found.", key)),
            Outcome::Payload(payload) => report::render(payload),
        }
    }
}

/// Main application entry point
pub fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = config.resolve(args);

    let outcome = analyze(&settings)?;
    println!("{}", outcome.render()?);

    Ok(())
}

/// Correlate one issue with the git log and build the report payload
pub fn analyze(settings: &Settings) -> Result<Outcome> {
    let tickets = jira::load(&settings.jira)?;
    debug!(
        count = tickets.len(),
        path = %settings.jira.display(),
        "loaded Jira issues"
    );

    let ticket = match jira::select(&tickets, &settings.issue) {
        Some(ticket) => ticket,
        None => {
            debug!(issue = %settings.issue, "issue not found");
            return Ok(Outcome::NotFound(settings.issue.clone()));
        }
    };

    let commits = git::parse(&settings.git)?;
    debug!(
        count = commits.len(),
        path = %settings.git.display(),
        "parsed git log"
    );

    let keywords = ticket.keywords();
    let correlation = correlate::correlate(&commits, &settings.issue, &keywords);
    debug!(
        issue = %settings.issue,
        strategy = ?correlation.strategy,
        commits = correlation.commits.len(),
        files = correlation.files.len(),
        "correlated commits"
    );

    let analysis = report::format(ticket, &correlation);
    Ok(Outcome::Payload(report::payload(&analysis)))
}
