use std::collections::HashSet;

use crate::git::Commit;

/// Which pass produced a correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Commit messages mention the ticket key
    TicketKey,
    /// No message mentions the key, changed paths match ticket keywords
    Keyword,
    /// Neither pass matched anything
    Unmatched,
}

/// Commits related to a ticket and the files they touched
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    pub strategy: Strategy,
    /// Matched commits in log order
    pub commits: Vec<Commit>,
    /// Distinct changed files, in order of first appearance
    pub files: Vec<String>,
}

impl Correlation {
    fn empty() -> Self {
        Self {
            strategy: Strategy::Unmatched,
            commits: Vec::new(),
            files: Vec::new(),
        }
    }

    fn push(&mut self, commit: &Commit, seen: &mut HashSet<String>) {
        for file in &commit.files {
            if seen.insert(file.clone()) {
                self.files.push(file.clone());
            }
        }
        self.commits.push(commit.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Find commits related to the ticket `key`
///
/// Messages are first searched for the key as a plain, case sensitive
/// substring. Only when that finds nothing are the changed file paths
/// searched for any of `keywords`, ignoring case.
///
/// A commit is listed once even when several keywords match its files, so
/// the count in the report is distinct commits, not commit and keyword pairs.
pub fn correlate(commits: &[Commit], key: &str, keywords: &[String]) -> Correlation {
    let mut result = Correlation::empty();
    let mut seen = HashSet::new();

    for commit in commits.iter().filter(|c| c.message.contains(key)) {
        result.push(commit, &mut seen);
    }
    if !result.is_empty() {
        result.strategy = Strategy::TicketKey;
        return result;
    }

    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    for commit in commits.iter().filter(|c| touches_keyword(c, &keywords)) {
        result.push(commit, &mut seen);
    }
    if !result.is_empty() {
        result.strategy = Strategy::Keyword;
    }

    result
}

fn touches_keyword(commit: &Commit, keywords: &[String]) -> bool {
    commit.files.iter().any(|file| {
        let file = file.to_lowercase();
        keywords.iter().any(|kw| file.contains(kw.as_str()))
    })
}
