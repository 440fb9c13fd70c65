//! Git change log parsing
//!
//! The log is a plain text export in which every commit looks like:
//!
//! ```text
//! commit abc1234 Fix QA-1234 login bug
//! Author: someone
//! Files changed:
//! auth/login.py (12 insertions, 3 deletions)
//! auth/session.py (1 insertions, 0 deletions)
//!
//! ```
//!
//! Lines between the header and the `Files changed:` marker are ignored. The
//! file list ends at a blank line, the next commit header or end of input.

use std::path::Path;

use crate::error::{Error, Result};

const COMMIT_PREFIX: &str = "commit ";
const FILES_MARKER: &str = "Files changed:";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Commit {
    pub id: String,
    pub message: String,
    /// Changed file paths in the order they appear in the log
    pub files: Vec<String>,
}

impl Commit {
    /// The abbreviated commit id (first 7 characters)
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(7) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    SeekingCommit,
    SeekingFilesMarker,
    ReadingFiles,
}

/// Read and parse a change log file
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Vec<Commit>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    parse_str(&contents)
}

/// Parse change log text into commits, in log order
pub fn parse_str(log: &str) -> Result<Vec<Commit>> {
    let mut commits = Vec::new();
    let mut current: Option<Commit> = None;
    let mut state = ParseState::SeekingCommit;

    for (idx, raw) in log.lines().enumerate() {
        let line = raw.trim_end_matches('\r');

        if line.starts_with(COMMIT_PREFIX) {
            commits.extend(current.take());
            current = Some(parse_header(line, idx + 1)?);
            state = ParseState::SeekingFilesMarker;
            continue;
        }

        state = match state {
            ParseState::SeekingCommit => ParseState::SeekingCommit,
            ParseState::SeekingFilesMarker if line.starts_with(FILES_MARKER) => {
                ParseState::ReadingFiles
            }
            ParseState::SeekingFilesMarker => ParseState::SeekingFilesMarker,
            ParseState::ReadingFiles if line.trim().is_empty() => {
                commits.extend(current.take());
                ParseState::SeekingCommit
            }
            ParseState::ReadingFiles => {
                if let Some(commit) = current.as_mut() {
                    commit.files.push(file_path(line).to_string());
                }
                ParseState::ReadingFiles
            }
        };
    }

    commits.extend(current);
    Ok(commits)
}

/// Split `commit <id> <message>` into a commit with no files yet
fn parse_header(line: &str, line_no: usize) -> Result<Commit> {
    let rest = line[COMMIT_PREFIX.len()..].trim();
    if rest.is_empty() {
        return Err(Error::LogFormat {
            line: line_no,
            content: line.to_string(),
        });
    }

    let (id, message) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));

    Ok(Commit {
        id: id.to_string(),
        message: message.trim_start().to_string(),
        files: Vec::new(),
    })
}

/// `auth/login.py (12 insertions, 3 deletions)` -> `auth/login.py`
fn file_path(line: &str) -> &str {
    let line = line.trim();
    line.split(" (").next().unwrap_or(line)
}
