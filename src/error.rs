use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read {}: {}", path.display(), source)]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid Jira issues file {}: {}", path.display(), source)]
    TicketFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed commit header on line {line}: {content:?}")]
    LogFormat { line: usize, content: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Missing or unreadable input file
    pub fn is_file_error(&self) -> bool {
        matches!(self, Error::File { .. })
    }

    /// Input that was read but could not be understood
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::TicketFormat { .. } | Error::LogFormat { .. })
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
