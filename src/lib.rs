//! # jira-impact
//!
//! Correlates a Jira issue with git history and produces a short test impact
//! summary, wrapped in a Jira field update payload.

pub mod app;
pub mod cli;
pub mod config;
pub mod correlate;
pub mod error;
pub mod git;
pub mod jira;
pub mod report;
pub mod ui;

// Re-export commonly used types
pub use config::{Config, Settings};
pub use correlate::{Correlation, Strategy};
pub use error::{Error, Result};
pub use git::Commit;
pub use jira::Ticket;
