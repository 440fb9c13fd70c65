//! Jira issue records
//!
//! Issues are read from a local JSON export: an array of objects, each with a
//! `key` and a `fields` object carrying `summary` and `labels`. Any other
//! fields in the export are ignored, and values of the wrong type (including
//! `null`) read as absent, so one odd record never spoils the whole file.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// A single Jira issue
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Ticket {
    /// The issue key (e.g., "QA-1234"), `None` when missing or not a string
    #[serde(deserialize_with = "lenient_string")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient_fields")]
    pub fields: Fields,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fields {
    #[serde(deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_labels")]
    pub labels: Vec<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Non-string labels are dropped
fn lenient_labels<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn lenient_fields<'de, D>(deserializer: D) -> std::result::Result<Fields, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Fields::deserialize(value).unwrap_or_default())
}

impl Ticket {
    /// Keywords used to match file paths when no commit mentions the key
    ///
    /// Words of the summary in order, followed by the labels verbatim.
    pub fn keywords(&self) -> Vec<String> {
        let summary = self.fields.summary.as_deref().unwrap_or("");

        WORD.find_iter(summary)
            .map(|m| m.as_str().to_string())
            .chain(self.fields.labels.iter().cloned())
            .collect()
    }
}

/// Load every issue from a JSON export
///
/// The document must be a JSON array. Entries that are not objects load as
/// empty tickets which no key selects.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Ticket>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Value> =
        serde_json::from_str(&contents).map_err(|source| Error::TicketFormat {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(records
        .into_iter()
        .map(|record| Ticket::deserialize(record).unwrap_or_default())
        .collect())
}

/// Find the first issue with exactly this key
pub fn select<'a>(tickets: &'a [Ticket], key: &str) -> Option<&'a Ticket> {
    tickets
        .iter()
        .find(|ticket| ticket.key.as_deref() == Some(key))
}
