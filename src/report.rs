//! Test impact report rendering
//!
//! The report is a short block of text written into a Jira custom field, so
//! it is capped at [`MAX_LINES`] lines. Whatever does not fit is dropped.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{json, Value};

use crate::correlate::Correlation;
use crate::error::Result;
use crate::jira::Ticket;

/// Maximum number of lines in a report
pub const MAX_LINES: usize = 10;

/// Maximum number of commits listed individually
pub const MAX_LISTED_COMMITS: usize = 3;

/// Jira custom field that receives the report
pub const CUSTOM_FIELD: &str = "customfield_12345";

const NO_SUMMARY: &str = "No summary";
const ADVICE: &str = "Please review the above changes for targeted testing.";

/// Render the report for a ticket and its correlated commits
pub fn format(ticket: &Ticket, correlation: &Correlation) -> String {
    let summary = ticket.fields.summary.as_deref().unwrap_or(NO_SUMMARY);
    let mut lines = vec![format!("Test Scope: {}", summary)];

    if ticket.fields.labels.is_empty() {
        lines.push("Labels: None".to_string());
    } else {
        lines.push(format!("Labels: {}", ticket.fields.labels.join(", ")));
    }

    if correlation.commits.is_empty() {
        lines.push("No direct commits found referencing this ticket.".to_string());
    } else {
        lines.push(format!(
            "Found {} recent commit(s) referencing this ticket:",
            correlation.commits.len()
        ));
        lines.extend(
            correlation
                .commits
                .iter()
                .take(MAX_LISTED_COMMITS)
                .map(|c| format!("- {}: {}", c.short_id(), c.message)),
        );
    }

    if correlation.files.is_empty() {
        lines.push("No likely impacted files found.".to_string());
    } else {
        lines.push("Likely impacted files:".to_string());
        lines.extend(correlation.files.iter().map(|f| format!("  - {}", f)));
    }

    lines.push(ADVICE.to_string());

    lines.truncate(MAX_LINES);
    lines.join("\n")
}

/// Wrap a report in a Jira field update payload
pub fn payload(report: &str) -> Value {
    json!({
        "fields": {
            CUSTOM_FIELD: report
        }
    })
}

/// Pretty print a payload with two space indentation
///
/// Non-ASCII characters are written as `\uXXXX` escapes, so the output is
/// plain ASCII whatever the ticket or commit text contains.
pub fn render(payload: &Value) -> Result<String> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, AsciiFormatter::default());
    payload.serialize(&mut serializer)?;

    // every byte written is ASCII
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Pretty printing that escapes everything outside ASCII
#[derive(Default)]
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        let mut start = 0;

        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlate::Strategy;
    use crate::git::Commit;
    use crate::jira::Fields;

    fn ticket(summary: Option<&str>, labels: &[&str]) -> Ticket {
        Ticket {
            key: Some("QA-1234".to_string()),
            fields: Fields {
                summary: summary.map(str::to_string),
                labels: labels.iter().map(|l| l.to_string()).collect(),
            },
        }
    }

    fn correlation(commits: usize, files: usize) -> Correlation {
        Correlation {
            strategy: Strategy::TicketKey,
            commits: (0..commits)
                .map(|i| Commit {
                    id: format!("{:07}abcdef", i),
                    message: format!("QA-1234 change {}", i),
                    files: Vec::new(),
                })
                .collect(),
            files: (0..files).map(|i| format!("src/file{}.rs", i)).collect(),
        }
    }

    #[test]
    fn test_format_single_commit() {
        let ticket = ticket(Some("Login fails"), &["auth"]);
        let correlation = Correlation {
            strategy: Strategy::TicketKey,
            commits: vec![Commit {
                id: "abc1234def".to_string(),
                message: "Fix QA-1234 login bug".to_string(),
                files: vec!["auth/login.py".to_string()],
            }],
            files: vec!["auth/login.py".to_string()],
        };

        let report = format(&ticket, &correlation);

        assert_eq!(
            report,
            "Test Scope: Login fails\n\
             Labels: auth\n\
             Found 1 recent commit(s) referencing this ticket:\n\
             - abc1234: Fix QA-1234 login bug\n\
             Likely impacted files:\n  \
             - auth/login.py\n\
             Please review the above changes for targeted testing."
        );
    }

    #[test]
    fn test_format_defaults() {
        let report = format(&ticket(None, &[]), &correlation(0, 0));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Test Scope: No summary",
                "Labels: None",
                "No direct commits found referencing this ticket.",
                "No likely impacted files found.",
                "Please review the above changes for targeted testing.",
            ]
        );
    }

    #[test]
    fn test_format_joins_labels() {
        let report = format(&ticket(Some("x"), &["auth", "regression"]), &correlation(0, 0));
        assert!(report.contains("\nLabels: auth, regression\n"));
    }

    #[test]
    fn test_format_lists_at_most_three_commits() {
        let report = format(&ticket(Some("x"), &[]), &correlation(5, 1));

        assert!(report.contains("Found 5 recent commit(s) referencing this ticket:"));
        assert_eq!(report.lines().filter(|l| l.starts_with("- ")).count(), 3);
    }

    #[test]
    fn test_format_truncates_to_ten_lines() {
        let report = format(&ticket(Some("x"), &["a"]), &correlation(4, 20));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), MAX_LINES);
        // 2 header + 1 count + 3 commits + 1 heading leaves room for 3 files
        assert_eq!(lines[9], "  - src/file2.rs");
        assert!(!report.contains("Please review"));
    }

    #[test]
    fn test_format_keeps_advice_when_it_fits() {
        let report = format(&ticket(Some("x"), &[]), &correlation(1, 4));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[9], ADVICE);
    }

    #[test]
    fn test_payload_shape() {
        let value = payload("line one\nline two");
        assert_eq!(value["fields"]["customfield_12345"], "line one\nline two");
    }

    #[test]
    fn test_render_pretty_two_spaces() {
        let rendered = render(&payload("report")).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"fields\": {\n    \"customfield_12345\": \"report\"\n  }\n}"
        );
    }

    #[test]
    fn test_render_escapes_non_ascii() {
        let rendered = render(&payload("Überweisung ✓ 😀\n\"ok\"")).unwrap();

        assert!(rendered.is_ascii());
        assert!(rendered.contains(
            r#""customfield_12345": "\u00dcberweisung \u2713 \ud83d\ude00\n\"ok\"""#
        ));
    }

    #[test]
    fn test_render_nested_arrays() {
        let rendered = render(&json!({"a": [1, "é"]})).unwrap();
        assert_eq!(rendered, "{\n  \"a\": [\n    1,\n    \"\\u00e9\"\n  ]\n}");
    }
}
