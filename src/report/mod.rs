pub mod types;

pub use types::PrSummary;

use crate::pr::{self, CHANGELOG_LABEL_PREFIX};
use colored::Colorize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    FileWrite(#[from] std::io::Error),
}

/// Build a PrSummary from a PR (or search item) payload.
/// Missing fields fall back to empty values.
pub fn build(payload: &Value) -> PrSummary {
    PrSummary {
        number: payload.get("number").and_then(Value::as_u64),
        title: payload
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        labels: pr::get_pr_labels(payload),
        milestone: pr::get_pr_milestone(payload),
        changelog_types: pr::get_changelog_types(payload, CHANGELOG_LABEL_PREFIX),
        from_contributor: pr::from_contributor(payload),
    }
}

/// Output the summaries to the terminal (default) or to a markdown file.
#[instrument(skip(summaries), fields(count = summaries.len()))]
pub fn output(summaries: &[PrSummary], output_path: Option<&Path>) -> Result<(), ReportError> {
    match output_path {
        None => {
            debug!("writing summary to terminal");
            for summary in summaries {
                print_terminal_summary(summary);
            }
            Ok(())
        }
        Some(path) => {
            debug!(path = %path.display(), "writing summary to file");
            std::fs::write(path, render_markdown(summaries))?;
            Ok(())
        }
    }
}

fn print_terminal_summary(summary: &PrSummary) {
    println!();
    println!("PR {}: \"{}\"", summary.display_number(), summary.title);
    println!("═══ Metadata ═══");
    println!("Labels: {}", or_none(&summary.labels.join(", ")));
    println!("Milestone: {}", or_none(&summary.milestone));
    if summary.changelog_types.is_empty() {
        println!("Changelog: {}", "missing".yellow().bold());
    } else {
        println!("Changelog: {}", summary.changelog_types.join(", ").green().bold());
    }
    let origin = if summary.from_contributor {
        summary.origin().cyan().bold()
    } else {
        summary.origin().normal()
    };
    println!("Origin: {}", origin);
    println!();
}

/// Render the summaries as a markdown document, one section per PR.
fn render_markdown(summaries: &[PrSummary]) -> String {
    let mut md = String::new();
    for summary in summaries {
        md.push_str(&format!("# PR {}: \"{}\"\n\n", summary.display_number(), summary.title));
        md.push_str(&format!("**Milestone:** {} | **Origin:** {}\n\n", or_none(&summary.milestone), summary.origin()));

        md.push_str("## Labels\n\n");
        if summary.labels.is_empty() {
            md.push_str("No labels.\n\n");
        } else {
            for label in &summary.labels {
                md.push_str(&format!("- `{}`\n", label));
            }
            md.push('\n');
        }

        md.push_str("## Changelog\n\n");
        if summary.changelog_types.is_empty() {
            md.push_str("No changelog label.\n\n");
        } else {
            for kind in &summary.changelog_types {
                md.push_str(&format!("- {}\n", kind));
            }
            md.push('\n');
        }
    }
    md
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "number": 42,
            "title": "Add widget check",
            "labels": [{"name": "changelog/Added"}, {"name": "bug"}],
            "milestone": {"title": "7.31.0"},
            "head": {"repo": {"fork": true}}
        })
    }

    #[test]
    fn test_build_summary() {
        let summary = build(&sample_payload());
        assert_eq!(summary.number, Some(42));
        assert_eq!(summary.title, "Add widget check");
        assert_eq!(summary.labels, vec!["changelog/Added", "bug"]);
        assert_eq!(summary.milestone, "7.31.0");
        assert_eq!(summary.changelog_types, vec!["Added"]);
        assert!(summary.from_contributor);
    }

    #[test]
    fn test_build_summary_empty_payload() {
        let summary = build(&json!({}));
        assert_eq!(summary.number, None);
        assert!(summary.title.is_empty());
        assert!(summary.labels.is_empty());
        assert!(summary.milestone.is_empty());
        assert!(summary.changelog_types.is_empty());
        assert!(!summary.from_contributor);
    }

    #[test]
    fn test_render_markdown() {
        let md = render_markdown(&[build(&sample_payload())]);
        assert!(md.contains("# PR #42: \"Add widget check\""));
        assert!(md.contains("**Milestone:** 7.31.0"));
        assert!(md.contains("**Origin:** external contributor (fork)"));
        assert!(md.contains("- `changelog/Added`"));
        assert!(md.contains("## Changelog\n\n- Added\n"));
    }

    #[test]
    fn test_render_markdown_without_labels() {
        let md = render_markdown(&[build(&json!({"number": 1}))]);
        assert!(md.contains("**Milestone:** (none)"));
        assert!(md.contains("No labels."));
        assert!(md.contains("No changelog label."));
    }

    #[test]
    fn test_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        output(&[build(&sample_payload())], Some(&path)).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# PR #42"));
    }

    #[test]
    fn test_output_to_terminal() {
        // Should not panic
        output(&[build(&sample_payload()), build(&json!({}))], None).unwrap();
    }
}
