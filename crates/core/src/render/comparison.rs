//! Comparison renderers.

use std::fmt::Write;

use super::{Format, display_date, entry::render_entry};
use crate::changelog::VersionComparison;

const RULE_WIDTH: usize = 40;

/// Render a comparison in the given format.
///
/// [`Format::Original`] concatenates the original form of every entry.
pub fn render_comparison(comparison: &VersionComparison, format: Format) -> String {
    match format {
        Format::Original => comparison
            .entries
            .iter()
            .map(|e| render_entry(e, Format::Original))
            .collect::<Vec<_>>()
            .join("\n\n"),
        Format::Markdown => markdown(comparison),
        Format::Yaml => serde_yaml::to_string(comparison).unwrap_or_default(),
        Format::Json => serde_json::to_string_pretty(comparison).unwrap_or_default(),
    }
}

fn markdown(comparison: &VersionComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# Changelog entries from {} to {}\n",
        comparison.from_version, comparison.to_version
    );
    let _ = writeln!(out, "{}\n", "=".repeat(RULE_WIDTH));

    for entry in &comparison.entries {
        let date = if entry.date.is_empty() {
            "No date".to_string()
        } else {
            display_date(&entry.date)
        };
        let title = if entry.title.is_empty() { "No title" } else { entry.title.as_str() };
        let _ = writeln!(out, "[{date}] {title}");

        if let Some(issue) = entry.issue.as_deref().filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "  Issue: {issue}");
        }

        let content = entry.content.trim();
        if !content.is_empty() {
            let _ = writeln!(out, "\n{content}");
        }

        if let Some(author) = entry.author.as_deref().filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "  Author: {author}");
            if let Some(email) = entry.author_email.as_deref().filter(|v| !v.is_empty()) {
                let _ = writeln!(out, "  Email: {email}");
            }
            if let Some(github) = entry.author_github.as_deref().filter(|v| !v.is_empty()) {
                let _ = writeln!(out, "  GitHub: {github}");
            }
        }
        out.push('\n');
    }

    if !comparison.files.is_empty() {
        out.push_str("Parsed changelog files:\n");
        for file in &comparison.files {
            let _ = writeln!(out, "  - {file}");
        }
    }

    out
}
