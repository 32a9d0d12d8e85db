//! Rendering of changelog entries and release comparisons.
//!
//! Every output encoding is a [`Format`] variant. Callers holding a format
//! name from user input go through [`render_entry_named`] or
//! [`render_comparison_named`], which fall back to a default format with a
//! warning instead of failing.

mod comparison;
mod entry;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use crate::changelog::{ChangelogEntry, VersionComparison};

pub use comparison::render_comparison;
pub use entry::{render_entries, render_entry};

/// Output encodings for entries and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Frontmatter block followed by the raw body.
    Original,
    /// Human-readable markdown.
    Markdown,
    Yaml,
    Json,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Original, Format::Markdown, Format::Yaml, Format::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Original => "original",
            Format::Markdown => "markdown",
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A format name that matches no [`Format`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format '{0}' (expected one of: original, markdown, yaml, json)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(Format::Original),
            "markdown" | "md" => Ok(Format::Markdown),
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Rendered output plus the warning raised if the requested format was unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub format: Format,
    pub warning: Option<UnknownFormat>,
}

/// Render an entry by format name, falling back to [`Format::Original`].
pub fn render_entry_named(entry: &ChangelogEntry, name: &str) -> Rendered {
    let (format, warning) = resolve(name, Format::Original);
    Rendered { text: render_entry(entry, format), format, warning }
}

/// Render a comparison by format name, falling back to [`Format::Markdown`].
pub fn render_comparison_named(comparison: &VersionComparison, name: &str) -> Rendered {
    let (format, warning) = resolve(name, Format::Markdown);
    Rendered { text: render_comparison(comparison, format), format, warning }
}

/// Render a list of entries by format name, falling back to [`Format::Markdown`].
pub fn render_entries_named(entries: &[ChangelogEntry], name: &str) -> Rendered {
    let (format, warning) = resolve(name, Format::Markdown);
    Rendered { text: render_entries(entries, format), format, warning }
}

fn resolve(name: &str, fallback: Format) -> (Format, Option<UnknownFormat>) {
    match name.parse::<Format>() {
        Ok(format) => (format, None),
        Err(e) => {
            warn!("{}; falling back to {}", e, fallback);
            (fallback, Some(e))
        }
    }
}

/// Normalize a `YYYY-MM-DD` date for display, passing anything else through.
pub(crate) fn display_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| date.to_string())
}
