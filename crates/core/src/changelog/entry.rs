//! Normalized changelog entries.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use super::errors::ChangelogError;
use crate::frontmatter::Metadata;
use crate::versions::{RELEASE_PREFIX, to_dotted};

/// Length of the `YYYY-MM-DD` prefix in fragment file names.
const DATE_PREFIX_LEN: usize = 10;

/// One change record built from a single fragment file.
///
/// `date` stays a string: upstream fragments occasionally carry malformed
/// dates that must still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub date: String,
    pub title: String,
    pub version: String,
    pub file: String,
    pub content: String,
    pub issue: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub author_github: Option<String>,
}

/// The entries found between two releases and the files they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionComparison {
    pub from_version: String,
    pub to_version: String,
    pub entries: Vec<ChangelogEntry>,
    pub files: Vec<String>,
}

/// Build an entry from a fragment's relative path and parsed parts.
///
/// `file` must follow `changelog/release-<dashed-version>/<name>.md`; the
/// release directory provides the entry's version.
pub fn normalize(
    file: &Path,
    metadata: &Metadata,
    content: String,
) -> Result<ChangelogEntry, ChangelogError> {
    let invalid = || ChangelogError::InvalidFragmentPath(file.display().to_string());

    let segments: Vec<String> = file
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let [_, release_dir, file_name] = segments.as_slice() else {
        return Err(invalid());
    };
    let dashed = release_dir.strip_prefix(RELEASE_PREFIX).ok_or_else(invalid)?;
    if dashed.is_empty() {
        return Err(invalid());
    }

    let field = |key: &str| metadata.get(key).cloned();

    let date = match metadata.get("date") {
        Some(date) if !date.is_empty() => date.clone(),
        _ => date_from_file_name(file_name),
    };

    let title = field("title").or_else(|| field("issue")).unwrap_or_default();

    Ok(ChangelogEntry {
        date,
        title,
        version: to_dotted(dashed),
        file: segments.join("/"),
        content,
        issue: field("issue"),
        author: field("author"),
        author_email: field("author_email"),
        author_github: field("author_github"),
    })
}

fn date_from_file_name(name: &str) -> String {
    if name.chars().count() >= DATE_PREFIX_LEN {
        name.chars().take(DATE_PREFIX_LEN).collect()
    } else {
        String::new()
    }
}
