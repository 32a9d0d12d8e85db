//! Aggregation of fragments across releases.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::entry::{ChangelogEntry, VersionComparison, normalize};
use super::errors::ChangelogError;
use crate::frontmatter::parse_file;
use crate::versions::{list_versions, release_dir, to_dashed, versions_between};

/// Parse one fragment given its path relative to the root.
pub fn parse_fragment(root: &Path, file: &Path) -> Result<ChangelogEntry, ChangelogError> {
    let fragment = parse_file(&root.join(file))?;
    normalize(file, &fragment.metadata, fragment.content)
}

/// Collect the entries of every release after `from` up to and including `to`.
///
/// Entries are sorted by date (stable, so equal dates keep discovery order).
/// The file list keeps discovery order: by version, then by file name.
/// Fragments that fail to parse are skipped.
pub fn entries_between(
    root: &Path,
    from: &str,
    to: &str,
) -> Result<VersionComparison, ChangelogError> {
    let all = list_versions(root).map_err(|e| io_error(root, e))?;
    let range = versions_between(from, to, &all)?;

    if range.is_empty() {
        return Err(ChangelogError::EmptyRange { from: from.to_string(), to: to.to_string() });
    }
    info!("comparing {} release(s) after {} up to {}", range.len(), from, to);

    let mut entries = Vec::new();
    let mut files = Vec::new();

    for version in &range {
        for file in fragment_files(root, version)? {
            if let Some(entry) = parse_or_skip(root, &file) {
                files.push(entry.file.clone());
                entries.push(entry);
            }
        }
    }

    sort_by_date(&mut entries);

    Ok(VersionComparison {
        from_version: from.to_string(),
        to_version: to.to_string(),
        entries,
        files,
    })
}

/// Entries of a single release, sorted by date.
pub fn entries_for_version(
    root: &Path,
    version: &str,
) -> Result<Vec<ChangelogEntry>, ChangelogError> {
    let dir = release_dir(root, version);
    if !dir.is_dir() {
        return Err(ChangelogError::VersionNotFound {
            version: to_dashed(version),
            path: dir.display().to_string(),
        });
    }

    let mut entries: Vec<ChangelogEntry> = fragment_files(root, version)?
        .iter()
        .filter_map(|file| parse_or_skip(root, file))
        .collect();

    sort_by_date(&mut entries);
    Ok(entries)
}

/// Number of markdown fragments in a release, without parsing them.
pub fn count_fragments(root: &Path, version: &str) -> Result<usize, ChangelogError> {
    Ok(fragment_files(root, version)?.len())
}

/// Every fragment path relative to the root, newest release first.
pub fn list_fragment_files(root: &Path) -> Result<Vec<String>, ChangelogError> {
    let versions = list_versions(root).map_err(|e| io_error(root, e))?;

    let mut files = Vec::new();
    for version in versions.iter().rev() {
        for file in fragment_files(root, version)?.into_iter().rev() {
            files.push(relative_display(&file));
        }
    }
    Ok(files)
}

/// Markdown files directly inside a release directory, relative to the root,
/// in file-name order.
fn fragment_files(root: &Path, version: &str) -> Result<Vec<PathBuf>, ChangelogError> {
    let dir = release_dir(root, version);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| io_error(&dir, e.into()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown_file(path) {
            continue;
        }
        files.push(path.strip_prefix(root).unwrap_or(path).to_path_buf());
    }
    Ok(files)
}

fn parse_or_skip(root: &Path, file: &Path) -> Option<ChangelogEntry> {
    match parse_fragment(root, file) {
        Ok(entry) => Some(entry),
        Err(e) if e.is_not_found() => {
            debug!("fragment vanished before parsing: {}", file.display());
            None
        }
        Err(e) => {
            warn!("skipping fragment {}: {}", file.display(), e);
            None
        }
    }
}

fn sort_by_date(entries: &mut [ChangelogEntry]) {
    entries.sort_by(|a, b| a.date.cmp(&b.date));
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}

fn relative_display(path: &Path) -> String {
    let parts: Vec<_> = path.iter().map(|p| p.to_string_lossy()).collect();
    parts.join("/")
}

fn io_error(path: &Path, e: std::io::Error) -> ChangelogError {
    ChangelogError::Io(path.display().to_string(), e)
}
