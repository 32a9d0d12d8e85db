//! Discovery of release directories under a changelog root.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::version::{Version, to_dashed};

/// Prefix of every release directory name.
pub const RELEASE_PREFIX: &str = "release-";

/// Directory holding all release directories, relative to the root.
pub const CHANGELOG_DIR: &str = "changelog";

/// List the dashed version identifiers found under `<root>/changelog`.
///
/// Results are sorted ascending by numeric version. A missing `changelog`
/// directory yields an empty list. Release directories whose suffix is not a
/// numeric version are skipped because they cannot be ordered.
pub fn list_versions(root: &Path) -> io::Result<Vec<String>> {
    let changelog_dir = root.join(CHANGELOG_DIR);
    if !changelog_dir.is_dir() {
        debug!("no changelog directory at {}", changelog_dir.display());
        return Ok(Vec::new());
    }

    let mut versions: Vec<(Version, String)> = Vec::new();

    for entry in WalkDir::new(&changelog_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let Some(dashed) = name.strip_prefix(RELEASE_PREFIX) else {
            continue;
        };

        match Version::parse(dashed) {
            Ok(version) => versions.push((version, dashed.to_string())),
            Err(e) => warn!("skipping release directory {}: {}", name, e),
        }
    }

    versions.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(versions.into_iter().map(|(_, dashed)| dashed).collect())
}

/// The newest release under the root, if any.
pub fn latest_version(root: &Path) -> io::Result<Option<String>> {
    Ok(list_versions(root)?.pop())
}

/// Path of the release directory for a version given in either spelling.
pub fn release_dir(root: &Path, version: &str) -> PathBuf {
    root.join(CHANGELOG_DIR).join(format!("{RELEASE_PREFIX}{}", to_dashed(version)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_root(dirs: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for dir in dirs {
            fs::create_dir_all(tmp.path().join("changelog").join(dir)).unwrap();
        }
        tmp
    }

    #[test]
    fn missing_changelog_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(list_versions(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn sorts_numerically_not_lexically() {
        let root = make_root(&[
            "release-6-4-10-0",
            "release-6-4-9-0",
            "release-6-5-0-0",
            "release-6-4-20-1",
        ]);

        let versions = list_versions(root.path()).unwrap();
        assert_eq!(versions, vec!["6-4-9-0", "6-4-10-0", "6-4-20-1", "6-5-0-0"]);
    }

    #[test]
    fn keeps_dashed_form() {
        let root = make_root(&["release-6-4-20-0"]);
        assert_eq!(list_versions(root.path()).unwrap(), vec!["6-4-20-0"]);
    }

    #[test]
    fn ignores_other_entries() {
        let root = make_root(&["release-6-4-20-0", "_unreleased", "release-next"]);
        fs::write(root.path().join("changelog/release-6-9-0-0"), "not a dir").unwrap();

        assert_eq!(list_versions(root.path()).unwrap(), vec!["6-4-20-0"]);
    }

    #[test]
    fn latest_is_highest() {
        let root = make_root(&["release-6-4-9-0", "release-6-4-10-0"]);
        assert_eq!(latest_version(root.path()).unwrap().as_deref(), Some("6-4-10-0"));

        let empty = TempDir::new().unwrap();
        assert_eq!(latest_version(empty.path()).unwrap(), None);
    }

    #[test]
    fn release_dir_accepts_dotted() {
        let root = Path::new("/repo");
        assert_eq!(
            release_dir(root, "6.4.20.0"),
            PathBuf::from("/repo/changelog/release-6-4-20-0")
        );
    }
}
