//! Version range resolution between two release markers.

use super::version::{Version, VersionError};

/// Select every version in `all` with `from < v <= to`.
///
/// The `from` release is excluded because its changes belong to the previous
/// comparison window. Output keeps the order of `all`, which callers obtain
/// already sorted from [`list_versions`](super::list_versions).
pub fn versions_between(
    from: &str,
    to: &str,
    all: &[String],
) -> Result<Vec<String>, VersionError> {
    let from = Version::parse(from)?;
    let to = Version::parse(to)?;

    let mut selected = Vec::new();
    for candidate in all {
        let version = Version::parse(candidate)?;
        if from < version && version <= to {
            selected.push(candidate.clone());
        }
    }
    Ok(selected)
}
