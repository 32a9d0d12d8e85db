//! Release version identifiers, discovery, and range resolution.
//!
//! Release directories live under `<root>/changelog/release-<dashed-version>`.
//! This module provides functionality to:
//! - Parse and order version identifiers numerically
//! - List release directories sorted by version
//! - Resolve the versions between two markers (exclusive/inclusive)

pub mod index;
pub mod range;
pub mod version;

pub use index::{RELEASE_PREFIX, latest_version, list_versions, release_dir};
pub use range::versions_between;
pub use version::{Version, VersionError, to_dashed, to_dotted};
