//! Changelog entries: normalization of fragments and aggregation across releases.

pub mod aggregate;
pub mod entry;
pub mod errors;

pub use aggregate::{
    count_fragments, entries_between, entries_for_version, list_fragment_files, parse_fragment,
};
pub use entry::{ChangelogEntry, VersionComparison, normalize};
pub use errors::ChangelogError;
