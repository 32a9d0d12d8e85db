//! Error types for changelog aggregation.

use std::io;

use thiserror::Error;

use crate::frontmatter::FrontmatterError;
use crate::versions::VersionError;

/// Errors that can occur while reading changelog entries.
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error(transparent)]
    Fragment(#[from] FrontmatterError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(
        "fragment path '{0}' does not follow the changelog/release-<version>/<file>.md layout"
    )]
    InvalidFragmentPath(String),

    #[error("no changelog directory found for version {version} at {path}")]
    VersionNotFound { version: String, path: String },

    #[error("no changelog versions found after {from} up to {to}")]
    EmptyRange { from: String, to: String },

    #[error("failed to read changelog directory {0}: {1}")]
    Io(String, #[source] io::Error),
}

impl ChangelogError {
    /// Whether this error means something the user asked for does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ChangelogError::Fragment(FrontmatterError::NotFound(_))
                | ChangelogError::VersionNotFound { .. }
                | ChangelogError::EmptyRange { .. }
        )
    }
}
