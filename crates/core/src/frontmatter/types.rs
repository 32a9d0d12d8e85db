//! Frontmatter types and data structures.

use std::collections::HashMap;

/// Flat key/value metadata read from a fragment's frontmatter block.
pub type Metadata = HashMap<String, String>;

/// Result of splitting a changelog fragment into metadata and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFragment {
    /// Metadata fields; empty when the fragment has no frontmatter.
    pub metadata: Metadata,
    /// The markdown body, trimmed.
    pub content: String,
}
