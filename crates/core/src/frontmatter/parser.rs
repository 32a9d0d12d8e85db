//! Frontmatter parsing for changelog fragments.
//!
//! Fragments use a deliberately small subset of YAML: one `key: value` pair
//! per line between two `---` delimiters. Nested structures, lists and
//! multi-line values are not supported.

use std::io;
use std::path::Path;

use thiserror::Error;

use super::types::{Metadata, ParsedFragment};

const DELIMITER: &str = "---";

/// Errors that can occur while reading a fragment.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("changelog file not found: {0}")]
    NotFound(String),

    #[error("failed to read changelog file {0}: {1}")]
    Io(String, #[source] io::Error),
}

/// Read and parse a fragment from disk.
pub fn parse_file(path: &Path) -> Result<ParsedFragment, FrontmatterError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FrontmatterError::NotFound(path.display().to_string())
        } else {
            FrontmatterError::Io(path.display().to_string(), e)
        }
    })?;
    Ok(parse_str(&text))
}

/// Split fragment text into metadata and body.
///
/// The text is split on the first two `---` occurrences. Anything before the
/// first delimiter is dropped, the middle part is the metadata block and the
/// rest is the body. Without two delimiters the whole text is the body.
pub fn parse_str(text: &str) -> ParsedFragment {
    let parts: Vec<&str> = text.splitn(3, DELIMITER).collect();

    let [_, block, body] = parts.as_slice() else {
        return ParsedFragment { metadata: Metadata::new(), content: text.trim().to_string() };
    };

    ParsedFragment { metadata: parse_block(block.trim()), content: body.trim().to_string() }
}

fn parse_block(block: &str) -> Metadata {
    let mut metadata = Metadata::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let value = unquote(value.trim());
        let value = value.strip_prefix('@').unwrap_or(value);

        metadata.insert(key.trim().to_string(), value.to_string());
    }

    metadata
}

/// Strip exactly one layer of matching single or double quotes.
///
/// A lone quote character is treated as an empty quoted value.
pub(crate) fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}
