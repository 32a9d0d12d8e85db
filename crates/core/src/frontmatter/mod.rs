//! Frontmatter parsing for changelog fragments.

pub mod parser;
pub mod types;

pub use parser::{FrontmatterError, parse_file, parse_str};
pub(crate) use parser::unquote;
pub use types::{Metadata, ParsedFragment};
