#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod changelog;
pub mod config;
pub mod frontmatter;
pub mod notify;
pub mod render;
pub mod source;
pub mod versions;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
