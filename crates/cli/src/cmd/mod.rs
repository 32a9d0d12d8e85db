pub mod compare;
pub mod completions;
pub mod doctor;
pub mod list_versions;
pub mod notify;
pub mod release;
pub mod show;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crossterm::style::Stylize;
use relwatch_core::config::ResolvedConfig;
use relwatch_core::render::Rendered;
use relwatch_core::source::{ChangelogSource, GitCheckout, LocalDirectory};
use tracing::debug;

use crate::logging;

/// Print an error and exit with status 1.
pub fn fail(message: impl Display) -> ! {
    eprintln!("{} {message}", "Error:".red().bold());
    logging::flush();
    std::process::exit(1);
}

/// Tell the user when an unknown format name was replaced by the default.
pub fn report_fallback(rendered: &Rendered) {
    if let Some(ref warning) = rendered.warning {
        eprintln!("{} {warning}; using {}", "Warning:".yellow().bold(), rendered.format);
    }
}

/// Make the changelog repository available and return its root.
///
/// With `offline` the configured path is used as is.
pub fn sync_root(cfg: &ResolvedConfig, offline: bool) -> PathBuf {
    let result = if offline {
        LocalDirectory::new(&cfg.repo_path).sync()
    } else {
        GitCheckout::new(&cfg.repo_url, &cfg.repo_path).sync()
    };
    let root = result.unwrap_or_else(|e| fail(e));
    debug!("changelog root: {}", root.display());
    root
}

/// Write to `output` if given, stdout otherwise.
pub fn emit(text: &str, output: Option<&Path>) {
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, text) {
                fail(format!("failed to write {}: {e}", path.display()));
            }
            eprintln!("{} {}", "Wrote".green(), path.display());
        }
        None => {
            if text.ends_with('\n') {
                print!("{text}");
            } else {
                println!("{text}");
            }
        }
    }
}
