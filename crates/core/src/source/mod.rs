//! Where changelog fragments come from.
//!
//! A [`ChangelogSource`] makes a directory containing `changelog/` available
//! locally and returns its path. [`GitCheckout`] keeps a clone of the
//! upstream repository current; [`LocalDirectory`] uses a directory as is.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("git {action} failed for {path}: {stderr}")]
    Git { action: &'static str, path: String, stderr: String },

    #[error("changelog directory not found: {0}")]
    Missing(String),
}

pub trait ChangelogSource {
    /// Bring the source up to date and return the repository root.
    fn sync(&self) -> Result<PathBuf, SourceError>;
}

/// A git clone of the upstream repository, cloned on first use and pulled
/// afterwards.
#[derive(Debug, Clone)]
pub struct GitCheckout {
    url: String,
    path: PathBuf,
}

impl GitCheckout {
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { url: url.into(), path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run_git(&self, action: &'static str, args: &[&str]) -> Result<(), SourceError> {
        debug!("git {}", args.join(" "));
        let output = Command::new("git").args(args).output().map_err(SourceError::Spawn)?;

        if !output.status.success() {
            return Err(SourceError::Git {
                action,
                path: self.path.display().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl ChangelogSource for GitCheckout {
    fn sync(&self) -> Result<PathBuf, SourceError> {
        let path = self.path.to_string_lossy();
        if self.path.join(".git").exists() {
            info!("updating repository at {}", path);
            self.run_git("pull", &["-C", &path, "pull", "--ff-only", "--quiet"])?;
        } else {
            info!("cloning {} into {}", self.url, path);
            self.run_git("clone", &["clone", "--quiet", &self.url, &path])?;
        }
        Ok(self.path.clone())
    }
}

/// An existing directory used without any syncing.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    path: PathBuf,
}

impl LocalDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ChangelogSource for LocalDirectory {
    fn sync(&self) -> Result<PathBuf, SourceError> {
        if !self.path.is_dir() {
            return Err(SourceError::Missing(self.path.display().to_string()));
        }
        Ok(self.path.clone())
    }
}
