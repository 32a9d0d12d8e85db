//! Persisted "last announced version" checkpoint.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("failed to read checkpoint {0}: {1}")]
    Read(String, #[source] io::Error),

    #[error("failed to write checkpoint {0}: {1}")]
    Write(String, #[source] io::Error),
}

/// Storage for the last version a notification was delivered for.
pub trait CheckpointStore {
    fn read_version(&self) -> Result<Option<String>, CheckpointError>;
    fn write_version(&self, version: &str) -> Result<(), CheckpointError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct CheckpointFile {
    last_checked_version: Option<String>,
}

/// Checkpoint stored as `{"last_checked_version": "..."}` in a JSON file.
///
/// Reads and writes are not locked; concurrent runs must be serialized by
/// the caller.
#[derive(Debug, Clone)]
pub struct JsonFileCheckpoint {
    path: PathBuf,
}

impl JsonFileCheckpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CheckpointStore for JsonFileCheckpoint {
    fn read_version(&self) -> Result<Option<String>, CheckpointError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no checkpoint at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(CheckpointError::Read(self.path.display().to_string(), e)),
        };

        match serde_json::from_str::<CheckpointFile>(&text) {
            Ok(file) => Ok(file.last_checked_version),
            Err(e) => {
                warn!("invalid JSON in {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    fn write_version(&self, version: &str) -> Result<(), CheckpointError> {
        let file = CheckpointFile { last_checked_version: Some(version.to_string()) };
        let json = serde_json::to_string(&file).unwrap_or_default();
        std::fs::write(&self.path, json)
            .map_err(|e| CheckpointError::Write(self.path.display().to_string(), e))
    }
}

/// In-memory checkpoint, for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryCheckpoint {
    version: RefCell<Option<String>>,
}

impl MemoryCheckpoint {
    pub fn with_version(version: &str) -> Self {
        Self { version: RefCell::new(Some(version.to_string())) }
    }

    pub fn current(&self) -> Option<String> {
        self.version.borrow().clone()
    }
}

impl CheckpointStore for MemoryCheckpoint {
    fn read_version(&self) -> Result<Option<String>, CheckpointError> {
        Ok(self.current())
    }

    fn write_version(&self, version: &str) -> Result<(), CheckpointError> {
        *self.version.borrow_mut() = Some(version.to_string());
        Ok(())
    }
}
