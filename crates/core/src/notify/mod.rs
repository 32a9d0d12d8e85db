//! Release notifications.
//!
//! This module provides:
//! - A checkpoint store remembering the last announced release
//! - Notification sinks (Slack)
//! - The checker that detects an unannounced release and sends its summary

pub mod checker;
pub mod checkpoint;
pub mod sink;

pub use checker::{
    NotifyOutcome, PendingRelease, ReleaseCheckError, ReleaseNotifier, UpdateStatus,
    check_for_updates,
};
pub use checkpoint::{CheckpointError, CheckpointStore, JsonFileCheckpoint, MemoryCheckpoint};
pub use sink::{NotificationSink, NotifyError, SlackSink};
