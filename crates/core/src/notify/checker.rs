//! New-release detection and announcement.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

use super::checkpoint::{CheckpointError, CheckpointStore};
use super::sink::NotificationSink;
use crate::changelog::{ChangelogError, VersionComparison, entries_between};
use crate::render::{Format, render_comparison};
use crate::versions::{list_versions, to_dotted};

#[derive(Debug, Error)]
pub enum ReleaseCheckError {
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error("failed to list release directories under {0}: {1}")]
    Io(String, #[source] std::io::Error),
}

/// A release that has not been announced yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRelease {
    /// Newest release, in directory (dashed) form.
    pub latest: String,
    /// Checkpointed version, if any.
    pub last_checked: Option<String>,
    pub comparison: VersionComparison,
    /// Markdown summary of the comparison.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    NoVersions,
    UpToDate { version: String },
    Pending(PendingRelease),
}

/// Compare the newest release on disk against the checkpoint.
///
/// Without a checkpoint, the comparison starts at the oldest release.
pub fn check_for_updates(
    root: &Path,
    checkpoint: &dyn CheckpointStore,
) -> Result<UpdateStatus, ReleaseCheckError> {
    let versions =
        list_versions(root).map_err(|e| ReleaseCheckError::Io(root.display().to_string(), e))?;

    let (Some(oldest), Some(latest)) = (versions.first(), versions.last()) else {
        warn!("no versions found under {}", root.display());
        return Ok(UpdateStatus::NoVersions);
    };

    let last_checked = checkpoint.read_version()?;
    info!(
        "latest version: {}, last checked: {}",
        latest,
        last_checked.as_deref().unwrap_or("none")
    );

    if last_checked.as_deref() == Some(latest.as_str()) {
        return Ok(UpdateStatus::UpToDate { version: latest.clone() });
    }

    let from = to_dotted(last_checked.as_deref().unwrap_or(oldest));
    let to = to_dotted(latest);

    let comparison = match entries_between(root, &from, &to) {
        Ok(comparison) => comparison,
        Err(ChangelogError::EmptyRange { .. }) => VersionComparison {
            from_version: from,
            to_version: to,
            entries: Vec::new(),
            files: Vec::new(),
        },
        Err(e) => return Err(e.into()),
    };

    let summary = render_comparison(&comparison, Format::Markdown);

    Ok(UpdateStatus::Pending(PendingRelease {
        latest: latest.clone(),
        last_checked,
        comparison,
        summary,
    }))
}

/// Result of one notifier run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    NoVersions,
    UpToDate { version: String },
    /// Announcement rendered but not sent; checkpoint untouched.
    DryRun { version: String, text: String },
    /// Announcement delivered; checkpoint advanced.
    Sent { version: String, text: String },
    /// Delivery failed; checkpoint untouched so the next run retries.
    Failed { version: String, reason: String },
}

/// Checks for a new release and forwards its summary to a sink.
pub struct ReleaseNotifier<'a> {
    root: PathBuf,
    product: String,
    checkpoint: &'a dyn CheckpointStore,
    sink: Option<&'a dyn NotificationSink>,
}

impl<'a> ReleaseNotifier<'a> {
    pub fn new(
        root: impl Into<PathBuf>,
        product: impl Into<String>,
        checkpoint: &'a dyn CheckpointStore,
    ) -> Self {
        Self { root: root.into(), product: product.into(), checkpoint, sink: None }
    }

    pub fn with_sink(mut self, sink: &'a dyn NotificationSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn run(&self, dry_run: bool) -> Result<NotifyOutcome, ReleaseCheckError> {
        let pending = match check_for_updates(&self.root, self.checkpoint)? {
            UpdateStatus::NoVersions => return Ok(NotifyOutcome::NoVersions),
            UpdateStatus::UpToDate { version } => {
                info!("already announced {}", version);
                return Ok(NotifyOutcome::UpToDate { version });
            }
            UpdateStatus::Pending(pending) => pending,
        };

        let version = pending.latest;
        let text = format!(
            "New {} release: {}\n{}",
            self.product,
            to_dotted(&version),
            pending.summary
        );

        if dry_run {
            info!("dry run: not sending notification for {}", version);
            return Ok(NotifyOutcome::DryRun { version, text });
        }

        let Some(sink) = self.sink else {
            error!("no notification sink configured");
            return Ok(NotifyOutcome::Failed {
                version,
                reason: "no notification sink configured".to_string(),
            });
        };

        match sink.send(&version, &text) {
            Ok(()) => {
                info!("notification sent for {}", version);
                self.checkpoint.write_version(&version)?;
                Ok(NotifyOutcome::Sent { version, text })
            }
            Err(e) => {
                error!("failed to send notification for {}: {}", version, e);
                Ok(NotifyOutcome::Failed { version, reason: e.to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::checkpoint::MemoryCheckpoint;
    use crate::notify::sink::NotifyError;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingSink {
        sent: RefCell<Vec<(String, String)>>,
        fail: bool,
    }

    impl NotificationSink for RecordingSink {
        fn send(&self, version: &str, text: &str) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Rejected("channel_not_found".into()));
            }
            self.sent.borrow_mut().push((version.to_string(), text.to_string()));
            Ok(())
        }
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn repo() -> TempDir {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "changelog/release-6-4-20-0/2023-01-05-fix-cart.md", "Cart fix");
        write(
            tmp.path(),
            "changelog/release-6-4-21-0/2023-02-10-fix-search.md",
            "---\ntitle: Improve search\nauthor: jdoe\n---\nSearch is faster.",
        );
        tmp
    }

    #[test]
    fn empty_root_has_no_versions() {
        let tmp = TempDir::new().unwrap();
        let checkpoint = MemoryCheckpoint::default();
        let status = check_for_updates(tmp.path(), &checkpoint).unwrap();
        assert_eq!(status, UpdateStatus::NoVersions);
    }

    #[test]
    fn up_to_date_when_checkpoint_matches_latest() {
        let root = repo();
        let checkpoint = MemoryCheckpoint::with_version("6-4-21-0");
        let status = check_for_updates(root.path(), &checkpoint).unwrap();
        assert_eq!(status, UpdateStatus::UpToDate { version: "6-4-21-0".into() });
    }

    #[test]
    fn pending_release_starts_after_checkpoint() {
        let root = repo();
        let checkpoint = MemoryCheckpoint::with_version("6-4-20-0");

        let UpdateStatus::Pending(pending) = check_for_updates(root.path(), &checkpoint).unwrap()
        else {
            panic!("expected a pending release");
        };

        assert_eq!(pending.latest, "6-4-21-0");
        assert_eq!(pending.last_checked.as_deref(), Some("6-4-20-0"));
        assert_eq!(pending.comparison.entries.len(), 1);
        assert_eq!(pending.comparison.entries[0].title, "Improve search");
        assert!(pending.summary.starts_with("# Changelog entries from 6.4.20.0 to 6.4.21.0"));
    }

    #[test]
    fn without_checkpoint_starts_at_oldest_release() {
        let root = repo();
        let checkpoint = MemoryCheckpoint::default();

        let UpdateStatus::Pending(pending) = check_for_updates(root.path(), &checkpoint).unwrap()
        else {
            panic!("expected a pending release");
        };
        assert_eq!(pending.comparison.from_version, "6.4.20.0");
        assert!(pending.comparison.entries.iter().all(|e| e.version == "6.4.21.0"));
    }

    #[test]
    fn single_release_without_checkpoint_is_announced_empty() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "changelog/release-6-4-20-0/2023-01-05-fix-cart.md", "Cart fix");

        let checkpoint = MemoryCheckpoint::default();
        let UpdateStatus::Pending(pending) = check_for_updates(tmp.path(), &checkpoint).unwrap()
        else {
            panic!("expected a pending release");
        };
        assert!(pending.comparison.entries.is_empty());
    }

    #[test]
    fn successful_send_advances_checkpoint() {
        let root = repo();
        let checkpoint = MemoryCheckpoint::with_version("6-4-20-0");
        let sink = RecordingSink::default();

        let outcome = ReleaseNotifier::new(root.path(), "Shopware", &checkpoint)
            .with_sink(&sink)
            .run(false)
            .unwrap();

        let NotifyOutcome::Sent { version, text } = outcome else {
            panic!("expected Sent");
        };
        assert_eq!(version, "6-4-21-0");
        assert!(text.starts_with("New Shopware release: 6.4.21.0\n# Changelog entries"));
        assert_eq!(checkpoint.current().as_deref(), Some("6-4-21-0"));
        assert_eq!(sink.sent.borrow().len(), 1);
    }

    #[test]
    fn failed_send_leaves_checkpoint_stale() {
        let root = repo();
        let checkpoint = MemoryCheckpoint::with_version("6-4-20-0");
        let sink = RecordingSink { fail: true, ..Default::default() };

        let notifier = ReleaseNotifier::new(root.path(), "Shopware", &checkpoint).with_sink(&sink);
        let outcome = notifier.run(false).unwrap();

        assert!(matches!(outcome, NotifyOutcome::Failed { .. }));
        assert_eq!(checkpoint.current().as_deref(), Some("6-4-20-0"));

        // The same release is offered again on the next run.
        assert!(matches!(notifier.run(true).unwrap(), NotifyOutcome::DryRun { .. }));
    }

    #[test]
    fn dry_run_neither_sends_nor_writes() {
        let root = repo();
        let checkpoint = MemoryCheckpoint::default();
        let sink = RecordingSink::default();

        let outcome = ReleaseNotifier::new(root.path(), "Shopware", &checkpoint)
            .with_sink(&sink)
            .run(true)
            .unwrap();

        assert!(matches!(outcome, NotifyOutcome::DryRun { .. }));
        assert!(sink.sent.borrow().is_empty());
        assert_eq!(checkpoint.current(), None);
    }

    #[test]
    fn missing_sink_fails_without_writing() {
        let root = repo();
        let checkpoint = MemoryCheckpoint::default();

        let outcome = ReleaseNotifier::new(root.path(), "Shopware", &checkpoint).run(false).unwrap();
        assert!(matches!(outcome, NotifyOutcome::Failed { .. }));
        assert_eq!(checkpoint.current(), None);
    }

    #[test]
    fn up_to_date_run_does_not_send() {
        let root = repo();
        let checkpoint = MemoryCheckpoint::with_version("6-4-21-0");
        let sink = RecordingSink::default();

        let outcome = ReleaseNotifier::new(root.path(), "Shopware", &checkpoint)
            .with_sink(&sink)
            .run(false)
            .unwrap();
        assert_eq!(outcome, NotifyOutcome::UpToDate { version: "6-4-21-0".into() });
        assert!(sink.sent.borrow().is_empty());
    }
}
