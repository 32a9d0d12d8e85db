use crossterm::style::Stylize;
use relwatch_core::config::{ResolvedConfig, SlackCredentials};
use relwatch_core::notify::{JsonFileCheckpoint, NotifyOutcome, ReleaseNotifier, SlackSink};
use relwatch_core::versions::to_dotted;

use super::{fail, sync_root};

pub fn run(cfg: &ResolvedConfig, offline: bool, dry_run: bool) {
    // Credentials are checked before any network access.
    let sink = if dry_run {
        None
    } else {
        let credentials = SlackCredentials::from_env().unwrap_or_else(|e| fail(e));
        Some(SlackSink::new(&credentials).unwrap_or_else(|e| fail(e)))
    };

    let root = sync_root(cfg, offline);
    let checkpoint = JsonFileCheckpoint::new(&cfg.state_file);

    let mut notifier = ReleaseNotifier::new(&root, &cfg.product, &checkpoint);
    if let Some(ref sink) = sink {
        notifier = notifier.with_sink(sink);
    }

    match notifier.run(dry_run).unwrap_or_else(|e| fail(e)) {
        NotifyOutcome::NoVersions => println!("No changelog versions found"),
        NotifyOutcome::UpToDate { version } => {
            println!("Already notified about {}", to_dotted(&version));
        }
        NotifyOutcome::DryRun { version, text } => {
            println!("{} would notify about {}\n", "Dry run:".yellow().bold(), to_dotted(&version));
            println!("{text}");
        }
        NotifyOutcome::Sent { version, .. } => {
            println!("{} notification sent for {}", "OK".green().bold(), to_dotted(&version));
        }
        NotifyOutcome::Failed { version, reason } => {
            fail(format!("notification for {} failed: {reason}", to_dotted(&version)));
        }
    }
}
