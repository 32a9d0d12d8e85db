use relwatch_core::changelog::entries_for_version;
use relwatch_core::config::ResolvedConfig;
use relwatch_core::render::render_entries_named;

use super::{emit, fail, report_fallback, sync_root};

pub fn run(cfg: &ResolvedConfig, offline: bool, version: &str, format: &str) {
    let root = sync_root(cfg, offline);

    let entries = entries_for_version(&root, version).unwrap_or_else(|e| fail(e));
    if entries.is_empty() {
        eprintln!("No changelog entries for {version}");
        return;
    }

    let rendered = render_entries_named(&entries, format);
    report_fallback(&rendered);
    emit(&rendered.text, None);
}
