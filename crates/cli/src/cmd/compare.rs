use std::path::Path;

use relwatch_core::changelog::entries_between;
use relwatch_core::config::ResolvedConfig;
use relwatch_core::render::render_comparison_named;
use relwatch_core::versions::{latest_version, to_dotted};

use super::{emit, fail, report_fallback, sync_root};

pub fn run(
    cfg: &ResolvedConfig,
    offline: bool,
    from: &str,
    to: Option<&str>,
    format: &str,
    output: Option<&Path>,
) {
    let root = sync_root(cfg, offline);

    let to = match to {
        Some(v) => v.to_string(),
        None => match latest_version(&root) {
            Ok(Some(latest)) => to_dotted(&latest),
            Ok(None) => fail("No changelog versions found"),
            Err(e) => fail(e),
        },
    };

    let comparison = entries_between(&root, from, &to).unwrap_or_else(|e| fail(e));

    eprintln!("Parsed {} changelog files:", comparison.files.len());
    for file in &comparison.files {
        eprintln!("  - {file}");
    }

    let rendered = render_comparison_named(&comparison, format);
    report_fallback(&rendered);
    emit(&rendered.text, output);
}
