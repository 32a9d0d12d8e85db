use relwatch_core::changelog::count_fragments;
use relwatch_core::config::ResolvedConfig;
use relwatch_core::versions::{list_versions, to_dotted};
use tabled::{Table, Tabled, settings::Style};

use super::{fail, sync_root};

#[derive(Tabled)]
struct VersionRow {
    #[tabled(rename = "Release")]
    release: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Entries")]
    entries: usize,
}

pub fn run(cfg: &ResolvedConfig, offline: bool) {
    let root = sync_root(cfg, offline);

    let versions = list_versions(&root).unwrap_or_else(|e| fail(e));
    if versions.is_empty() {
        fail("No changelog versions found");
    }

    let mut rows = Vec::with_capacity(versions.len());
    for v in &versions {
        let entries = count_fragments(&root, v).unwrap_or_else(|e| fail(e));
        rows.push(VersionRow { release: v.clone(), version: to_dotted(v), entries });
    }

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!("\nTotal: {} versions", rows.len());
}
