use std::path::{Path, PathBuf};

use dialoguer::{FuzzySelect, theme::ColorfulTheme};
use relwatch_core::changelog::{list_fragment_files, parse_fragment};
use relwatch_core::config::ResolvedConfig;
use relwatch_core::render::render_entry_named;

use super::{emit, fail, report_fallback, sync_root};

pub fn run(cfg: &ResolvedConfig, offline: bool, file: Option<&Path>, format: &str) {
    let root = sync_root(cfg, offline);

    let file = match file {
        Some(f) => relative_to(&root, f),
        None => pick_file(&root),
    };

    let entry = parse_fragment(&root, &file).unwrap_or_else(|e| fail(e));
    let rendered = render_entry_named(&entry, format);
    report_fallback(&rendered);
    emit(&rendered.text, None);
}

/// Accept paths relative to the root or absolute paths inside it.
fn relative_to(root: &Path, file: &Path) -> PathBuf {
    file.strip_prefix(root).unwrap_or(file).to_path_buf()
}

fn pick_file(root: &Path) -> PathBuf {
    let files = list_fragment_files(root).unwrap_or_else(|e| fail(e));
    if files.is_empty() {
        fail("No changelog files found");
    }

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Changelog file")
        .items(&files)
        .default(0)
        .interact_opt();

    match selection {
        Ok(Some(idx)) => PathBuf::from(&files[idx]),
        Ok(None) => fail("No file selected"),
        Err(e) => fail(format!("interactive selection failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_root_from_absolute_paths() {
        let root = Path::new("/srv/repo");
        assert_eq!(
            relative_to(root, Path::new("/srv/repo/changelog/release-1-0/a.md")),
            PathBuf::from("changelog/release-1-0/a.md")
        );
        assert_eq!(
            relative_to(root, Path::new("changelog/release-1-0/a.md")),
            PathBuf::from("changelog/release-1-0/a.md")
        );
    }
}
