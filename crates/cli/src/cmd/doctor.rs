use crossterm::style::Stylize;
use relwatch_core::config::{ResolvedConfig, SlackCredentials, default_config_path};
use relwatch_core::notify::{CheckpointStore, JsonFileCheckpoint};
use relwatch_core::versions::list_versions;

/// Print the resolved configuration without touching the network.
pub fn run(cfg: &ResolvedConfig) {
    println!("{}   relwatch doctor", "OK".green().bold());
    println!(
        "config: {}",
        cfg.loaded_from.as_ref().map_or_else(
            || format!("(defaults; looked for {})", default_config_path().display()),
            |p| p.display().to_string()
        )
    );
    println!("product: {}", cfg.product);
    println!("repo_url: {}", cfg.repo_url);
    println!("repo_path: {}", cfg.repo_path.display());
    println!("state_file: {}", cfg.state_file.display());
    println!("logging.level: {}", cfg.logging.level);
    if let Some(ref file) = cfg.logging.file {
        println!("logging.file: {}", file.display());
    }

    match list_versions(&cfg.repo_path) {
        Ok(versions) if cfg.repo_path.is_dir() => {
            println!("releases: {}", versions.len());
            if let Some(latest) = versions.last() {
                println!("latest: {latest}");
            }
        }
        Ok(_) => println!("releases: (repository not cloned yet)"),
        Err(e) => println!("releases: {} {e}", "FAIL".red().bold()),
    }

    match JsonFileCheckpoint::new(&cfg.state_file).read_version() {
        Ok(Some(version)) => println!("last_checked: {version}"),
        Ok(None) => println!("last_checked: (none)"),
        Err(e) => println!("last_checked: {} {e}", "FAIL".red().bold()),
    }

    match SlackCredentials::from_env() {
        Ok(creds) => println!("slack: configured (channel {})", creds.channel),
        Err(e) => println!("slack: {} {e}", "MISSING".yellow().bold()),
    }
}
