mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use relwatch_core::config::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "relwatch",
    version,
    about = "Compare vendor changelog fragments between releases and announce new ones"
)]
pub(crate) struct Cli {
    /// Config file (defaults to ~/.config/relwatch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Local checkout of the changelog repository
    #[arg(long, global = true)]
    repo_path: Option<PathBuf>,

    /// Use the local checkout as is, without cloning or pulling
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List release versions found in the changelog directory
    ListVersions,

    /// Aggregate entries of every release after FROM up to TO
    Compare(CompareArgs),

    /// Render a single changelog file
    Show(ShowArgs),

    /// Render the entries of one release
    Release(ReleaseArgs),

    /// Announce a new release to Slack if one appeared since the last run
    Notify(NotifyArgs),

    /// Validate configuration and print resolved settings
    Doctor,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// Version to compare from (excluded)
    from: String,

    /// Version to compare to (included, defaults to the latest release)
    to: Option<String>,

    /// Output format: markdown, json, yaml or original
    #[arg(short, long, default_value = "markdown")]
    format: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Changelog file relative to the repository root; prompts when omitted
    file: Option<PathBuf>,

    /// Output format: original, markdown, yaml or json
    #[arg(short, long, default_value = "original")]
    format: String,
}

#[derive(Debug, Args)]
struct ReleaseArgs {
    /// Release version, dotted or dashed
    version: String,

    /// Output format: markdown, json, yaml or original
    #[arg(short, long, default_value = "markdown")]
    format: String,
}

#[derive(Debug, Args)]
struct NotifyArgs {
    /// Print the message instead of sending it; never updates the state file
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        cmd::completions::run(shell);
        return;
    }

    let mut cfg = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(path) = cli.repo_path {
        cfg.repo_path = path;
    }

    logging::init(&cfg.logging);

    match cli.command {
        Commands::ListVersions => cmd::list_versions::run(&cfg, cli.offline),
        Commands::Compare(args) => cmd::compare::run(
            &cfg,
            cli.offline,
            &args.from,
            args.to.as_deref(),
            &args.format,
            args.output.as_deref(),
        ),
        Commands::Show(args) => {
            cmd::show::run(&cfg, cli.offline, args.file.as_deref(), &args.format);
        }
        Commands::Release(args) => {
            cmd::release::run(&cfg, cli.offline, &args.version, &args.format);
        }
        Commands::Notify(args) => cmd::notify::run(&cfg, cli.offline, args.dry_run),
        Commands::Doctor => cmd::doctor::run(&cfg),
        Commands::Completions { .. } => unreachable!("handled before config load"),
    }

    logging::flush();
}
