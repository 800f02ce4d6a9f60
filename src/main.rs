//! Waymark CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use waymark::commands::{
    run_add, run_config, run_copy, run_list, run_remove, run_rename, run_resolve, run_tree,
    CommandContext, Report,
};
use waymark::{fs_utils, Cli, Commands, WaymarkConfig};

fn main() -> ExitCode {
    match run() {
        Ok(report) => {
            print!("{}", report.output);
            report.status.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> waymark::Result<Report> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(fs_utils::default_config_path);
    let config = WaymarkConfig::load_from(&config_path)?;
    init_tracing(&config.logging.level, cli.verbose);
    tracing::debug!("Using config {}", config_path.display());

    let registry_path = cli
        .registry
        .clone()
        .unwrap_or_else(|| config.registry_path());
    tracing::debug!("Using registry {}", registry_path.display());

    let ctx = CommandContext::new(cli.format, config, config_path, registry_path);

    match (&cli.command, &cli.query) {
        (Some(Commands::Add(args)), _) => run_add(args, &ctx),
        (Some(Commands::Remove(args)), _) => run_remove(args, &ctx),
        (Some(Commands::Rename(args)), _) => run_rename(args, &ctx),
        (Some(Commands::Copy(args)), _) => run_copy(args, &ctx),
        (Some(Commands::Tree(args)), _) => run_tree(args, &ctx),
        (Some(Commands::Config(args)), _) => run_config(args, &ctx),
        (Some(Commands::List), _) | (None, None) => run_list(&ctx),
        (None, Some(query)) => run_resolve(query, &ctx),
    }
}

/// Logs go to stderr; stdout carries only the command output.
///
/// `RUST_LOG` wins over `--verbose`, which wins over the configured level.
fn init_tracing(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("waymark={}", level)));

    // Note: This may fail if already initialized, which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
