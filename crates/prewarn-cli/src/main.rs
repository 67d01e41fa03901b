use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use prewarn_config::PrewarnConfig;

mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("prewarn error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    match &cli.command {
        cli::Commands::Categories => return commands::categories::handle(&flags),
        cli::Commands::Schema => return commands::schema::handle(&flags),
        _ => {}
    }

    let config = PrewarnConfig::load_with_dotenv().context("failed to load configuration")?;
    context::warn_unconfigured(&config);

    let data_dir = resolve_data_dir(flags.data_dir.as_deref(), &config)?;
    let command = cli.command;
    // Taken before the store is read so the read-modify-write is exclusive.
    let write_lock = if command_requires_write_lock(&command) {
        Some(prewarn_store::acquire_write_lock(&data_dir).await?)
    } else {
        None
    };

    let mut ctx = context::AppContext::init(&data_dir, config)
        .context("failed to initialize prewarn application context")?;
    if let Some(guard) = write_lock {
        ctx.hold_write_lock(guard);
    }

    commands::dispatch::dispatch(command, &mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PREWARN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_data_dir(
    data_dir_override: Option<&str>,
    config: &PrewarnConfig,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = data_dir_override {
        let explicit = PathBuf::from(path);
        if explicit.exists() && !explicit.is_dir() {
            anyhow::bail!(
                "invalid --data-dir '{}': not a directory",
                explicit.display()
            );
        }
        return Ok(explicit);
    }

    config
        .storage
        .resolve_data_dir()
        .context("no data directory available; pass --data-dir or set storage.data_dir")
}

fn command_requires_write_lock(command: &cli::Commands) -> bool {
    use crate::cli::subcommands::LogCommands;

    match command {
        cli::Commands::Log { action } => !matches!(action, LogCommands::List { .. }),
        cli::Commands::Dashboard(_)
        | cli::Commands::Predict { .. }
        | cli::Commands::Prompt { .. }
        | cli::Commands::Categories
        | cli::Commands::Schema => false,
    }
}
