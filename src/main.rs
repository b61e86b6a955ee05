//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use tictactoe_cli::{Config, Renderer, SaveFile, Session, SessionEnd, Variant};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    let config = resolve_config(&cli)?;
    let end = match config.variant() {
        Variant::Classic => run_session::<3>(&config)?,
        Variant::Large => run_session::<4>(&config)?,
    };

    info!(?end, "Session ended");
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Merges the config file with command-line overrides.
#[instrument(skip(cli), fields(config = %cli.config.display()))]
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config).context("Failed to load config")?;

    if let Some(variant) = cli.variant {
        config = config.with_variant(variant);
    }
    if let Some(save_file) = &cli.save_file {
        config = config.with_save_file(save_file.clone());
    }
    if let Some(save_policy) = cli.save_policy {
        config = config.with_save_policy(save_policy);
    }
    if cli.no_color {
        config = config.with_color(false);
    }

    info!(?config, "Configuration resolved");
    Ok(config)
}

/// Runs a session on the real terminal with an N×N board.
#[instrument(skip(config), fields(variant = %config.variant()))]
fn run_session<const N: usize>(config: &Config) -> Result<SessionEnd> {
    let mut session = Session::<_, _, N>::new(
        io::stdin().lock(),
        io::stdout().lock(),
        SaveFile::new(config.save_file()),
        *config.save_policy(),
        Renderer::new(*config.color()),
    );

    session.run().context("Terminal I/O failed")
}
