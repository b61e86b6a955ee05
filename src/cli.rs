//! Command-line interface for tictactoe_cli.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_cli::{DEFAULT_CONFIG_FILE, SavePolicy, Variant};

/// Two-player tic-tac-toe in the terminal, with save and resume
#[derive(Parser, Debug)]
#[command(name = "tictactoe_cli")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board variant (overrides the config file)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Save file path (overrides the config file)
    #[arg(long)]
    pub save_file: Option<PathBuf>,

    /// When a loaded save is emptied (overrides the config file)
    #[arg(long, value_enum)]
    pub save_policy: Option<SavePolicy>,

    /// Print the board without colours
    #[arg(long)]
    pub no_color: bool,

    /// Path to the TOML config file (optional)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Log filter directive, e.g. "debug" or "tictactoe_cli=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}
