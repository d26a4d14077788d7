//! Tic Tac Toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_tui::TuiConfig;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = TuiConfig::load(&cli.config)
        .context("Failed to load configuration")?
        .with_log_file(cli.log_file);

    tictactoe_tui::init_tracing(&config)?;
    info!(config = ?config, "Configuration resolved");

    tictactoe_tui::run(&config)
}
