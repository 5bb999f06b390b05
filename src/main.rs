//! Unbeatable - terminal tic-tac-toe against an optimal opponent.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable::{Cli, Command, GameConfig, hint, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;

    match cli.command {
        Command::Play => run_play(config).await,
        Command::Hint { board } => run_hint(&config, &board),
    }
}

/// Run an interactive game at the terminal
#[instrument(skip(config))]
async fn run_play(config: GameConfig) -> Result<()> {
    info!(?config, "Starting unbeatable");
    terminal::run(config).await
}

/// Print the best move for a single board
#[instrument(skip(config))]
fn run_hint(config: &GameConfig, board: &str) -> Result<()> {
    println!("{}", hint::best_move_text(config, board)?);
    Ok(())
}
