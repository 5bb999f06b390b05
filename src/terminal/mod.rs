//! Line-based terminal front end.

mod input;

pub use input::{Command, Input, parse_line};

use crate::config::GameConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::session::GameSession;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::{Outcome, Player};

const HELP: &str = "\
Type a cell number as shown on the board, or row,column (both from 1).
Commands: restart (r), help (?), quit (q).";

/// Plays games at the terminal until the player quits or stdin closes.
#[instrument(skip(config))]
pub async fn run(config: GameConfig) -> Result<()> {
    info!("Starting terminal game");
    let dimensions = *config.dimensions();
    let session = GameSession::new(&config).context("Failed to create game session")?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(session, config.thinking_delay(), event_tx);

    println!("You are X. The computer is O.");
    println!("{}", HELP);
    orchestrator.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = event_rx.recv() => {
                if let Some(text) = describe(&event) {
                    println!("{}", text);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    debug!("Stdin closed");
                    break;
                };
                match parse_line(&line, dimensions) {
                    Some(Input::Command(Command::Quit)) => break,
                    Some(Input::Command(Command::Help)) => println!("{}", HELP),
                    Some(Input::Command(Command::Restart)) => orchestrator.restart().await?,
                    Some(Input::Move(position)) => {
                        if let Err(e) = orchestrator.human_move(position).await {
                            println!("{}", e);
                        }
                    }
                    Some(Input::Nothing) => {}
                    None => println!("Didn't understand {:?}. {}", line.trim(), HELP),
                }
            }
        }
    }

    info!("Terminal game finished");
    Ok(())
}

/// Text shown for an event, if any.
pub fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::BoardChanged(board) => Some(format!("\n{}\n", board)),
        GameEvent::ComputerThinking => Some("Computer is thinking...".to_string()),
        GameEvent::MoveMade {
            player: Player::Computer,
            position,
        } => Some(format!(
            "Computer plays row {}, column {}.",
            position.row + 1,
            position.column + 1
        )),
        GameEvent::MoveMade {
            player: Player::Human,
            ..
        } => None,
        GameEvent::GameOver(Outcome::Won(Player::Human)) => {
            Some("You win! Type restart to play again.".to_string())
        }
        GameEvent::GameOver(Outcome::Won(Player::Computer)) => {
            Some("The computer wins. Type restart to play again.".to_string())
        }
        GameEvent::GameOver(outcome) => {
            Some(format!("{}. Type restart to play again.", outcome))
        }
        GameEvent::Restarted => Some("New game.".to_string()),
    }
}
