//! One-shot move advice for a board given as text.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use tracing::instrument;
use unbeatable_tictactoe::{Board, Outcome, evaluate};

/// Describes the computer's best move on `board_text`.
///
/// Finished games are reported as such instead of searched.
#[instrument(skip(config))]
pub fn best_move_text(config: &GameConfig, board_text: &str) -> Result<String> {
    let board: Board = board_text
        .parse()
        .with_context(|| format!("Failed to parse board {:?}", board_text))?;

    let outcome = evaluate(&board);
    if outcome != Outcome::NoWinnerYet {
        return Ok(format!("{}\n\nGame over: {}", board, outcome));
    }

    let report = config
        .searcher()
        .search(&board)
        .context("Failed to search board")?;
    let verdict = match report.score {
        s if s > 0 => "computer wins",
        0 => "draw",
        _ => "human wins",
    };
    Ok(format!(
        "{}\n\nBest move for O: row {}, column {} (cell {}), expected result: {}",
        board,
        report.position.row + 1,
        report.position.column + 1,
        report.position.to_index(board.dimensions()) + 1,
        verdict,
    ))
}
