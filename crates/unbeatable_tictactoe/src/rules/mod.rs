//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine can use them as its terminal oracle.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::winning_mark;

use crate::{Board, Outcome};

/// Evaluates a board: a completed line wins, a full board draws,
/// anything else is still open.
///
/// Total over all boards. When several lines are complete at once the
/// winner is the first found in [`winning_mark`]'s scan order.
pub fn evaluate(board: &Board) -> Outcome {
    match winning_mark(board).and_then(|mark| mark.player()) {
        Some(player) => Outcome::Won(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::NoWinnerYet,
    }
}
