//! Draw detection logic for tic-tac-toe.

use super::win::winning_mark;
use crate::Board;

/// Checks if the board is a draw: every cell marked and no line complete.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_mark(board).is_none()
}
