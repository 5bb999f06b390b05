//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};

/// Uniformity of a line scanned so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// No cell seen yet.
    Unset,
    /// Every cell seen so far holds this mark.
    Uniform(Mark),
    /// Two cells differ; the line cannot complete.
    Diverged,
}

impl LineState {
    fn observe(self, mark: Mark) -> Self {
        match self {
            LineState::Unset => LineState::Uniform(mark),
            LineState::Uniform(seen) if seen == mark => self,
            LineState::Uniform(_) | LineState::Diverged => LineState::Diverged,
        }
    }

    /// The mark completing this line, if it is uniform and not empty.
    fn completed(self) -> Option<Mark> {
        match self {
            LineState::Uniform(mark) if !mark.is_empty() => Some(mark),
            _ => None,
        }
    }
}

/// Returns the mark of a completed line, if any.
///
/// Rows and columns are scanned together by index, then the main
/// diagonal, then the anti-diagonal. The first completed line in that
/// order decides: at each index the row is checked before the column.
/// Only synthetic boards can complete two lines at once.
pub fn winning_mark(board: &Board) -> Option<Mark> {
    let n = board.dimensions();
    let mut main_diagonal = LineState::Unset;
    let mut anti_diagonal = LineState::Unset;

    for i in 0..n {
        main_diagonal = main_diagonal.observe(board.get(Position::new(i, i)));
        anti_diagonal = anti_diagonal.observe(board.get(Position::new(i, n - 1 - i)));

        let mut row = LineState::Unset;
        let mut column = LineState::Unset;
        for j in 0..n {
            row = row.observe(board.get(Position::new(i, j)));
            column = column.observe(board.get(Position::new(j, i)));
        }

        if let Some(mark) = row.completed().or(column.completed()) {
            return Some(mark);
        }
    }

    main_diagonal.completed().or(anti_diagonal.completed())
}
