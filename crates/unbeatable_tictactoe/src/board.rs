//! Square board holding per-cell marks.

use crate::{Mark, Position};
use derive_more::{Display, Error};
use serde::Serialize;
use std::str::FromStr;
use tracing::instrument;

/// Error constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Board dimensions must be at least one.
    #[display("Board dimensions must be positive, got {}", _0)]
    InvalidDimensions(#[error(not(source))] usize),
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The input contained no cells.
    #[display("Board text is empty")]
    Empty,
    /// A character that is not a mark or an empty-cell marker.
    #[display("Unexpected cell character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),
    /// Rows have the wrong length or the wrong count for a square board.
    #[display("Board is not square: {} rows, row lengths {:?}", rows, lengths)]
    NotSquare {
        /// Number of rows found.
        rows: usize,
        /// Length of each row.
        lengths: Vec<usize>,
    },
}

/// N×N tic-tac-toe board.
///
/// Boards are values: every ply produces a new board through
/// [`Board::with_move`], so earlier states stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Side length.
    dimensions: usize,
    /// Cells in row-major order.
    cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty board of `dimensions` × `dimensions`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] when `dimensions` is zero.
    #[instrument]
    pub fn new(dimensions: usize) -> Result<Self, BoardError> {
        if dimensions == 0 {
            return Err(BoardError::InvalidDimensions(dimensions));
        }
        Ok(Self {
            dimensions,
            cells: vec![Mark::Empty; dimensions * dimensions],
        })
    }

    /// Side length of the board.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns the mark at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the board. Callers only generate
    /// positions by iterating valid indices, so this is a contract failure.
    pub fn get(&self, position: Position) -> Mark {
        assert!(
            position.is_valid_for(self.dimensions),
            "position {} outside {}x{} board",
            position,
            self.dimensions,
            self.dimensions
        );
        self.cells[position.to_index(self.dimensions)]
    }

    /// Returns the mark at `position`, or `None` if it is off the board.
    pub fn try_get(&self, position: Position) -> Option<Mark> {
        position
            .is_valid_for(self.dimensions)
            .then(|| self.cells[position.to_index(self.dimensions)])
    }

    /// Returns true if the cell at `position` holds no mark.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    /// Returns a copy of this board with `mark` placed at `position`.
    ///
    /// The cell is overwritten unconditionally. Callers guarantee it was
    /// empty; debug builds assert it.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the board.
    pub fn with_move(&self, position: Position, mark: Mark) -> Self {
        debug_assert!(
            self.get(position).is_empty(),
            "cell {} already holds {:?}",
            position,
            self.get(position)
        );
        let mut next = self.clone();
        next.set(position, mark);
        next
    }

    fn set(&mut self, position: Position, mark: Mark) {
        assert!(
            position.is_valid_for(self.dimensions),
            "position {} outside {}x{} board",
            position,
            self.dimensions,
            self.dimensions
        );
        let index = position.to_index(self.dimensions);
        self.cells[index] = mark;
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).filter_map(|i| Position::from_index(i, self.dimensions))
    }

    /// Iterates over empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&p| self.is_empty(p))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// Mark that moves next in a game opened by `opener`.
    ///
    /// The side with fewer placements moves; on equal counts it is the
    /// opener's turn. The board must reflect alternating play.
    pub fn next_mark(&self, opener: Mark) -> Mark {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        match x.cmp(&o) {
            std::cmp::Ordering::Greater => Mark::O,
            std::cmp::Ordering::Less => Mark::X,
            std::cmp::Ordering::Equal => opener,
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders rows separated by rules; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.cells.len().to_string().len();
        let rule = vec!["-".repeat(width); self.dimensions].join("+");
        for row in 0..self.dimensions {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", rule)?;
            }
            for column in 0..self.dimensions {
                if column > 0 {
                    write!(f, "|")?;
                }
                let index = row * self.dimensions + column;
                match self.cells[index] {
                    Mark::Empty => write!(f, "{:>width$}", index + 1, width = width)?,
                    mark => write!(f, "{:>width$}", mark, width = width)?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses rows separated by `/` or newlines.
    ///
    /// Cells are `X`, `O` (either case) or one of `.`, `-`, `_` for empty.
    /// Whitespace inside a row is ignored. Without separators, a string
    /// whose length is a perfect square is split into equal rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.split(['/', '\n']) {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    'X' | 'x' => Ok(Mark::X),
                    'O' | 'o' => Ok(Mark::O),
                    '.' | '-' | '_' => Ok(Mark::Empty),
                    other => Err(ParseBoardError::InvalidCell(other)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }

        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        if rows.len() == 1 {
            let flat = rows.remove(0);
            let side = (1..=flat.len()).find(|n| n * n >= flat.len()).unwrap_or(0);
            if side * side != flat.len() {
                return Err(ParseBoardError::NotSquare {
                    rows: 1,
                    lengths: vec![flat.len()],
                });
            }
            rows = flat.chunks(side).map(<[Mark]>::to_vec).collect();
        }

        let dimensions = rows.len();
        if rows.iter().any(|r| r.len() != dimensions) {
            return Err(ParseBoardError::NotSquare {
                rows: dimensions,
                lengths: rows.iter().map(Vec::len).collect(),
            });
        }

        Ok(Self {
            dimensions,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
