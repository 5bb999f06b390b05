//! Cell coordinates on an N×N board.

use serde::{Deserialize, Serialize};

/// A `(row, column)` coordinate identifying one cell.
///
/// A position is only meaningful relative to a board size: it is valid
/// for a board of `dimensions` when both components lie in `[0, dimensions)`.
/// Ordering is row-major, which is the iteration order used everywhere
/// in this crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub column: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns true if the position lies inside a board of `dimensions`.
    pub fn is_valid_for(self, dimensions: usize) -> bool {
        self.row < dimensions && self.column < dimensions
    }

    /// Converts to a row-major index on a board of `dimensions`.
    pub fn to_index(self, dimensions: usize) -> usize {
        self.row * dimensions + self.column
    }

    /// Creates a position from a row-major index, if it is in range.
    pub fn from_index(index: usize, dimensions: usize) -> Option<Self> {
        if dimensions == 0 || index >= dimensions * dimensions {
            return None;
        }
        Some(Self::new(index / dimensions, index % dimensions))
    }

    /// Returns true for the four corners of a board of `dimensions`.
    pub fn is_corner(self, dimensions: usize) -> bool {
        let last = dimensions.saturating_sub(1);
        (self.row == 0 || self.row == last) && (self.column == 0 || self.column == last)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversion() {
        assert_eq!(Position::new(0, 0).to_index(3), 0);
        assert_eq!(Position::new(1, 1).to_index(3), 4);
        assert_eq!(Position::new(2, 2).to_index(3), 8);
        assert_eq!(Position::from_index(5, 3), Some(Position::new(1, 2)));
        assert_eq!(Position::from_index(9, 3), None);
        assert_eq!(Position::from_index(0, 0), None);
    }

    #[test]
    fn test_validity() {
        assert!(Position::new(2, 2).is_valid_for(3));
        assert!(!Position::new(3, 0).is_valid_for(3));
        assert!(!Position::new(0, 3).is_valid_for(3));
    }

    #[test]
    fn test_row_major_ordering() {
        assert!(Position::new(0, 2) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }

    #[test]
    fn test_corners() {
        let corners: Vec<_> = (0..9)
            .filter_map(|i| Position::from_index(i, 3))
            .filter(|p| p.is_corner(3))
            .collect();
        assert_eq!(
            corners,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(2, 0),
                Position::new(2, 2)
            ]
        );
    }
}
