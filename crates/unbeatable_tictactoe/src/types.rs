//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark occupying a cell.
///
/// `X` belongs to the human and `O` to the computer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// No mark yet.
    #[default]
    #[strum(serialize = ".")]
    Empty,
    /// The human's mark.
    X,
    /// The computer's mark.
    O,
}

impl Mark {
    /// Returns true for `Mark::Empty`.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Maps a mark to the player owning it. `Empty` maps to no player.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::Human),
            Mark::O => Some(Player::Computer),
            Mark::Empty => None,
        }
    }
}

/// Participant in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The automated opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Returns the mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::Human => Mark::X,
            Player::Computer => Mark::O,
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still open.
    NoWinnerYet,
    /// The board is full and nobody completed a line.
    Draw,
    /// A player completed a line.
    Won(Player),
}

impl Outcome {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::NoWinnerYet)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw | Outcome::NoWinnerYet => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoWinnerYet => write!(f, "In progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Won(player) => write!(f, "{} wins", player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mark_player_mapping() {
        assert_eq!(Mark::X.player(), Some(Player::Human));
        assert_eq!(Mark::O.player(), Some(Player::Computer));
        assert_eq!(Mark::Empty.player(), None);
    }

    #[test]
    fn test_player_mark_is_inverse_of_mapping() {
        for player in Player::iter() {
            assert_eq!(player.mark().player(), Some(player));
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(!Outcome::NoWinnerYet.is_over());
        assert!(Outcome::Draw.is_over());
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Won(Player::Computer).winner(), Some(Player::Computer));
        assert_eq!(Outcome::Won(Player::Human).to_string(), "Human wins");
    }
}
