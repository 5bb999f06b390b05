//! Unbeatable tic-tac-toe: board model, outcome evaluation and minimax search.
//!
//! The crate is pure game logic with no I/O. A front end keeps the
//! current [`Board`], asks [`evaluate`] whether the game is over and asks
//! [`find_best_move`] where the computer should play.
//!
//! ```
//! use unbeatable_tictactoe::{Board, Mark, Outcome, Position, evaluate, find_best_move};
//!
//! let board = Board::new(3)?.with_move(Position::new(0, 0), Mark::X);
//! assert_eq!(evaluate(&board), Outcome::NoWinnerYet);
//!
//! let reply = find_best_move(&board)?;
//! assert_eq!(reply, Position::new(1, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod position;
pub mod rules;
mod search;
mod types;

pub use board::{Board, BoardError, ParseBoardError};
pub use position::Position;
pub use rules::evaluate;
pub use search::{Minimax, NoMoveAvailable, Objective, SearchReport, find_best_move};
pub use types::{Mark, Outcome, Player};
