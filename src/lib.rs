//! Unbeatable - play tic-tac-toe against a computer that never loses.
//!
//! The game rules and the minimax search live in [`unbeatable_tictactoe`];
//! this crate wraps them in a session, a delayed-reply orchestrator and a
//! terminal front end.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Session**: turn order, move validation and restart generations
//! - **Orchestrator**: schedules the computer's reply after a thinking delay
//! - **Terminal**: line-based play on stdin/stdout
//!
//! # Example
//!
//! ```
//! use unbeatable::{GameConfig, GameSession};
//! use unbeatable_tictactoe::Position;
//!
//! let mut session = GameSession::new(&GameConfig::default()).unwrap();
//! session.play_human(Position::new(0, 0)).unwrap();
//! let reply = session.plan_computer_move().unwrap();
//! assert_eq!(*reply.position(), Position::new(1, 1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod hint;
mod orchestrator;
mod session;
pub mod terminal;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Session
pub use session::{GameSession, PendingMove, SessionError};
