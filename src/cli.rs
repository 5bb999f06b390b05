//! Command-line interface for unbeatable.

use crate::config::{ConfigError, GameConfig};
use clap::{Parser, Subcommand};
use tracing::instrument;
use unbeatable_tictactoe::Objective;

/// Unbeatable - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Play tic-tac-toe against an optimal minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with game settings
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Board side length
    #[arg(long, global = true)]
    pub dimensions: Option<usize>,

    /// Pause before the computer's move appears, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Limit the computer's lookahead to this many plies
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Prune the search with alpha-beta
    #[arg(long, global = true)]
    pub alpha_beta: bool,

    /// Let the computer open the game
    #[arg(long, global = true)]
    pub computer_first: bool,

    /// Make the computer play to lose
    #[arg(long, global = true)]
    pub concede: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Print the computer's best move for a board
    Hint {
        /// Board rows separated by '/', cells X, O or '.' (e.g. "XX./.O./...")
        board: String,
    },
}

impl Cli {
    /// Builds the game configuration: file first, then flags on top.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(dimensions) = self.dimensions {
            config = config.with_dimensions(dimensions);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_thinking_delay_ms(delay_ms);
        }
        if self.max_depth.is_some() {
            config = config.with_max_depth(self.max_depth);
        }
        if self.alpha_beta {
            config = config.with_alpha_beta(true);
        }
        if self.computer_first {
            config = config.with_computer_first(true);
        }
        if self.concede {
            config = config.with_objective(Objective::Concede);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "unbeatable",
            "--delay-ms",
            "10",
            "--max-depth",
            "4",
            "--concede",
            "play",
        ]);
        let config = cli.game_config().unwrap();
        assert_eq!(*config.thinking_delay_ms(), 10);
        assert_eq!(*config.max_depth(), Some(4));
        assert_eq!(*config.objective(), Objective::Concede);
        assert!(!config.alpha_beta());
    }

    #[test]
    fn test_hint_takes_board() {
        let cli = Cli::parse_from(["unbeatable", "hint", "XX./.O./..."]);
        assert!(matches!(cli.command, Command::Hint { ref board } if board == "XX./.O./..."));
    }

    #[test]
    fn test_large_board_without_depth_limit_rejected() {
        let cli = Cli::parse_from(["unbeatable", "--dimensions", "4", "play"]);
        assert!(cli.game_config().is_err());

        let cli = Cli::parse_from(["unbeatable", "--dimensions", "4", "--max-depth", "2", "play"]);
        assert_eq!(*cli.game_config().unwrap().dimensions(), 4);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let cli = Cli::parse_from(["unbeatable", "--dimensions", "0", "play"]);
        assert!(cli.game_config().is_err());
    }
}
