//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::{Minimax, Objective};

/// Largest board side the computer can search without a depth limit.
pub const FULL_SEARCH_MAX_DIMENSIONS: usize = 3;

/// Settings for a game against the computer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    dimensions: usize,

    /// Pause before the computer's move is shown, in milliseconds.
    thinking_delay_ms: u64,

    /// Lookahead limit in plies; unlimited when absent.
    max_depth: Option<usize>,

    /// Prune the search tree with alpha-beta.
    alpha_beta: bool,

    /// What the computer plays for.
    objective: Objective,

    /// Let the computer make the opening move.
    computer_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimensions: 3,
            thinking_delay_ms: 2000,
            max_depth: None,
            alpha_beta: false,
            objective: Objective::Win,
            computer_first: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Checks values a file could get wrong.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::new("dimensions must be at least 1".to_string()));
        }
        if self.dimensions > FULL_SEARCH_MAX_DIMENSIONS && self.max_depth.is_none() {
            return Err(ConfigError::new(format!(
                "dimensions {} need max_depth; only boards up to {}x{} are searched to the end",
                self.dimensions, FULL_SEARCH_MAX_DIMENSIONS, FULL_SEARCH_MAX_DIMENSIONS
            )));
        }
        Ok(())
    }

    /// Thinking delay as a duration.
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// Searcher configured from these settings.
    pub fn searcher(&self) -> Minimax {
        Minimax::new()
            .with_max_depth(self.max_depth)
            .with_alpha_beta(self.alpha_beta)
            .with_objective(self.objective)
    }

    /// Sets the board side length.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Sets the thinking delay in milliseconds.
    pub fn with_thinking_delay_ms(mut self, thinking_delay_ms: u64) -> Self {
        self.thinking_delay_ms = thinking_delay_ms;
        self
    }

    /// Sets the lookahead limit.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_alpha_beta(mut self, alpha_beta: bool) -> Self {
        self.alpha_beta = alpha_beta;
        self
    }

    /// Sets what the computer plays for.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets who opens.
    pub fn with_computer_first(mut self, computer_first: bool) -> Self {
        self.computer_first = computer_first;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
