//! Turn bookkeeping for one human against the computer.
//!
//! The computer's move is applied in two phases. [`GameSession::plan_computer_move`]
//! runs the search and returns a [`PendingMove`] stamped with the session
//! generation; [`GameSession::commit`] applies it later. Every
//! [`GameSession::restart`] advances the generation, so a move planned for
//! an abandoned game can never land on the new board.

use crate::config::GameConfig;
use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::{
    Board, BoardError, Minimax, NoMoveAvailable, Outcome, Player, Position, evaluate,
};

/// Error applying a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The game already has a result.
    #[display("Game is already over: {}", _0)]
    GameOver(#[error(not(source))] Outcome),

    /// The player tried to move out of turn.
    #[display("It's not the {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// The position is off the board.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] Position),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The move was planned before a restart.
    #[display("Move planned for game {} but game {} is in play", planned, current)]
    Stale {
        /// Generation the move was planned in.
        planned: u64,
        /// Generation of the current game.
        current: u64,
    },

    /// The search task panicked or was cancelled.
    #[display("Computer move search failed")]
    SearchFailed,

    /// The computer had no cell to play.
    #[display("{}", _0)]
    NoMove(NoMoveAvailable),

    /// The configured board could not be built.
    #[display("{}", _0)]
    Board(BoardError),
}

impl From<NoMoveAvailable> for SessionError {
    fn from(err: NoMoveAvailable) -> Self {
        SessionError::NoMove(err)
    }
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

/// A computer move computed but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct PendingMove {
    /// Where the computer will play.
    position: Position,
    /// Minimax score of the move for the computer.
    score: i32,
    /// Session generation the move belongs to.
    generation: u64,
}

/// State of one game plus the restart generation.
#[derive(Debug, Clone)]
pub struct GameSession {
    empty: Board,
    board: Board,
    opener: Player,
    current_player: Player,
    searcher: Minimax,
    history: Vec<Position>,
    generation: u64,
}

impl GameSession {
    /// Creates a session with an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Board`] if the configured dimensions are zero.
    #[instrument(skip(config), fields(dimensions = config.dimensions()))]
    pub fn new(config: &GameConfig) -> Result<Self, SessionError> {
        let empty = Board::new(*config.dimensions())?;
        let opener = if *config.computer_first() {
            Player::Computer
        } else {
            Player::Human
        };
        info!(%opener, "Creating game session");
        Ok(Self {
            board: empty.clone(),
            empty,
            opener,
            current_player: opener,
            searcher: config.searcher(),
            history: Vec::new(),
            generation: 0,
        })
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Positions played this game, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Restart counter; starts at zero.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Plays the human's mark at `position`.
    ///
    /// # Errors
    ///
    /// Fails when the game is over, it is the computer's turn, or the
    /// position is off the board or occupied.
    #[instrument(skip(self), fields(%position, generation = self.generation))]
    pub fn play_human(&mut self, position: Position) -> Result<Outcome, SessionError> {
        self.place(Player::Human, position)
    }

    /// Searches for the computer's move without applying it.
    ///
    /// # Errors
    ///
    /// Fails when the game is over, it is the human's turn, or the board
    /// has no empty cell.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn plan_computer_move(&self) -> Result<PendingMove, SessionError> {
        self.check_turn(Player::Computer)?;
        let report = self.searcher.search(&self.board)?;
        debug!(position = %report.position, score = report.score, nodes = report.nodes, "Planned computer move");
        Ok(PendingMove::new(report.position, report.score, self.generation))
    }

    /// Applies a planned computer move.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Stale`] if the session restarted since the
    /// move was planned, otherwise the same errors as a human move.
    #[instrument(skip(self), fields(position = %pending.position, planned = pending.generation))]
    pub fn commit(&mut self, pending: PendingMove) -> Result<Outcome, SessionError> {
        if pending.generation != self.generation {
            return Err(SessionError::Stale {
                planned: pending.generation,
                current: self.generation,
            });
        }
        self.place(Player::Computer, pending.position)
    }

    /// Discards the current game and starts an empty board.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn restart(&mut self) {
        self.board = self.empty.clone();
        self.current_player = self.opener;
        self.history.clear();
        self.generation += 1;
        info!(generation = self.generation, "Game restarted");
    }

    fn check_turn(&self, player: Player) -> Result<(), SessionError> {
        let outcome = self.outcome();
        if outcome.is_over() {
            return Err(SessionError::GameOver(outcome));
        }
        if self.current_player != player {
            return Err(SessionError::NotYourTurn(player));
        }
        Ok(())
    }

    fn place(&mut self, player: Player, position: Position) -> Result<Outcome, SessionError> {
        self.check_turn(player)?;
        match self.board.try_get(position) {
            None => return Err(SessionError::OutOfBounds(position)),
            Some(mark) if !mark.is_empty() => return Err(SessionError::Occupied(position)),
            Some(_) => {}
        }

        self.board = self.board.with_move(position, player.mark());
        self.history.push(position);
        self.current_player = player.opponent();

        let outcome = self.outcome();
        debug!(%player, %position, %outcome, "Move applied");
        if outcome.is_over() {
            info!(%outcome, "Game over");
        }
        Ok(outcome)
    }
}
