//! Exhaustive minimax search for the computer's move.
//!
//! The search always plays for the computer's mark (`O`) and scores
//! positions from the computer's point of view: `+1` for a computer win,
//! `-1` for a human win, `0` for a draw. Every empty cell is tried in
//! row-major order on a copy of the board, so the search is a pure
//! function of its input.
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Position, find_best_move};
//!
//! let board: Board = "XX./.O./...".parse().unwrap();
//! assert_eq!(find_best_move(&board), Ok(Position::new(0, 2)));
//! ```
//!
//! The tree for a 3×3 board is small enough to search to the end. Larger
//! boards need [`Minimax::with_max_depth`] and [`Minimax::with_alpha_beta`].

use crate::rules::evaluate;
use crate::{Board, Mark, Outcome, Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bound for the search window, wider than any score.
const INF: i32 = i32::MAX;

/// Returned when the board has no empty cell left to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No move available: the board is full")]
pub struct NoMoveAvailable;

/// What the computer plays for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Objective {
    /// Play to win, or at least draw.
    #[default]
    Win,
    /// Play to let the human win.
    Concede,
}

/// Terminal scores from the computer's point of view.
///
/// Built per top-level search so no scoring state outlives a call.
#[derive(Debug, Clone, Copy)]
struct ScoreTable {
    human: i32,
    computer: i32,
    draw: i32,
}

impl ScoreTable {
    fn for_objective(objective: Objective) -> Self {
        match objective {
            Objective::Win => Self {
                human: -1,
                computer: 1,
                draw: 0,
            },
            Objective::Concede => Self {
                human: 1,
                computer: -1,
                draw: 0,
            },
        }
    }

    /// Score of a finished game, `None` while it is still open.
    fn terminal(&self, outcome: Outcome) -> Option<i32> {
        match outcome {
            Outcome::Won(Player::Human) => Some(self.human),
            Outcome::Won(Player::Computer) => Some(self.computer),
            Outcome::Draw => Some(self.draw),
            Outcome::NoWinnerYet => None,
        }
    }
}

/// Best move found by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Position the computer should play.
    pub position: Position,
    /// Minimax value of that position for the computer.
    pub score: i32,
    /// Boards evaluated below the root.
    pub nodes: u64,
}

/// Configurable minimax searcher.
///
/// The default searches the whole tree without pruning and plays to win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimax {
    max_depth: Option<usize>,
    alpha_beta: bool,
    objective: Objective,
}

impl Minimax {
    /// Creates a full-depth searcher without pruning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits lookahead to `max_depth` plies, counting the computer's
    /// candidate move. Positions still open at the limit score `0`.
    /// Limits of `0` and `1` both see only immediate results.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables alpha-beta pruning. The chosen position and its score are
    /// the same as without pruning; only the node count drops.
    pub fn with_alpha_beta(mut self, alpha_beta: bool) -> Self {
        self.alpha_beta = alpha_beta;
        self
    }

    /// Sets what the computer plays for.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Finds the computer's best move on `board`.
    ///
    /// Candidates are tried in row-major order and a later candidate only
    /// replaces the best one when it scores strictly higher.
    ///
    /// # Errors
    ///
    /// Returns [`NoMoveAvailable`] when the board is full.
    #[instrument(skip(self, board), fields(dimensions = board.dimensions(), objective = %self.objective))]
    pub fn search(&self, board: &Board) -> Result<SearchReport, NoMoveAvailable> {
        let computer = Player::Computer.mark();
        let mut tree = Tree {
            scores: ScoreTable::for_objective(self.objective),
            opener: opener_at_root(board),
            max_depth: self.max_depth,
            alpha_beta: self.alpha_beta,
            nodes: 0,
        };

        let mut best: Option<(Position, i32)> = None;
        for position in board.empty_positions() {
            let child = board.with_move(position, computer);
            let alpha = best.map_or(-INF, |(_, score)| score);
            let score = tree.value(&child, 1, alpha, INF);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        let (position, score) = best.ok_or(NoMoveAvailable)?;
        debug!(%position, score, nodes = tree.nodes, "Search complete");
        Ok(SearchReport {
            position,
            score,
            nodes: tree.nodes,
        })
    }
}

/// Finds the computer's optimal move with a full-depth search.
///
/// # Errors
///
/// Returns [`NoMoveAvailable`] when the board is full.
pub fn find_best_move(board: &Board) -> Result<Position, NoMoveAvailable> {
    Minimax::new().search(board).map(|report| report.position)
}

/// Mark that opened the game on a board where the computer is to move.
///
/// Equal counts mean the computer opened; otherwise the human did.
fn opener_at_root(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Player::Computer.mark()
    } else {
        Player::Human.mark()
    }
}

/// Per-call search state.
struct Tree {
    scores: ScoreTable,
    opener: Mark,
    max_depth: Option<usize>,
    alpha_beta: bool,
    nodes: u64,
}

impl Tree {
    /// Minimax value of `board`, `ply` moves below the root.
    fn value(&mut self, board: &Board, ply: usize, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if let Some(score) = self.scores.terminal(evaluate(board)) {
            return score;
        }
        if self.max_depth.is_some_and(|limit| ply >= limit) {
            return 0;
        }

        let mover = board.next_mark(self.opener);
        let maximizing = mover == Player::Computer.mark();
        let mut best = if maximizing { -INF } else { INF };

        for position in board.empty_positions() {
            let child = board.with_move(position, mover);
            let score = self.value(&child, ply + 1, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.alpha_beta && alpha >= beta {
                break;
            }
        }

        best
    }
}
