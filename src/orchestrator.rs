//! Game orchestration between the human and the computer.
//!
//! The computer's reply is searched as soon as the human moves, then
//! committed after the configured thinking delay. Restarting aborts the
//! delayed commit; the session's generation check rejects it even if the
//! task already woke up.

use crate::session::{GameSession, PendingMove, SessionError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};
use unbeatable_tictactoe::{Board, Outcome, Player, Position};

/// Notifications for the front end about the game in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// New board after a move or restart.
    BoardChanged(Board),
    /// The computer's reply is chosen and waiting out the thinking delay.
    ComputerThinking,
    /// A mark landed on the board.
    MoveMade {
        /// Side that placed the mark.
        player: Player,
        /// Cell the mark went to.
        position: Position,
    },
    /// Someone completed a line or the board filled up.
    GameOver(Outcome),
    /// The board was cleared for a new game.
    Restarted,
}

/// Drives a [`GameSession`], scheduling the computer's delayed replies.
pub struct Orchestrator {
    session: Arc<Mutex<GameSession>>,
    thinking_delay: Duration,
    pending: Option<JoinHandle<()>>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        thinking_delay: Duration,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            thinking_delay,
            pending: None,
            event_tx,
        }
    }

    /// Shared handle to the session.
    pub fn session(&self) -> Arc<Mutex<GameSession>> {
        Arc::clone(&self.session)
    }

    /// Returns true while a computer move waits to be committed.
    pub fn is_computer_thinking(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Announces the board and, if the computer opens, schedules its move.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), SessionError> {
        info!("Starting game orchestration");
        let (board, to_move) = {
            let session = self.session.lock().await;
            (session.board().clone(), session.current_player())
        };
        emit(&self.event_tx, GameEvent::BoardChanged(board));
        if to_move == Player::Computer {
            self.schedule_computer_move().await?;
        }
        Ok(())
    }

    /// Plays the human's move and schedules the computer's reply.
    ///
    /// # Errors
    ///
    /// Returns the session's error if the move is rejected; nothing is
    /// scheduled in that case.
    #[instrument(skip(self), fields(%position))]
    pub async fn human_move(&mut self, position: Position) -> Result<Outcome, SessionError> {
        let (outcome, board) = {
            let mut session = self.session.lock().await;
            let outcome = session.play_human(position)?;
            (outcome, session.board().clone())
        };

        emit(
            &self.event_tx,
            GameEvent::MoveMade {
                player: Player::Human,
                position,
            },
        );
        emit(&self.event_tx, GameEvent::BoardChanged(board));

        if outcome.is_over() {
            emit(&self.event_tx, GameEvent::GameOver(outcome));
        } else {
            self.schedule_computer_move().await?;
        }
        Ok(outcome)
    }

    /// Abandons the current game, including any computer move in flight.
    #[instrument(skip(self))]
    pub async fn restart(&mut self) -> Result<(), SessionError> {
        if let Some(handle) = self.pending.take() {
            debug!("Aborting pending computer move");
            handle.abort();
        }

        let (board, to_move) = {
            let mut session = self.session.lock().await;
            session.restart();
            (session.board().clone(), session.current_player())
        };

        emit(&self.event_tx, GameEvent::Restarted);
        emit(&self.event_tx, GameEvent::BoardChanged(board));
        if to_move == Player::Computer {
            self.schedule_computer_move().await?;
        }
        Ok(())
    }

    /// Waits for the pending computer move, if any, to be committed.
    pub async fn wait_for_computer(&mut self) {
        if let Some(handle) = self.pending.take()
            && let Err(e) = handle.await
        {
            debug!(error = %e, "Computer move task ended without committing");
        }
    }

    /// Plans the computer's move now and commits it after the delay.
    ///
    /// The search runs on a blocking thread against a snapshot of the
    /// session, so the lock is not held while it runs.
    async fn schedule_computer_move(&mut self) -> Result<(), SessionError> {
        let snapshot = self.session.lock().await.clone();
        let pending = match tokio::task::spawn_blocking(move || snapshot.plan_computer_move()).await {
            Ok(planned) => planned?,
            Err(e) => {
                warn!(error = %e, "Search task failed");
                return Err(SessionError::SearchFailed);
            }
        };
        emit(&self.event_tx, GameEvent::ComputerThinking);

        let session = Arc::clone(&self.session);
        let event_tx = self.event_tx.clone();
        let delay = self.thinking_delay;
        debug!(position = %pending.position(), ?delay, "Scheduling computer move");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            commit_computer_move(&session, &event_tx, pending).await;
        }));
        Ok(())
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

async fn commit_computer_move(
    session: &Mutex<GameSession>,
    event_tx: &mpsc::UnboundedSender<GameEvent>,
    pending: PendingMove,
) {
    let mut session = session.lock().await;
    match session.commit(pending) {
        Ok(outcome) => {
            emit(
                event_tx,
                GameEvent::MoveMade {
                    player: Player::Computer,
                    position: *pending.position(),
                },
            );
            emit(event_tx, GameEvent::BoardChanged(session.board().clone()));
            if outcome.is_over() {
                emit(event_tx, GameEvent::GameOver(outcome));
            }
        }
        Err(SessionError::Stale { planned, current }) => {
            debug!(planned, current, "Discarding computer move from an abandoned game");
        }
        Err(e) => {
            warn!(error = %e, "Computer move rejected");
        }
    }
}

fn emit(event_tx: &mpsc::UnboundedSender<GameEvent>, event: GameEvent) {
    if event_tx.send(event).is_err() {
        debug!("Event receiver dropped");
    }
}
