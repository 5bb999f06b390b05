//! Tests for the delayed computer reply.

use std::time::Duration;
use tokio::sync::mpsc;
use unbeatable::{GameConfig, GameEvent, GameSession, Orchestrator};
use unbeatable_tictactoe::{Mark, Outcome, Player, Position};

const DELAY: Duration = Duration::from_millis(2000);

fn orchestrator(config: &GameConfig) -> (Orchestrator, mpsc::UnboundedReceiver<GameEvent>) {
    let session = GameSession::new(config).unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    (Orchestrator::new(session, config.thinking_delay(), tx), rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn computer_moves(events: &[GameEvent]) -> Vec<Position> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MoveMade {
                player: Player::Computer,
                position,
            } => Some(*position),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_computer_reply_waits_for_delay() {
    let (mut orch, mut rx) = orchestrator(&GameConfig::default());
    orch.start().await.unwrap();
    orch.human_move(Position::new(0, 0)).await.unwrap();

    let events = drain(&mut rx);
    assert!(events.contains(&GameEvent::ComputerThinking));
    assert!(computer_moves(&events).is_empty());
    assert!(orch.is_computer_thinking());

    tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
    assert!(computer_moves(&drain(&mut rx)).is_empty());
    assert_eq!(orch.session().lock().await.board().count(Mark::O), 0);

    orch.wait_for_computer().await;
    let events = drain(&mut rx);
    assert_eq!(computer_moves(&events), vec![Position::new(1, 1)]);
    assert!(!orch.is_computer_thinking());
    assert_eq!(orch.session().lock().await.current_player(), Player::Human);
}

#[tokio::test(start_paused = true)]
async fn test_restart_discards_pending_reply() {
    let (mut orch, mut rx) = orchestrator(&GameConfig::default());
    orch.start().await.unwrap();
    orch.human_move(Position::new(0, 0)).await.unwrap();
    orch.restart().await.unwrap();

    tokio::time::sleep(DELAY * 2).await;
    let events = drain(&mut rx);
    assert!(events.contains(&GameEvent::Restarted));
    assert!(computer_moves(&events).is_empty());

    let session = orch.session();
    let session = session.lock().await;
    assert_eq!(session.generation(), 1);
    assert!(session.history().is_empty());
    assert_eq!(session.current_player(), Player::Human);
}

#[tokio::test(start_paused = true)]
async fn test_human_cannot_move_while_computer_thinks() {
    let (mut orch, _rx) = orchestrator(&GameConfig::default());
    orch.start().await.unwrap();
    orch.human_move(Position::new(0, 0)).await.unwrap();
    assert!(orch.human_move(Position::new(2, 2)).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_computer_opens_after_delay() {
    let config = GameConfig::default().with_computer_first(true);
    let (mut orch, mut rx) = orchestrator(&config);
    orch.start().await.unwrap();
    assert!(matches!(drain(&mut rx).first(), Some(GameEvent::BoardChanged(_))));

    orch.wait_for_computer().await;
    assert_eq!(computer_moves(&drain(&mut rx)).len(), 1);
    let session = orch.session();
    let session = session.lock().await;
    assert_eq!(session.board().count(Mark::O), 1);
    assert_eq!(session.current_player(), Player::Human);
}

#[tokio::test(start_paused = true)]
async fn test_game_over_event_ends_game() {
    let (mut orch, mut rx) = orchestrator(&GameConfig::default().with_thinking_delay_ms(0));
    orch.start().await.unwrap();

    loop {
        let next = {
            let session = orch.session();
            let session = session.lock().await;
            if session.outcome().is_over() {
                break;
            }
            session.board().empty_positions().next()
        };
        let Some(position) = next else { break };
        if orch.human_move(position).await.unwrap().is_over() {
            break;
        }
        orch.wait_for_computer().await;
    }

    let events = drain(&mut rx);
    assert!(events.contains(&GameEvent::GameOver(Outcome::Won(Player::Computer))));
}
