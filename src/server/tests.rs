use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::game::events::GameEvent;
use crate::game::state::{GameSettings, GameState};
use crate::game::types::Direction;
use crate::server::game_session::messages::{
    ClientWsMessage, GetSnapshot, KeyDown, KeyUp, Restart, SessionNotification, Shutdown, Start,
};
use crate::server::game_session::server::GameSession;

/// Stands in for the browser: records every notification it receives.
struct Collector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl Actor for Collector {
    type Context = Context<Self>;
}

impl Handler<SessionNotification> for Collector {
    type Result = ();

    fn handle(&mut self, msg: SessionNotification, _ctx: &mut Context<Self>) {
        self.events.lock().expect("collector lock").push(msg.0);
    }
}

fn spawn_session(seed: u64) -> (Addr<GameSession>, Arc<Mutex<Vec<GameEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = Collector {
        events: events.clone(),
    }
    .start();
    let state = GameState::new(GameSettings::default(), StdRng::seed_from_u64(seed));
    let session = GameSession::with_state(Uuid::new_v4(), state, collector.recipient()).start();
    (session, events)
}

fn count_events(events: &Arc<Mutex<Vec<GameEvent>>>) -> usize {
    events.lock().expect("collector lock").len()
}

#[actix::test]
async fn start_sends_board_then_score() {
    let (session, events) = spawn_session(1);
    session.send(Start).await.expect("session alive");
    tokio::time::sleep(Duration::from_millis(20)).await;

    let events = events.lock().expect("collector lock").clone();
    assert!(matches!(events.first(), Some(GameEvent::BoardReady { .. })));
    assert_eq!(events.get(1), Some(&GameEvent::ScoreChanged { score: 0 }));

    let snapshot = session.send(GetSnapshot).await.expect("session alive");
    assert!(snapshot.running);
    assert_eq!(snapshot.epoch, 1);
}

#[actix::test]
async fn move_lock_is_released_after_the_delay() {
    let (session, _events) = spawn_session(2);
    session.send(Start).await.expect("session alive");
    let center = session.send(GetSnapshot).await.expect("session alive").player_index;

    session.send(KeyDown(Direction::Up)).await.expect("session alive");
    session.send(KeyUp(Direction::Up)).await.expect("session alive");
    // Still locked: ignored.
    session.send(KeyDown(Direction::Up)).await.expect("session alive");
    session.send(KeyUp(Direction::Up)).await.expect("session alive");
    let snapshot = session.send(GetSnapshot).await.expect("session alive");
    assert_eq!(snapshot.player_index, center - 28);
    assert!(snapshot.score > 0);

    tokio::time::sleep(Duration::from_millis(150)).await;
    session.send(KeyDown(Direction::Up)).await.expect("session alive");
    let snapshot = session.send(GetSnapshot).await.expect("session alive");
    assert_eq!(snapshot.player_index, center - 56);
}

#[actix::test]
async fn adversaries_walk_on_their_own_timers() {
    let (session, events) = spawn_session(3);
    session.send(Start).await.expect("session alive");
    let before = session.send(GetSnapshot).await.expect("session alive").adversaries;

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    let after = session.send(GetSnapshot).await.expect("session alive").adversaries;
    assert_ne!(before, after);

    let moved_cells = events
        .lock()
        .expect("collector lock")
        .iter()
        .filter(|event| matches!(event, GameEvent::CellChanged { cell, .. } if cell.adversary.is_some()))
        .count();
    assert!(moved_cells > 0);
}

#[actix::test]
async fn restart_resets_the_session() {
    let (session, _events) = spawn_session(4);
    session.send(Start).await.expect("session alive");
    session.send(KeyDown(Direction::Up)).await.expect("session alive");
    tokio::time::sleep(Duration::from_millis(600)).await;

    session.send(Restart).await.expect("session alive");
    let snapshot = session.send(GetSnapshot).await.expect("session alive");
    assert!(snapshot.running);
    assert_eq!(snapshot.epoch, 2);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.player_index, 12 * 28 + 14);
    let starts: Vec<usize> = snapshot.adversaries.iter().map(|(_, idx)| *idx).collect();
    assert_eq!(starts, crate::config::game::ADVERSARY_START_POSITIONS.to_vec());
}

#[actix::test]
async fn shutdown_cancels_every_timer() {
    let (session, events) = spawn_session(5);
    session.send(Start).await.expect("session alive");
    tokio::time::sleep(Duration::from_millis(550)).await;

    session.send(Shutdown).await.expect("session alive");
    let seen = count_events(&events);
    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert_eq!(count_events(&events), seen);
    assert!(session.send(GetSnapshot).await.is_err());
}

#[test]
fn client_frames_use_the_action_envelope() {
    let start: ClientWsMessage = serde_json::from_str(r#"{"action":"Start"}"#).expect("valid frame");
    assert_eq!(start, ClientWsMessage::Start);
    let key: ClientWsMessage =
        serde_json::from_str(r#"{"action":"KeyDown","data":"Left"}"#).expect("valid frame");
    assert_eq!(key, ClientWsMessage::KeyDown(Direction::Left));
    assert!(serde_json::from_str::<ClientWsMessage>(r#"{"action":"Jump"}"#).is_err());
}

#[test]
fn notifications_serialize_with_the_action_envelope() {
    let frame = serde_json::to_value(GameEvent::ScoreChanged { score: 7 }).expect("serializable");
    assert_eq!(frame["action"], "ScoreChanged");
    assert_eq!(frame["data"]["score"], 7);
}
