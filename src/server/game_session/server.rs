//! Game session actor.
//!
//! Hosts one `GameState` and every timer that drives it: one interval per
//! adversary plus the short movement-lock release after each player move. All
//! of them run on this actor's context, so board mutations never overlap.

use actix::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use uuid::Uuid;

use crate::config::game::{ADVERSARY_TICK_MS, MOVE_LOCK_MS};
use crate::game::state::{GameSettings, GameState};
use crate::game::types::{Direction, MoveOutcome};
use crate::server::game_session::messages::{
    GetSnapshot, KeyDown, KeyUp, Restart, SessionNotification, Shutdown, Start,
};

pub struct GameSession {
    pub session_id: Uuid,
    state: GameState,
    presenter: Recipient<SessionNotification>,
    adversary_timers: Vec<SpawnHandle>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[GameSession] Session actor started: session_id={}", self.session_id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!(
            "[GameSession] Session actor stopped: session_id={} score={}",
            self.session_id,
            self.state.score()
        );
    }
}

impl GameSession {
    pub fn new(session_id: Uuid, presenter: Recipient<SessionNotification>) -> Self {
        let state = GameState::new(GameSettings::default(), StdRng::from_os_rng());
        Self::with_state(session_id, state, presenter)
    }

    pub fn with_state(
        session_id: Uuid,
        state: GameState,
        presenter: Recipient<SessionNotification>,
    ) -> Self {
        Self {
            session_id,
            state,
            presenter,
            adversary_timers: Vec::new(),
        }
    }

    /// Forward pending notifications; once the session has ended, drop its timers.
    fn flush_events(&mut self, ctx: &mut Context<Self>) {
        for event in self.state.drain_events() {
            self.presenter.do_send(SessionNotification(event));
        }
        if !self.state.is_running() {
            self.cancel_adversary_timers(ctx);
        }
    }

    fn schedule_adversaries(&mut self, ctx: &mut Context<Self>) {
        self.cancel_adversary_timers(ctx);
        let period = Duration::from_millis(ADVERSARY_TICK_MS);
        for slot in 0..self.state.adversaries.len() {
            let handle = ctx.run_interval(period, move |act, ctx| {
                act.state.tick_adversary(slot);
                act.flush_events(ctx);
            });
            self.adversary_timers.push(handle);
        }
        debug!(
            "[GameSession] Scheduled {} adversary timers: session_id={}",
            self.adversary_timers.len(),
            self.session_id
        );
    }

    fn cancel_adversary_timers(&mut self, ctx: &mut Context<Self>) {
        if self.adversary_timers.is_empty() {
            return;
        }
        for handle in self.adversary_timers.drain(..) {
            ctx.cancel_future(handle);
        }
        debug!("[GameSession] Adversary timers cancelled: session_id={}", self.session_id);
    }

    fn start(&mut self, ctx: &mut Context<Self>) {
        if self.state.start() {
            self.schedule_adversaries(ctx);
        } else {
            debug!("[GameSession] Start ignored, already running: session_id={}", self.session_id);
        }
        self.flush_events(ctx);
    }

    fn restart(&mut self, ctx: &mut Context<Self>) {
        self.cancel_adversary_timers(ctx);
        if self.state.restart() {
            self.schedule_adversaries(ctx);
        }
        self.flush_events(ctx);
    }

    fn key_down(&mut self, direction: Direction, ctx: &mut Context<Self>) {
        let outcome = self.state.attempt_move(direction);
        debug!(
            "[GameSession] Move {:?} -> {:?}: session_id={}",
            direction, outcome, self.session_id
        );
        if let MoveOutcome::Moved { .. } = outcome {
            let epoch = self.state.epoch();
            ctx.run_later(Duration::from_millis(MOVE_LOCK_MS), move |act, _ctx| {
                act.state.release_move_lock(epoch);
            });
        }
        self.flush_events(ctx);
    }
}

impl Handler<Start> for GameSession {
    type Result = ();

    fn handle(&mut self, _msg: Start, ctx: &mut Context<Self>) -> Self::Result {
        self.start(ctx);
    }
}

impl Handler<Restart> for GameSession {
    type Result = ();

    fn handle(&mut self, _msg: Restart, ctx: &mut Context<Self>) -> Self::Result {
        self.restart(ctx);
    }
}

impl Handler<KeyDown> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: KeyDown, ctx: &mut Context<Self>) -> Self::Result {
        self.key_down(msg.0, ctx);
    }
}

impl Handler<KeyUp> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: KeyUp, _ctx: &mut Context<Self>) -> Self::Result {
        self.state.release_direction(msg.0);
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.snapshot())
    }
}

impl Handler<Shutdown> for GameSession {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Context<Self>) -> Self::Result {
        self.state.end(None);
        self.cancel_adversary_timers(ctx);
        ctx.stop();
    }
}

