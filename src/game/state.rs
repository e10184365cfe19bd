use log::{debug, info, warn};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::game::{
    ADVERSARY_START_POSITIONS, GRID_HEIGHT, GRID_WIDTH, SPECIAL_DOT_COUNT,
};
use crate::game::board::Board;
use crate::game::entities::{Adversary, Player};
use crate::game::events::GameEvent;
use crate::game::grid::generate_layout;
use crate::game::systems::{attempt_move, check_adversary_collision, check_collisions, render_board};
use crate::game::types::{
    AdversaryId, CellIndex, Direction, EndReason, MoveOutcome, TickOutcome,
};

/// Parameters of a session. The server always plays with `GameSettings::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub width: usize,
    pub height: usize,
    pub special_dots: usize,
    pub adversary_starts: Vec<CellIndex>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            special_dots: SPECIAL_DOT_COUNT,
            adversary_starts: ADVERSARY_START_POSITIONS.to_vec(),
        }
    }
}

/// Read-only summary of a session, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub running: bool,
    pub epoch: u64,
    pub score: u32,
    pub player_index: CellIndex,
    pub adversaries: Vec<(AdversaryId, CellIndex)>,
}

/// One play-through: board, player, adversaries and the pending notifications.
///
/// All mutations go through `&mut self`, so whoever owns the value is the single
/// writer. Notifications accumulate until `drain_events` is called.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub player: Player,
    pub adversaries: Vec<Adversary>,
    settings: GameSettings,
    rng: StdRng,
    running: bool,
    epoch: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(settings: GameSettings, rng: StdRng) -> Self {
        let board = Board::initialize(generate_layout(settings.width, settings.height));
        let player = Player::new(board.layout().center());
        GameState {
            board,
            player,
            adversaries: Vec::new(),
            settings,
            rng,
            running: false,
            epoch: 0,
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Incremented on every start; timers scheduled for an older epoch are stale.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Build a fresh board, place everyone and begin the session.
    /// Returns false (and does nothing) if the session is already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }

        let layout = generate_layout(self.settings.width, self.settings.height);
        let mut board = Board::initialize(layout);
        board.select_special_dots(self.settings.special_dots, &mut self.rng);

        let center = board.layout().center();
        board.place_player(center);
        self.player = Player::new(center);

        let mut adversaries = Vec::with_capacity(self.settings.adversary_starts.len());
        for (slot, &index) in self.settings.adversary_starts.iter().enumerate() {
            if !board.layout().contains(index) {
                warn!("[GameState] Adversary start {} is outside the grid; skipped", index);
                continue;
            }
            let id = AdversaryId(slot as u8);
            board.place_adversary(index, id);
            let mut adversary = Adversary::new(id, index, &mut self.rng);
            adversary.start();
            adversaries.push(adversary);
        }

        self.board = board;
        self.adversaries = adversaries;
        self.running = true;
        self.epoch += 1;

        info!(
            "[GameState] Session started: epoch={} player={} adversaries={}",
            self.epoch,
            center,
            self.adversaries.len()
        );
        debug!("[GameState] Board:\n{}", render_board(&self.board));

        self.events.push(GameEvent::BoardReady {
            width: self.board.layout().width(),
            height: self.board.layout().height(),
            cells: self.board.snapshot(),
        });
        self.emit_score();
        true
    }

    /// End the running session silently, then start a fresh one.
    pub fn restart(&mut self) -> bool {
        self.end(None);
        self.start()
    }

    /// Stop the session. With a reason, a `SessionEnded` notification is emitted.
    /// Returns false if the session was not running, so ending twice is harmless.
    pub fn end(&mut self, reason: Option<EndReason>) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        for adversary in &mut self.adversaries {
            adversary.stop();
        }
        self.player.unlock();
        self.player.held.clear();

        info!(
            "[GameState] Session ended: epoch={} score={} reason={:?}",
            self.epoch, self.player.score, reason
        );
        if let Some(reason) = reason {
            self.events.push(GameEvent::SessionEnded {
                final_score: self.player.score,
                reason,
            });
        }
        true
    }

    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        attempt_move(self, direction)
    }

    /// Key released: the direction may trigger a move again.
    pub fn release_direction(&mut self, direction: Direction) {
        self.player.release(direction);
    }

    /// Lift the movement lock taken by a move made during `epoch`.
    pub fn release_move_lock(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !self.running {
            return false;
        }
        self.player.unlock();
        true
    }

    /// Advance the adversary in `slot` by one step, then check it against the player.
    pub fn tick_adversary(&mut self, slot: usize) -> TickOutcome {
        if !self.running {
            return TickOutcome::Inactive;
        }
        let Some(adversary) = self.adversaries.get_mut(slot) else {
            return TickOutcome::Inactive;
        };

        let outcome = adversary.tick(&mut self.board, &mut self.rng);
        if let TickOutcome::Moved { from, to } = outcome {
            self.emit_cell(from);
            self.emit_cell(to);
        }
        if outcome != TickOutcome::Inactive {
            check_adversary_collision(self, slot);
        }
        outcome
    }

    pub fn check_collisions(&mut self) -> bool {
        check_collisions(self)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            running: self.running,
            epoch: self.epoch,
            score: self.player.score,
            player_index: self.player.index,
            adversaries: self.adversaries.iter().map(|a| (a.id, a.index)).collect(),
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit_cell(&mut self, index: CellIndex) {
        self.events.push(GameEvent::CellChanged {
            index,
            cell: self.board.cell(index),
        });
    }

    pub(crate) fn emit_score(&mut self) {
        self.events.push(GameEvent::ScoreChanged {
            score: self.player.score,
        });
    }
}
