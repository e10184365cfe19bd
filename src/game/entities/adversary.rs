//! Adversary agent: a random walker with its own step schedule.
//!
//! The agent keeps walking in its current direction until something blocks it,
//! then picks a new direction at random and waits for its next tick.

use rand::Rng;

use crate::game::board::Board;
use crate::game::types::{AdversaryId, AgentState, CellIndex, Direction, TickOutcome};

#[derive(Debug, Clone)]
pub struct Adversary {
    pub id: AdversaryId,
    pub index: CellIndex,
    pub direction: Direction,
    pub state: AgentState,
}

impl Adversary {
    /// New idle agent heading in a random direction.
    pub fn new<R: Rng + ?Sized>(id: AdversaryId, index: CellIndex, rng: &mut R) -> Self {
        Self {
            id,
            index,
            direction: Direction::random(rng),
            state: AgentState::Idle,
        }
    }

    pub fn start(&mut self) {
        if self.state == AgentState::Idle {
            self.state = AgentState::Wandering;
        }
    }

    pub fn stop(&mut self) {
        self.state = AgentState::Stopped;
    }

    /// Advance one step. Occupancy is checked against the board as it is now.
    pub fn tick<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> TickOutcome {
        if self.state != AgentState::Wandering {
            return TickOutcome::Inactive;
        }

        let candidate = board
            .layout()
            .neighbor(self.index, self.direction)
            .filter(|&next| {
                !board.cell_is_wall(next)
                    && !board.cell_is_occupied_by_adversary(next)
                    && !board.cell_is_occupied_by_player(next)
            });

        match candidate {
            Some(next) => {
                let from = self.index;
                board.clear_adversary(from, self.id);
                board.place_adversary(next, self.id);
                self.index = next;
                TickOutcome::Moved { from, to: next }
            }
            None => {
                self.direction = Direction::random(rng);
                TickOutcome::Turned(self.direction)
            }
        }
    }
}
