use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Linear cell address: `row * width + col`.
pub type CellIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Pick one of the four directions uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// What lies on a cell, independently of who stands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellItem {
    Wall,
    Empty,
    Dot,
    SpecialDot,
}

/// Collectible consumed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Dot,
    SpecialDot,
}

impl ItemKind {
    pub fn points(self) -> u32 {
        match self {
            ItemKind::Dot => crate::config::game::DOT_SCORE,
            ItemKind::SpecialDot => crate::config::game::SPECIAL_DOT_SCORE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdversaryId(pub u8);

impl fmt::Display for AdversaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "adversary-{}", self.0)
    }
}

/// Full view of one cell as sent to the presentation layer.
///
/// Item content and occupancy are separate axes: a dot can sit under the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub item: CellItem,
    pub player: bool,
    pub adversary: Option<AdversaryId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The player walked into an adversary.
    PlayerCaught,
    /// An adversary reached the player's cell.
    AdversaryCaught,
}

/// Result of a player move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Preconditions failed (not running, locked, or direction still held).
    Ignored,
    /// Wall or grid edge in the way.
    Blocked,
    Moved {
        to: CellIndex,
        item: Option<ItemKind>,
        score: u32,
    },
    /// The move ended the session.
    Caught,
}

/// Lifecycle of an adversary agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    Idle,
    Wandering,
    Stopped,
}

/// Result of a single adversary tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The agent is not wandering; nothing happened.
    Inactive,
    Moved { from: CellIndex, to: CellIndex },
    Turned(Direction),
}
