//! Notifications emitted by a game session for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::game::types::{CellIndex, CellSnapshot, EndReason};

/// Serialized as `{"action": "<Variant>", "data": {..}}`, like every server frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum GameEvent {
    /// Full board, sent once per start.
    BoardReady {
        width: usize,
        height: usize,
        cells: Vec<CellSnapshot>,
    },
    CellChanged {
        index: CellIndex,
        cell: CellSnapshot,
    },
    ScoreChanged {
        score: u32,
    },
    SessionEnded {
        final_score: u32,
        reason: EndReason,
    },
}
