//! Game configuration constants.
//!
//! This module defines the gameplay parameters: grid dimensions, collectible counts,
//! adversary pacing and the fixed adversary start cells.
use crate::game::types::CellIndex;

/// Number of columns in the game grid.
pub const GRID_WIDTH: usize = 28;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: usize = 25;

/// Number of dot cells upgraded to special dots on every start.
pub const SPECIAL_DOT_COUNT: usize = 15;

/// Interval between two steps of the same adversary (in milliseconds).
pub const ADVERSARY_TICK_MS: u64 = 500;

/// Delay before the player may move again after a successful move (in milliseconds).
pub const MOVE_LOCK_MS: u64 = 100;

/// Points awarded for eating a regular dot.
pub const DOT_SCORE: u32 = 1;

/// Points awarded for eating a special dot.
pub const SPECIAL_DOT_SCORE: u32 = 2;

/// Start cells of the eight adversaries, as linear indices on the default grid.
pub const ADVERSARY_START_POSITIONS: [CellIndex; 8] = [
    GRID_WIDTH * 5 + 5,
    GRID_WIDTH * 5 + 20,
    GRID_WIDTH * 10 + 10,
    GRID_WIDTH * 10 + 17,
    GRID_WIDTH * 15 + 7,
    GRID_WIDTH * 15 + 21,
    GRID_WIDTH * 18 + 8,
    GRID_WIDTH * 18 + 19,
];
