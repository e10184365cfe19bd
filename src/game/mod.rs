//! Game core: maze layout, board state, entities and the session state machine.

pub mod board;
pub mod entities;
pub mod events;
pub mod grid;
pub mod state;
pub mod systems;
pub mod types;
