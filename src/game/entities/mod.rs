//! Game entities module.
//!
//! This module organizes player and adversary entity logic.

pub mod adversary;
pub mod player;

pub use adversary::*;
pub use player::*;
