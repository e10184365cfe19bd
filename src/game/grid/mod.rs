//! Maze layout module.
//!
//! This module generates the static wall layout and answers grid geometry queries.

pub mod layout;

pub use layout::*;
