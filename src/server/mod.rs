// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the presentation bridge of the game:
//! - HTTP/WebSocket routing
//! - Game session orchestration (session actor, adversary timers, player input)
//! - Input-flood protection and error frames

pub mod anti_spam;
pub mod game_session;
pub mod router;
pub mod ws_actor_utils;
pub mod ws_error;

#[cfg(test)]
mod tests;
