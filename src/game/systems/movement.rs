//! Player movement system.
//!
//! This module validates and applies player moves on the board.

use crate::game::state::GameState;
use crate::game::types::{Direction, EndReason, MoveOutcome};

/// Handle a fresh press of `direction`.
///
/// The press is ignored while the session is stopped, while a previous move still
/// holds the lock, or while the same direction is still held down. A successful
/// move keeps the lock; the caller releases it after the move delay.
pub fn attempt_move(game_state: &mut GameState, direction: Direction) -> MoveOutcome {
    if !game_state.is_running() || !game_state.player.try_press(direction) {
        return MoveOutcome::Ignored;
    }

    let current = game_state.player.index;
    let target = game_state
        .board
        .layout()
        .neighbor(current, direction)
        .filter(|&next| !game_state.board.cell_is_wall(next));

    let Some(target) = target else {
        game_state.player.unlock();
        return MoveOutcome::Blocked;
    };

    if game_state.board.cell_is_occupied_by_adversary(target) {
        game_state.end(Some(EndReason::PlayerCaught));
        return MoveOutcome::Caught;
    }

    game_state.board.clear_player(current);
    game_state.board.place_player(target);
    game_state.player.index = target;

    let item = game_state.board.consume_item(target);
    game_state.emit_cell(current);
    game_state.emit_cell(target);
    if let Some(kind) = item {
        game_state.player.score += kind.points();
        game_state.emit_score();
    }

    // An adversary may have reached the cell while the move was settling.
    if game_state.board.cell_is_occupied_by_adversary(target) {
        game_state.end(Some(EndReason::PlayerCaught));
        return MoveOutcome::Caught;
    }

    MoveOutcome::Moved {
        to: target,
        item,
        score: game_state.player.score,
    }
}
