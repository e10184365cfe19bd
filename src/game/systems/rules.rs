use crate::game::state::GameState;
use crate::game::types::EndReason;

/// End the session if the adversary in `slot` stands on the player's cell.
pub fn check_adversary_collision(game_state: &mut GameState, slot: usize) -> bool {
    let caught = game_state
        .adversaries
        .get(slot)
        .is_some_and(|adversary| adversary.index == game_state.player.index);
    caught && game_state.end(Some(EndReason::AdversaryCaught))
}

/// End the session if any adversary shares the player's cell.
pub fn check_collisions(game_state: &mut GameState) -> bool {
    let player = game_state.player.index;
    let caught = game_state.board.cell_is_occupied_by_adversary(player)
        || game_state.adversaries.iter().any(|a| a.index == player);
    caught && game_state.end(Some(EndReason::AdversaryCaught))
}
