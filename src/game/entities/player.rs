use std::collections::HashSet;

use crate::game::types::{CellIndex, Direction};

/// The player token and its input guards.
#[derive(Debug, Clone)]
pub struct Player {
    pub index: CellIndex,
    pub score: u32,
    /// Set while a move is in flight; cleared by the delayed lock release.
    pub move_locked: bool,
    /// Directions currently held down. A held direction triggers at most one move.
    pub held: HashSet<Direction>,
}

impl Player {
    pub fn new(index: CellIndex) -> Self {
        Self {
            index,
            score: 0,
            move_locked: false,
            held: HashSet::new(),
        }
    }

    /// Try to take the movement lock for a fresh press of `direction`.
    /// Returns false when locked or when the direction is still held.
    pub fn try_press(&mut self, direction: Direction) -> bool {
        if self.move_locked || self.held.contains(&direction) {
            return false;
        }
        self.held.insert(direction);
        self.move_locked = true;
        true
    }

    pub fn release(&mut self, direction: Direction) {
        self.held.remove(&direction);
    }

    pub fn unlock(&mut self) {
        self.move_locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_direction_is_debounced_until_released() {
        let mut player = Player::new(10);
        assert!(player.try_press(Direction::Left));
        player.unlock();
        assert!(!player.try_press(Direction::Left));
        assert!(player.try_press(Direction::Up));
        player.unlock();
        player.release(Direction::Left);
        assert!(player.try_press(Direction::Left));
    }

    #[test]
    fn lock_blocks_other_directions() {
        let mut player = Player::new(10);
        assert!(player.try_press(Direction::Down));
        assert!(!player.try_press(Direction::Right));
    }
}
