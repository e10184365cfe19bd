//! Board state: per-cell items plus the player/adversary occupancy overlay.

use log::warn;
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::grid::Layout;
use crate::game::types::{AdversaryId, CellIndex, CellItem, CellSnapshot, ItemKind};

#[derive(Debug, Clone)]
pub struct Board {
    layout: Layout,
    items: Vec<CellItem>,
    player: Vec<bool>,
    adversaries: Vec<Option<AdversaryId>>,
}

impl Board {
    /// Fresh board: every wall cell is `Wall`, every open cell holds a `Dot`.
    pub fn initialize(layout: Layout) -> Self {
        let items = (0..layout.len())
            .map(|idx| {
                if layout.is_wall(idx) {
                    CellItem::Wall
                } else {
                    CellItem::Dot
                }
            })
            .collect();
        let cells = layout.len();
        Self {
            layout,
            items,
            player: vec![false; cells],
            adversaries: vec![None; cells],
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Upgrade `count` distinct dot cells to special dots, chosen uniformly at random.
    ///
    /// The count is capped at the number of dot cells available. Returns how many
    /// cells were actually upgraded.
    pub fn select_special_dots<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let dots: Vec<CellIndex> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| **item == CellItem::Dot)
            .map(|(idx, _)| idx)
            .collect();

        if count > dots.len() {
            warn!(
                "[Board] Requested {} special dots but only {} dot cells exist; capping",
                count,
                dots.len()
            );
        }

        let amount = count.min(dots.len());
        let chosen = dots.into_iter().choose_multiple(rng, amount);
        for idx in &chosen {
            self.items[*idx] = CellItem::SpecialDot;
        }
        chosen.len()
    }

    pub fn item(&self, idx: CellIndex) -> CellItem {
        self.items.get(idx).copied().unwrap_or(CellItem::Wall)
    }

    pub fn cell_is_wall(&self, idx: CellIndex) -> bool {
        self.item(idx) == CellItem::Wall
    }

    pub fn cell_is_occupied_by_adversary(&self, idx: CellIndex) -> bool {
        self.adversary_at(idx).is_some()
    }

    pub fn cell_is_occupied_by_player(&self, idx: CellIndex) -> bool {
        self.player.get(idx).copied().unwrap_or(false)
    }

    pub fn adversary_at(&self, idx: CellIndex) -> Option<AdversaryId> {
        self.adversaries.get(idx).copied().flatten()
    }

    pub fn place_player(&mut self, idx: CellIndex) {
        if let Some(slot) = self.player.get_mut(idx) {
            *slot = true;
        }
    }

    pub fn clear_player(&mut self, idx: CellIndex) {
        if let Some(slot) = self.player.get_mut(idx) {
            *slot = false;
        }
    }

    pub fn place_adversary(&mut self, idx: CellIndex, id: AdversaryId) {
        if let Some(slot) = self.adversaries.get_mut(idx) {
            *slot = Some(id);
        }
    }

    /// Only clears the cell if `id` is the adversary standing there.
    pub fn clear_adversary(&mut self, idx: CellIndex, id: AdversaryId) {
        if let Some(slot) = self.adversaries.get_mut(idx) {
            if *slot == Some(id) {
                *slot = None;
            }
        }
    }

    /// Remove the collectible on `idx`, if any, and report its kind.
    pub fn consume_item(&mut self, idx: CellIndex) -> Option<ItemKind> {
        let slot = self.items.get_mut(idx)?;
        let kind = match *slot {
            CellItem::Dot => ItemKind::Dot,
            CellItem::SpecialDot => ItemKind::SpecialDot,
            CellItem::Wall | CellItem::Empty => return None,
        };
        *slot = CellItem::Empty;
        Some(kind)
    }

    pub fn cell(&self, idx: CellIndex) -> CellSnapshot {
        CellSnapshot {
            item: self.item(idx),
            player: self.cell_is_occupied_by_player(idx),
            adversary: self.adversary_at(idx),
        }
    }

    pub fn snapshot(&self) -> Vec<CellSnapshot> {
        (0..self.items.len()).map(|idx| self.cell(idx)).collect()
    }

    /// Count of (dots, special dots) left on the board.
    pub fn count_items(&self) -> (usize, usize) {
        self.items.iter().fold((0, 0), |(dots, specials), item| match item {
            CellItem::Dot => (dots + 1, specials),
            CellItem::SpecialDot => (dots, specials + 1),
            _ => (dots, specials),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::generate_layout;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn initialize_fills_open_cells_with_dots() {
        let layout = generate_layout(28, 25);
        let open = layout.open_cells();
        let board = Board::initialize(layout);
        assert_eq!(board.count_items(), (open, 0));
        assert!(board.cell_is_wall(0));
    }

    #[test]
    fn special_dot_selection_is_capped() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::initialize(generate_layout(4, 4));
        // 4x4 leaves a 2x2 interior.
        assert_eq!(board.select_special_dots(15, &mut rng), 4);
        assert_eq!(board.count_items(), (0, 4));
        assert_eq!(board.select_special_dots(1, &mut rng), 0);
    }

    #[test]
    fn consume_item_removes_once() {
        let mut board = Board::initialize(generate_layout(5, 5));
        let idx = 6;
        assert_eq!(board.consume_item(idx), Some(ItemKind::Dot));
        assert_eq!(board.consume_item(idx), None);
        assert_eq!(board.item(idx), CellItem::Empty);
        assert_eq!(board.consume_item(0), None);
        assert_eq!(board.item(0), CellItem::Wall);
    }

    #[test]
    fn overlay_is_independent_of_items() {
        let mut board = Board::initialize(generate_layout(5, 5));
        board.place_player(6);
        board.place_adversary(7, AdversaryId(2));
        assert_eq!(
            board.cell(6),
            CellSnapshot {
                item: CellItem::Dot,
                player: true,
                adversary: None
            }
        );

        board.clear_adversary(7, AdversaryId(1));
        assert!(board.cell_is_occupied_by_adversary(7));
        board.clear_adversary(7, AdversaryId(2));
        board.clear_adversary(7, AdversaryId(2));
        assert!(!board.cell_is_occupied_by_adversary(7));

        board.clear_player(6);
        board.clear_player(6);
        assert!(!board.cell_is_occupied_by_player(6));
        assert_eq!(board.item(6), CellItem::Dot);
    }
}
