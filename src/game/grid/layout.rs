use crate::game::types::{CellIndex, Direction};

/// Static wall/open classification of every cell of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

/// Build the maze for the given dimensions.
///
/// A cell is a wall when it lies on the outer border, or when its row is a multiple
/// of 6 and its column is not a multiple of 5. Deterministic: same size, same maze.
pub fn generate_layout(width: usize, height: usize) -> Layout {
    let mut walls = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let border = row == 0 || col == 0 || row + 1 == height || col + 1 == width;
            walls.push(border || (row % 6 == 0 && col % 5 != 0));
        }
    }
    Layout {
        width,
        height,
        walls,
    }
}

impl Layout {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn contains(&self, idx: CellIndex) -> bool {
        idx < self.walls.len()
    }

    /// Out-of-range indices count as walls.
    pub fn is_wall(&self, idx: CellIndex) -> bool {
        self.walls.get(idx).copied().unwrap_or(true)
    }

    pub fn row_of(&self, idx: CellIndex) -> usize {
        idx / self.width
    }

    pub fn col_of(&self, idx: CellIndex) -> usize {
        idx % self.width
    }

    pub fn index_of(&self, row: usize, col: usize) -> CellIndex {
        row * self.width + col
    }

    pub fn center(&self) -> CellIndex {
        self.index_of(self.height / 2, self.width / 2)
    }

    /// Cell one step away in `direction`, or `None` when the step would leave the
    /// grid or wrap around a row edge.
    pub fn neighbor(&self, idx: CellIndex, direction: Direction) -> Option<CellIndex> {
        if !self.contains(idx) {
            return None;
        }
        let col = self.col_of(idx);
        match direction {
            Direction::Left if col > 0 => Some(idx - 1),
            Direction::Right if col + 1 < self.width => Some(idx + 1),
            Direction::Up if idx >= self.width => Some(idx - self.width),
            Direction::Down if idx + self.width < self.walls.len() => Some(idx + self.width),
            _ => None,
        }
    }

    /// Number of non-wall cells.
    pub fn open_cells(&self) -> usize {
        self.walls.iter().filter(|wall| !**wall).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_cells_are_walls_for_many_sizes() {
        for (width, height) in [(1, 1), (2, 3), (7, 7), (28, 25), (40, 13)] {
            let layout = generate_layout(width, height);
            assert_eq!(layout.len(), width * height);
            for idx in 0..layout.len() {
                let (row, col) = (layout.row_of(idx), layout.col_of(idx));
                if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                    assert!(layout.is_wall(idx), "border cell {idx} open on {width}x{height}");
                }
            }
        }
    }

    #[test]
    fn inner_wall_rows_keep_gaps_every_five_columns() {
        let layout = generate_layout(28, 25);
        assert!(layout.is_wall(layout.index_of(6, 1)));
        assert!(!layout.is_wall(layout.index_of(6, 5)));
        assert!(!layout.is_wall(layout.index_of(6, 10)));
        assert!(!layout.is_wall(layout.index_of(7, 3)));
        assert!(layout.is_wall(layout.index_of(12, 14)));
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_layout(28, 25), generate_layout(28, 25));
    }

    #[test]
    fn neighbor_refuses_to_wrap_rows() {
        let layout = generate_layout(5, 4);
        assert_eq!(layout.neighbor(5, Direction::Left), None);
        assert_eq!(layout.neighbor(9, Direction::Right), None);
        assert_eq!(layout.neighbor(2, Direction::Up), None);
        assert_eq!(layout.neighbor(17, Direction::Down), None);
        assert_eq!(layout.neighbor(6, Direction::Right), Some(7));
        assert_eq!(layout.neighbor(6, Direction::Down), Some(11));
        assert_eq!(layout.neighbor(99, Direction::Down), None);
    }
}
