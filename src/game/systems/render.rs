use crate::game::board::Board;
use crate::game::types::CellItem;

/// Draw the board as text, one line per grid row.
///
/// Occupants take priority over items: `P` player, `A` adversary, then
/// `#` wall, `.` dot, `o` special dot and a space for an empty cell.
pub fn render_board(board: &Board) -> String {
    let width = board.layout().width().max(1);
    let mut out = String::with_capacity(board.layout().len() + board.layout().height());
    for (idx, cell) in board.snapshot().into_iter().enumerate() {
        let symbol = if cell.player {
            'P'
        } else if cell.adversary.is_some() {
            'A'
        } else {
            match cell.item {
                CellItem::Wall => '#',
                CellItem::Dot => '.',
                CellItem::SpecialDot => 'o',
                CellItem::Empty => ' ',
            }
        };
        out.push(symbol);
        if (idx + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}
