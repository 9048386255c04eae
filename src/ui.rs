#![cfg(feature = "std")]

//! Console rendering of boards.

use crate::board::{Board, Cell};
use crate::common::Coord;

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Occupied => 'S',
        Cell::Hit => 'X',
        Cell::Destroyed => '#',
        Cell::Miss => 'o',
    }
}

/// Row/column-labeled textual grid. Columns are letters from `A`, rows are
/// 1-based numbers; hidden boards render intact segments as water.
pub fn render_board(board: &Board) -> String {
    let size = board.size() as i32;
    let mut out = String::new();
    out.push_str("   ");
    for y in 0..size {
        out.push(' ');
        out.push((b'A' + y as u8) as char);
    }
    out.push('\n');
    for x in 0..size {
        out.push_str(&format!("{:2} ", x + 1));
        for y in 0..size {
            let cell = board.cell(Coord::new(x, y)).unwrap_or(Cell::Empty);
            out.push(' ');
            out.push(cell_symbol(cell));
        }
        out.push('\n');
    }
    out
}

/// Print both boards of a match from the user's point of view.
pub fn print_match_view(user_board: &Board, opponent_board: &Board) {
    println!("Your board:");
    print!("{}", render_board(user_board));
    println!();
    println!("Opponent board:");
    print!("{}", render_board(opponent_board));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::{Axis, Vessel};

    #[test]
    fn rendering_labels_and_masks() {
        let mut b = Board::new(6).unwrap();
        b.place_vessel(Vessel::new(Coord::new(0, 0), 2, Axis::Horizontal))
            .unwrap();
        let shown = render_board(&b);
        assert!(shown.starts_with("    A B C D E F\n"));
        assert!(shown.contains(" 1  S S . . . .\n"));

        b.set_hidden(true);
        let masked = render_board(&b);
        assert!(masked.contains(" 1  . . . . . .\n"));

        b.resolve_shot(Coord::new(0, 0)).unwrap();
        b.resolve_shot(Coord::new(5, 5)).unwrap();
        let shot_at = render_board(&b);
        assert!(shot_at.contains(" 1  X . . . . .\n"));
        assert!(shot_at.contains(" 6  . . . . . o\n"));
    }
}
