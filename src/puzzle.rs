//! The shipped puzzle instance: board dimensions and piece definitions.
//!
//! Each piece is defined as a set of cell positions normalized to start at
//! the origin, listed row by row. Pieces are never rotated or reflected;
//! they are placed exactly as drawn here. The nine pieces total 34 cells
//! against 30 board cells, so any full cover leaves at least one piece
//! unused.

use crate::shape::{Cell, Color, Shape};

/// The color marking a board cell that no piece has claimed yet.
pub const BOARD_COLOR: Color = 1;

/// Board width in cells.
pub const BOARD_WIDTH: i32 = 5;

/// Board height in cells.
pub const BOARD_HEIGHT: i32 = 6;

/// The nine puzzle pieces, in definition order.
///
/// Piece colors are assigned in this order starting right after
/// [`BOARD_COLOR`], so the first piece renders as `2` and the last as `A`.
pub const PIECE_CELLS: &[&[Cell]] = &[
    // single dot (1 cell)
    &[(0, 0)],
    // U opening downward (5 cells)
    &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)],
    // diagonal pair (2 cells)
    &[(0, 0), (1, 1)],
    // wide zigzag (5 cells)
    &[(0, 0), (2, 0), (1, 1), (2, 1), (3, 1)],
    // plus with a shifted arm (5 cells)
    &[(0, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    // vertical bar (3 cells)
    &[(0, 0), (0, 1), (0, 2)],
    // tall S (4 cells)
    &[(2, 0), (0, 1), (1, 1), (0, 2)],
    // Z (4 cells)
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    // P (5 cells)
    &[(0, 0), (1, 0), (1, 1), (0, 2), (1, 2)],
];

/// Builds the empty board: a full `BOARD_WIDTH x BOARD_HEIGHT` rectangle
/// holding [`BOARD_COLOR`] everywhere.
pub fn board() -> Shape {
    let mut cells = Vec::with_capacity((BOARD_WIDTH * BOARD_HEIGHT) as usize);
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            cells.push((x, y));
        }
    }
    Shape::new(BOARD_COLOR, cells)
}

/// Builds the piece list in definition order, colors `2..=10`.
pub fn pieces() -> Vec<Shape> {
    PIECE_CELLS
        .iter()
        .enumerate()
        .map(|(index, cells)| Shape::new(BOARD_COLOR + 1 + index as Color, cells.to_vec()))
        .collect()
}
