//! Text rendering of shapes as staggered ASCII boxes.
//!
//! Each occupied cell becomes a 5x3 character box labelled with its owning
//! color: blank for unclaimed board cells, `2`-`9` for the first pieces,
//! then `A` onward. Even columns are drawn one character row lower than odd
//! columns, which is what makes the brick-wall stagger visible.

use crate::puzzle::BOARD_COLOR;
use crate::shape::{Color, Shape, EMPTY};

/// Character columns per cell box.
const CELL_WIDTH: usize = 5;

/// Character rows per cell box (plus one shared row for the stagger).
const CELL_HEIGHT: usize = 3;

/// The box label for a color.
fn cell_label(color: Color) -> u8 {
    if color == BOARD_COLOR {
        b' '
    } else if color < 10 {
        b'0' + color
    } else {
        b'A' + color - 10
    }
}

/// Renders a shape's occupancy buffer as staggered boxes.
///
/// Every canvas row is emitted, newline terminated and padded with spaces
/// to the full width, so the output is `width * 5` columns by
/// `height * 3 + 1` rows.
pub fn format_shape(shape: &Shape) -> String {
    let row_width = shape.width() as usize * CELL_WIDTH;
    let row_count = shape.height() as usize * CELL_HEIGHT + 1;
    let mut canvas = vec![b' '; row_width * row_count];

    for y in 0..shape.height() {
        for x in 0..shape.width() {
            let color = shape.get(x, y);
            if color == EMPTY {
                continue;
            }
            // even columns sit one character row lower than odd ones
            let box_row = y as usize * CELL_HEIGHT + usize::from(x % 2 == 0);
            let top = box_row * row_width + x as usize * CELL_WIDTH;
            let mid = top + row_width;
            let bottom = mid + row_width;
            canvas[top..top + CELL_WIDTH].copy_from_slice(b".---.");
            canvas[mid..mid + CELL_WIDTH]
                .copy_from_slice(&[b'|', b' ', cell_label(color), b' ', b'|']);
            canvas[bottom..bottom + CELL_WIDTH].copy_from_slice(b"'___'");
        }
    }

    let mut output = String::with_capacity(canvas.len() + row_count);
    for row in canvas.chunks(row_width) {
        output.extend(row.iter().map(|&byte| byte as char));
        output.push('\n');
    }
    output
}
