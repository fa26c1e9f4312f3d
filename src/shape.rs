//! Shape geometry and occupancy buffers.
//!
//! A `Shape` describes a set of occupied cells on a staggered grid, plus a
//! dense cell-to-color buffer derived from those cells. The same type serves
//! as the board (one large shape whose buffer is mutated during search) and
//! as the pieces (small shapes whose buffers stay fixed after construction).

/// A grid position as (x, y), with x increasing rightward and y downward.
pub type Cell = (i32, i32);

/// Identifies which shape owns a cell. Positive ids only.
pub type Color = u8;

/// The color of an unoccupied buffer entry.
pub const EMPTY: Color = 0;

/// A set of cells with a bounding-box occupancy buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
    color: Color,
    /// One color per bounding-box cell, row-major (`y * width + x`).
    occupancy: Vec<Color>,
}

/// A saved copy of a shape's occupancy buffer, for backtracking.
pub struct Checkpoint(Vec<Color>);

impl Shape {
    /// Creates a shape owning `color` at every cell of `cells`.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty, contains a negative coordinate, or
    /// `color` is the reserved empty value.
    pub fn new(color: Color, cells: Vec<Cell>) -> Self {
        assert!(!cells.is_empty(), "shape needs at least one cell");
        assert!(color != EMPTY, "color 0 is reserved for empty cells");

        let mut width = 0;
        let mut height = 0;
        for &(x, y) in &cells {
            assert!(x >= 0 && y >= 0, "shape cells must be non-negative");
            width = width.max(x + 1);
            height = height.max(y + 1);
        }

        let mut occupancy = vec![EMPTY; (width * height) as usize];
        for &(x, y) in &cells {
            occupancy[(y * width + x) as usize] = color;
        }

        Self {
            cells,
            width,
            height,
            color,
            occupancy,
        }
    }

    /// Width of the bounding box (one past the largest x).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the bounding box (one past the largest y).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The color this shape stamps into a board when drawn.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The cells this shape occupies when anchored at the origin.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the color at `(x, y)`, or [`EMPTY`] anywhere outside the
    /// bounding box (including negative coordinates).
    ///
    /// Out-of-bounds reads being empty is load-bearing: `fits` rejects
    /// placements that run off the board without separate bounds checks.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Color {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return EMPTY;
        }
        self.occupancy[(y * self.width + x) as usize]
    }

    /// Overwrites the buffer entry at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the bounding box. Callers are expected
    /// to have checked `fits` first.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        self.occupancy[(y * self.width + x) as usize] = color;
    }

    /// True once none of this shape's own cells still hold its own color.
    ///
    /// Invoked on the board: every originally-empty board cell has been
    /// overwritten by some piece.
    pub fn full(&self) -> bool {
        self.cells.iter().all(|&(x, y)| self.get(x, y) != self.color)
    }

    /// The board cells this shape covers when anchored at `(x, y)`.
    ///
    /// Odd anchor columns sit half a cell lower on the staggered grid, so
    /// the shape's own odd columns shift up one row to compensate. Lazy, so
    /// callers short-circuit without visiting every cell.
    pub fn cells_at(&self, x: i32, y: i32) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |&(px, py)| {
            let delta = if x % 2 != 0 { px % 2 } else { 0 };
            (x + px, y + py - delta)
        })
    }

    /// True if every cell of `piece` anchored at `(x, y)` lands on a cell
    /// of this board that still holds the board's own color.
    pub fn fits(&self, piece: &Shape, x: i32, y: i32) -> bool {
        piece
            .cells_at(x, y)
            .all(|(bx, by)| self.get(bx, by) == self.color)
    }

    /// Stamps `piece`'s color onto every cell it covers at `(x, y)`.
    ///
    /// Call only when `fits(piece, x, y)` just returned true; there is no
    /// overlap check here.
    pub fn draw(&mut self, piece: &Shape, x: i32, y: i32) {
        for (bx, by) in piece.cells_at(x, y) {
            self.set(bx, by, piece.color);
        }
    }

    /// Saves the occupancy buffer for a later [`Shape::restore`].
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.occupancy.clone())
    }

    /// Restores the occupancy buffer saved by [`Shape::checkpoint`].
    pub fn restore(&mut self, checkpoint: &Checkpoint) {
        self.occupancy.copy_from_slice(&checkpoint.0);
    }
}
