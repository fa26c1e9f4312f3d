//! Brick Paving Puzzle Solver Library
//!
//! Provides the core solving functionality for an exact-cover tiling puzzle
//! on a staggered grid: a rectangular board must be completely covered by
//! placing pieces from a fixed set, without overlap and without rotation.

pub mod puzzle;
pub mod render;
pub mod shape;
pub mod solver;

pub use shape::{Cell, Checkpoint, Color, Shape, EMPTY};
