//! Board representation and geometry.
//!
//! Contains the grid value type, line enumeration over rows, columns,
//! and diagonals, and the symmetry transforms used by the cache.

pub mod grid;
pub mod lines;
pub mod symmetry;

pub use grid::{Grid, Mark, Move, EMPTY};
pub use lines::{lines, shrink};
pub use symmetry::{equivalents, mirrored, rotated};
