//! Geometric transforms of a grid.
//!
//! A rectangular board has an 8-member symmetry group: four rotations,
//! each with and without a horizontal mirror. Alternating mirror and
//! quarter-rotation four times walks the whole group, which is how
//! [`equivalents`] generates it.

use super::grid::Grid;

/// Reverses every row. The horizontal mirror.
pub fn mirrored(grid: &Grid) -> Grid {
    let rows: Vec<String> = grid
        .row_strings()
        .iter()
        .map(|r| r.chars().rev().collect())
        .collect();
    Grid::from_rows(&rows)
}

/// Rotates a quarter turn: new row `j` is column `j` read bottom-to-top.
pub fn rotated(grid: &Grid) -> Grid {
    let rows: Vec<String> = (0..grid.columns())
        .map(|j| (0..grid.rows()).rev().map(|i| grid.get(i, j)).collect())
        .collect();
    Grid::from_rows(&rows)
}

/// Generates the symmetry class of a grid in a fixed order: four times,
/// emit the mirror of the current grid, then rotate and emit that.
///
/// Duplicates (grids with self-symmetry) keep their first occurrence, so
/// the result has at most 8 members and the final member of the walk
/// decides the insert bucket in the symmetry cache.
pub fn equivalents(grid: &Grid) -> Vec<Grid> {
    let mut class: Vec<Grid> = Vec::with_capacity(8);
    let mut push = |g: Grid, class: &mut Vec<Grid>| {
        if !class.contains(&g) {
            class.push(g);
        }
    };
    let mut current = grid.clone();
    for _ in 0..4 {
        push(mirrored(&current), &mut class);
        let turned = rotated(&current);
        push(turned.clone(), &mut class);
        current = turned;
    }
    class
}
