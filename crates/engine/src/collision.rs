//! collision detection - grid edges and filled cells

use gridblast_core::{Grid, Shape};

/// Does the shape's bounding box fit inside the grid at this anchor?
/// The anchor itself must be a grid cell, even for the empty shape.
#[inline(always)]
pub fn in_bounds(shape: &Shape, row: i32, col: i32) -> bool {
    row >= 0
        && col >= 0
        && (row as usize) < Grid::HEIGHT
        && (col as usize) < Grid::WIDTH
        && row as usize + shape.height() <= Grid::HEIGHT
        && col as usize + shape.width() <= Grid::WIDTH
}

/// Every cell of `shape` anchored at (row, col) lands in bounds on an empty
/// cell. Vacuously true for the empty shape at an in-bounds anchor.
#[inline]
pub fn is_valid_placement(grid: &Grid, shape: &Shape, row: i32, col: i32) -> bool {
    in_bounds(shape, row, col) && grid.bits() & shape.mask_at(row as usize, col as usize) == 0
}

/// does the shape hit a wall or a filled cell? (just !is_valid_placement)
#[inline]
pub fn collides(grid: &Grid, shape: &Shape, row: i32, col: i32) -> bool {
    !is_valid_placement(grid, shape, row, col)
}
