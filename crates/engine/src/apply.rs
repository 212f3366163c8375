use gridblast_core::{Grid, Placement, Shape};

use crate::collision::is_valid_placement;

/// Fill the shape's cells at (row, col). Returns the number of cells filled.
/// Caller guarantees the placement is valid.
#[inline]
pub fn apply_placement(grid: &mut Grid, shape: &Shape, row: usize, col: usize) -> usize {
    debug_assert!(is_valid_placement(grid, shape, row as i32, col as i32));
    grid.fill_mask(shape.mask_at(row, col));
    shape.len()
}

/// Clear every full row and every full column, returning how many were
/// cleared. Lines are detected before any cell is cleared, so a cell shared
/// by a full row and a full column counts toward both.
pub fn clear_completed_lines(grid: &mut Grid) -> u8 {
    let mut cleared = 0u8;
    let mut mask = 0u64;

    for row in 0..Grid::HEIGHT {
        if grid.is_row_full(row) {
            mask |= Grid::ROW_MASK << (row * Grid::WIDTH);
            cleared += 1;
        }
    }
    for col in 0..Grid::WIDTH {
        if grid.is_column_full(col) {
            mask |= Grid::COLUMN_MASK << col;
            cleared += 1;
        }
    }

    grid.clear_mask(mask);
    cleared
}

/// Apply a placement to a snapshot and return the resulting grid and lines cleared.
#[inline]
pub fn apply_move(grid: &Grid, shape: &Shape, placement: Placement) -> (Grid, u8) {
    let mut next = *grid;
    apply_placement(
        &mut next,
        shape,
        placement.row as usize,
        placement.col as usize,
    );
    let lines = clear_completed_lines(&mut next);
    (next, lines)
}
