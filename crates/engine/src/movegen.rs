//! Legal placement enumeration for a shape on a grid.

use gridblast_core::{Grid, PieceSlot, Placement, Shape};
use smallvec::SmallVec;

use crate::collision::is_valid_placement;

/// One entry per grid cell is the hard upper bound for a single shape.
pub const MAX_PLACEMENTS: usize = Grid::WIDTH * Grid::HEIGHT;

/// Legal anchors in row-major order, stored inline.
pub type PlacementList = SmallVec<[Placement; MAX_PLACEMENTS]>;

/// Anchors whose bounding box fits the grid and that pass the validity
/// check, row-major.
fn legal_anchors<'a>(grid: &'a Grid, shape: &'a Shape) -> impl Iterator<Item = Placement> + 'a {
    let (rows, cols) = if shape.fits_grid() {
        (
            Grid::HEIGHT - shape.height() + 1,
            Grid::WIDTH - shape.width() + 1,
        )
    } else {
        (0, 0)
    };

    (0..rows)
        .flat_map(move |row| (0..cols).map(move |col| (row, col)))
        .filter(move |&(row, col)| is_valid_placement(grid, shape, row as i32, col as i32))
        .map(|(row, col)| Placement::new(row as u8, col as u8))
}

/// All legal anchors for `shape`, in row-major order.
///
/// Only anchors where the bounding box fits are scanned. The order is part
/// of the search's tie-breaking contract: callers rely on the first listed
/// placement winning among equal scores.
pub fn generate_placements(grid: &Grid, shape: &Shape) -> PlacementList {
    legal_anchors(grid, shape).collect()
}

/// Number of legal anchors, without building the list.
pub fn count_placements(grid: &Grid, shape: &Shape) -> usize {
    legal_anchors(grid, shape).count()
}

pub fn can_place_anywhere(grid: &Grid, shape: &Shape) -> bool {
    legal_anchors(grid, shape).next().is_some()
}

/// Can at least one unplaced slot go somewhere on the grid?
pub fn can_any_piece_be_placed(grid: &Grid, slots: &[PieceSlot]) -> bool {
    slots
        .iter()
        .filter(|slot| !slot.placed)
        .any(|slot| can_place_anywhere(grid, &slot.shape))
}
