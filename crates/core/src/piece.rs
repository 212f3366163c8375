//! Piece shapes: normalized cell offsets plus a precomputed bitboard mask.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::Grid;

/// (row, col) offset of one cell inside a shape.
pub type Offset = (u8, u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("duplicate cell at ({row}, {col})")]
    Duplicate { row: i16, col: i16 },
    #[error("shape spans {span} cells, more than 255")]
    TooLarge { span: i32 },
}

/// Canonical piece forms before rotation.
pub const BASE_SHAPES: [&[(i16, i16)]; 12] = [
    // lines
    &[(0, 0), (0, 1)],
    &[(0, 0), (0, 1), (0, 2)],
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    // squares
    &[(0, 0), (0, 1), (1, 0), (1, 1)],
    &[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ],
    // L
    &[(0, 0), (1, 0), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (2, 1)],
    &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    // T
    &[(0, 1), (1, 0), (1, 1), (1, 2)],
    // 2x3 rectangle
    &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)],
    // S
    &[(0, 1), (0, 2), (1, 0), (1, 1)],
];

/// Normalized piece shape.
///
/// Cells are shifted so the minimum row and column are 0, sorted by
/// (row, col), and pairwise distinct. The empty shape is representable so
/// degenerate input flows through the engine as "no placements" rather
/// than as a fault.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<(i16, i16)>", into = "Vec<(i16, i16)>")]
pub struct Shape {
    cells: SmallVec<[Offset; 9]>,
    height: u8,
    width: u8,
    mask: u64,
}

impl Shape {
    pub fn new(cells: &[(i16, i16)]) -> Result<Self, ShapeError> {
        if cells.is_empty() {
            return Ok(Self::default());
        }

        let min_r = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_c = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let max_r = cells.iter().map(|&(r, _)| r).max().unwrap_or(0);
        let max_c = cells.iter().map(|&(_, c)| c).max().unwrap_or(0);
        let span = (max_r as i32 - min_r as i32).max(max_c as i32 - min_c as i32);
        if span > u8::MAX as i32 - 1 {
            return Err(ShapeError::TooLarge { span: span + 1 });
        }

        let mut sorted: SmallVec<[Offset; 9]> = cells
            .iter()
            .map(|&(r, c)| ((r - min_r) as u8, (c - min_c) as u8))
            .collect();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            let (r, c) = pair[0];
            return Err(ShapeError::Duplicate {
                row: r as i16 + min_r,
                col: c as i16 + min_c,
            });
        }

        Ok(Self::from_sorted(sorted))
    }

    /// Builds the shape from already-normalized, sorted, distinct cells.
    fn from_sorted(cells: SmallVec<[Offset; 9]>) -> Self {
        let height = cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let width = cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);

        // only shapes that fit the grid get a mask; the rest never place
        let mask = if (height as usize) <= Grid::HEIGHT && (width as usize) <= Grid::WIDTH {
            cells
                .iter()
                .fold(0u64, |acc, &(r, c)| acc | Grid::bit(r as usize, c as usize))
        } else {
            0
        };

        Self {
            cells,
            height,
            width,
            mask,
        }
    }

    /// All base shapes, unrotated.
    pub fn catalogue() -> Vec<Shape> {
        BASE_SHAPES
            .iter()
            .filter_map(|cells| Shape::new(cells).ok())
            .collect()
    }

    #[inline]
    pub fn cells(&self) -> &[Offset] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding-box height (0 for the empty shape).
    #[inline]
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Bounding-box width (0 for the empty shape).
    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// True if the bounding box fits inside the grid at all.
    #[inline]
    pub fn fits_grid(&self) -> bool {
        !self.is_empty() && self.height() <= Grid::HEIGHT && self.width() <= Grid::WIDTH
    }

    /// Bitboard of the shape anchored at (0, 0).
    #[inline(always)]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Bitboard of the shape anchored at (row, col).
    /// Only meaningful when the bounding box fits at that anchor; anchors
    /// past the last cell give 0.
    #[inline(always)]
    pub fn mask_at(&self, row: usize, col: usize) -> u64 {
        u32::try_from(row * Grid::WIDTH + col)
            .ok()
            .and_then(|shift| self.mask.checked_shl(shift))
            .unwrap_or(0)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells
            .iter()
            .any(|&(r, c)| r as usize == row && c as usize == col)
    }

    /// Quarter turn clockwise: (r, c) -> (c, height - 1 - r), renormalized.
    pub fn rotated_cw(&self) -> Shape {
        let mut cells: SmallVec<[Offset; 9]> = self
            .cells
            .iter()
            .map(|&(r, c)| (c, self.height - 1 - r))
            .collect();
        cells.sort_unstable();
        Self::from_sorted(cells)
    }

    pub fn rotated(&self, quarter_turns: u8) -> Shape {
        (0..quarter_turns % 4).fold(self.clone(), |shape, _| shape.rotated_cw())
    }
}

impl TryFrom<Vec<(i16, i16)>> for Shape {
    type Error = ShapeError;

    fn try_from(cells: Vec<(i16, i16)>) -> Result<Self, Self::Error> {
        Shape::new(&cells)
    }
}

impl From<Shape> for Vec<(i16, i16)> {
    fn from(shape: Shape) -> Self {
        shape
            .cells
            .iter()
            .map(|&(r, c)| (r as i16, c as i16))
            .collect()
    }
}
