//! board representation - one u64 bitboard, bit index `row * 8 + col`
//! the grid is `Copy`, so every search branch owns its own snapshot

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// State of a single grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Filled,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} cells, found {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: unknown cell character {ch:?}")]
    BadCell { row: usize, ch: char },
}

/// 8x8 puzzle grid.
/// Row 0 is the top row, column 0 the leftmost column.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Grid {
    bits: u64,
}

impl Grid {
    pub const WIDTH: usize = 8;
    pub const HEIGHT: usize = 8;
    pub const EMPTY: Grid = Grid { bits: 0 };

    /// Mask of row 0; shift left by `row * 8` for other rows.
    pub const ROW_MASK: u64 = 0xFF;
    /// Mask of column 0; shift left by `col` for other columns.
    pub const COLUMN_MASK: u64 = 0x0101_0101_0101_0101;

    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline(always)]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Single-cell mask. Caller guarantees the coordinates are in bounds.
    #[inline(always)]
    pub const fn bit(row: usize, col: usize) -> u64 {
        1u64 << (row * Self::WIDTH + col)
    }

    pub fn from_rows(rows: [u8; Self::HEIGHT]) -> Self {
        let mut grid = Self::new();
        for (row, &value) in rows.iter().enumerate() {
            grid.set_row(row, value);
        }
        grid
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.bits & Self::bit(row, col) != 0
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if self.get(row, col) {
            Cell::Filled
        } else {
            Cell::Empty
        }
    }

    pub fn set(&mut self, row: usize, col: usize, filled: bool) {
        if filled {
            self.bits |= Self::bit(row, col);
        } else {
            self.bits &= !Self::bit(row, col);
        }
    }

    #[inline(always)]
    pub fn fill_mask(&mut self, mask: u64) {
        self.bits |= mask;
    }

    #[inline(always)]
    pub fn clear_mask(&mut self, mask: u64) {
        self.bits &= !mask;
    }

    #[inline]
    pub fn filled_count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        let mask = Self::ROW_MASK << (row * Self::WIDTH);
        self.bits & mask == mask
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        let mask = Self::COLUMN_MASK << col;
        self.bits & mask == mask
    }

    /// Row as a bitmask, bit `c` = column `c`.
    pub fn row(&self, row: usize) -> u8 {
        (self.bits >> (row * Self::WIDTH)) as u8
    }

    pub fn set_row(&mut self, row: usize, value: u8) {
        let shift = row * Self::WIDTH;
        self.bits = (self.bits & !(Self::ROW_MASK << shift)) | ((value as u64) << shift);
    }

    pub fn rows(&self) -> [u8; Self::HEIGHT] {
        let mut rows = [0u8; Self::HEIGHT];
        for (row, value) in rows.iter_mut().enumerate() {
            *value = self.row(row);
        }
        rows
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rows().as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let vec: Vec<u8> = Vec::deserialize(deserializer)?;
        if vec.len() != Grid::HEIGHT {
            return Err(serde::de::Error::custom("expected 8 rows"));
        }
        let mut rows = [0u8; Grid::HEIGHT];
        rows.copy_from_slice(&vec);
        Ok(Grid::from_rows(rows))
    }
}

/// Text form: one line per row, `#` filled and `.` empty.
/// Blank lines and spaces inside a row are ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != Grid::HEIGHT {
            return Err(GridError::RowCount {
                expected: Grid::HEIGHT,
                found: lines.len(),
            });
        }

        let mut grid = Grid::new();
        for (row, line) in lines.iter().enumerate() {
            let mut col = 0;
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                let filled = match ch {
                    '#' | '■' => true,
                    '.' => false,
                    _ => return Err(GridError::BadCell { row, ch }),
                };
                if col < Grid::WIDTH {
                    grid.set(row, col, filled);
                }
                col += 1;
            }
            if col != Grid::WIDTH {
                return Err(GridError::RowWidth {
                    row,
                    expected: Grid::WIDTH,
                    found: col,
                });
            }
        }
        Ok(grid)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::HEIGHT {
            for col in 0..Self::WIDTH {
                write!(f, "{}", if self.get(row, col) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut g = Grid::new();
        g.set(5, 2, true);
        assert!(g.get(5, 2));
        assert!(!g.get(2, 5));
        assert_eq!(g.cell(5, 2), Cell::Filled);
        g.set(5, 2, false);
        assert!(g.is_empty());
    }

    #[test]
    fn test_row_and_column_full() {
        let mut g = Grid::new();
        for col in 0..Grid::WIDTH {
            g.set(3, col, true);
        }
        assert!(g.is_row_full(3));
        assert!(!g.is_row_full(2));
        assert!(!g.is_column_full(0));

        for row in 0..Grid::HEIGHT {
            g.set(row, 6, true);
        }
        assert!(g.is_column_full(6));
        assert_eq!(g.filled_count(), 15);
    }

    #[test]
    fn test_rows_roundtrip_through_from_rows() {
        let rows = [0x01, 0x80, 0, 0xFF, 0, 0x3C, 0, 0x81];
        let g = Grid::from_rows(rows);
        assert_eq!(g.rows(), rows);
        assert!(g.get(0, 0));
        assert!(g.get(1, 7));
        assert!(g.is_row_full(3));
    }

    #[test]
    fn test_parse_text_board() {
        let g: Grid = "
            #.......
            ##......
            ........
            ........
            ........
            ........
            ........
            .......#
        "
        .parse()
        .expect("valid board");
        assert_eq!(g.filled_count(), 4);
        assert!(g.get(1, 1));
        assert!(g.get(7, 7));
        assert_eq!(g.to_string().parse::<Grid>(), Ok(g));
    }

    #[test]
    fn test_parse_rejects_malformed_boards() {
        assert_eq!(
            "........".parse::<Grid>(),
            Err(GridError::RowCount {
                expected: 8,
                found: 1
            })
        );

        let short_row = "........\n".repeat(7) + ".......";
        assert!(matches!(
            short_row.parse::<Grid>(),
            Err(GridError::RowWidth { row: 7, found: 7, .. })
        ));

        let bad_char = "........\n".repeat(7) + "...x....";
        assert_eq!(
            bad_char.parse::<Grid>(),
            Err(GridError::BadCell { row: 7, ch: 'x' })
        );
    }

    #[test]
    fn test_serde_rows() {
        let mut g = Grid::new();
        g.set(0, 1, true);
        g.set(7, 0, true);
        let json = serde_json::to_string(&g).expect("serialize");
        assert_eq!(json, "[2,0,0,0,0,0,0,1]");
        let back: Grid = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, g);
        assert!(serde_json::from_str::<Grid>("[0,0,0]").is_err());
    }
}
