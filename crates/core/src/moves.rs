//! Placement, move and sequence definitions.

use serde::{Deserialize, Serialize};

/// Anchor position of a shape's (0, 0) offset on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Placement {
    pub row: u8,
    pub col: u8,
}

impl Placement {
    pub const ZERO: Self = Self { row: 0, col: 0 };

    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// One resolved placement for one piece slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: usize,
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(piece: usize, row: u8, col: u8) -> Self {
        Self { piece, row, col }
    }

    pub fn at(piece: usize, placement: Placement) -> Self {
        Self {
            piece,
            row: placement.row,
            col: placement.col,
        }
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.row, self.col)
    }
}

/// Ordered moves covering every unplaced slot exactly once.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    moves: Vec<Move>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Prepends a move; sequences are assembled from the leaves upward.
    pub fn prepend(&mut self, mv: Move) {
        self.moves.insert(0, mv);
    }

    /// Piece indices in placement order.
    pub fn order(&self) -> Vec<usize> {
        self.moves.iter().map(|mv| mv.piece).collect()
    }
}

impl From<Vec<Move>> for Sequence {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for Sequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
