//! Round and game state representation.

use crate::{Grid, Shape};
use serde::{Deserialize, Serialize};

/// Pieces dealt per round.
pub const ROUND_SIZE: usize = 3;

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PieceSlot {
    pub shape: Shape,
    #[serde(default)]
    pub placed: bool,
}

impl PieceSlot {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            placed: false,
        }
    }

    pub fn placed(shape: Shape) -> Self {
        Self {
            shape,
            placed: true,
        }
    }
}

/// Indices of the slots still waiting to be placed, in slot order.
pub fn unplaced_indices(slots: &[PieceSlot]) -> Vec<usize> {
    slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| !slot.placed)
        .map(|(i, _)| i)
        .collect()
}

/// A grid plus the pieces to place on it; what `suggest` reads from disk.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub grid: Grid,
    pub pieces: Vec<PieceSlot>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub slots: [PieceSlot; ROUND_SIZE],
    pub score: u32,
    pub rounds: u32,
    pub pieces_placed: u32,
    pub lines_cleared: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: Grid::new(),
            slots: Default::default(),
            score: 0,
            rounds: 0,
            pieces_placed: 0,
            lines_cleared: 0,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(slots: [PieceSlot; ROUND_SIZE]) -> Self {
        Self {
            slots,
            rounds: 1,
            ..Self::default()
        }
    }

    pub fn round_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.placed)
    }

    pub fn position(&self) -> Position {
        Position {
            grid: self.grid,
            pieces: self.slots.to_vec(),
        }
    }
}
