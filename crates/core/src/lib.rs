//! gridblast core crate - fundamental types for the 8x8 block puzzle.

mod board;
mod moves;
mod piece;
mod state;

pub use board::{Cell, Grid, GridError};
pub use moves::{Move, Placement, Sequence};
pub use piece::{Offset, Shape, ShapeError, BASE_SHAPES};
pub use state::{unplaced_indices, GameState, PieceSlot, Position, ROUND_SIZE};
