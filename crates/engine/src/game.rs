//! Game rules for a human player: move validation, scoring, round refill.

use gridblast_core::{GameState, Move, Placement, ROUND_SIZE};
use thiserror::Error;

use crate::apply::apply_move;
use crate::collision::is_valid_placement;
use crate::config::ScoreRules;
use crate::dealer::Dealer;
use crate::movegen::can_any_piece_be_placed;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("piece {} does not exist, choose 1-{}", .0 + 1, ROUND_SIZE)]
    NoSuchPiece(usize),
    #[error("piece {} is already placed", .0 + 1)]
    AlreadyPlaced(usize),
    #[error("piece {} is out of bounds or overlaps at ({row}, {col})", .piece + 1)]
    Blocked { piece: usize, row: i32, col: i32 },
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub cells: usize,
    pub lines: u8,
    pub points: u32,
    pub new_round: bool,
}

pub struct Game {
    state: GameState,
    dealer: Dealer,
    rules: ScoreRules,
}

impl Game {
    /// Start a game with an empty grid and a freshly dealt round.
    pub fn new(mut dealer: Dealer, rules: ScoreRules) -> Self {
        let state = GameState::with_slots(dealer.deal_round());
        Self {
            state,
            dealer,
            rules,
        }
    }

    /// Resume from an existing state. The dealer is used for later rounds.
    pub fn with_state(state: GameState, dealer: Dealer, rules: ScoreRules) -> Self {
        Self {
            state,
            dealer,
            rules,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    /// No unplaced piece fits anywhere.
    pub fn is_over(&self) -> bool {
        !can_any_piece_be_placed(&self.state.grid, &self.state.slots)
    }

    pub fn play_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        self.play(mv.piece, mv.row as i32, mv.col as i32)
    }

    /// Place slot `piece` with its anchor at (row, col).
    pub fn play(&mut self, piece: usize, row: i32, col: i32) -> Result<MoveReport, MoveError> {
        let slot = self
            .state
            .slots
            .get(piece)
            .ok_or(MoveError::NoSuchPiece(piece))?;
        if slot.placed {
            return Err(MoveError::AlreadyPlaced(piece));
        }
        if !is_valid_placement(&self.state.grid, &slot.shape, row, col) {
            return Err(MoveError::Blocked { piece, row, col });
        }

        let cells = slot.shape.len();
        let (next, lines) = apply_move(
            &self.state.grid,
            &slot.shape,
            Placement::new(row as u8, col as u8),
        );
        let points = self.rules.points(cells, lines);

        self.state.grid = next;
        self.state.slots[piece].placed = true;
        self.state.score += points;
        self.state.pieces_placed += 1;
        self.state.lines_cleared += lines as u32;
        log::debug!(
            "piece {piece} at ({row}, {col}): {cells} cells, {lines} lines, +{points}"
        );

        let new_round = self.state.round_complete();
        if new_round {
            self.state.slots = self.dealer.deal_round();
            self.state.rounds += 1;
        }

        Ok(MoveReport {
            cells,
            lines,
            points,
            new_round,
        })
    }
}
