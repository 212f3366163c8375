//! gridblast search crate - exhaustive move-sequence suggestion.

mod exhaustive;
mod permute;

pub use exhaustive::{ScoredSequence, SearchStats, SequenceSearch};
pub use permute::Permutations;

use gridblast_core::{Grid, PieceSlot, Sequence};

/// Best placement sequence for the unplaced slots under default weights.
/// `None` means no order places every remaining piece.
pub fn compute_best_sequence(grid: &Grid, slots: &[PieceSlot]) -> Option<Sequence> {
    SequenceSearch::default()
        .search(grid, slots)
        .map(|found| found.sequence)
}
