use gridblast_core::{unplaced_indices, Grid, Move, PieceSlot, Sequence};
use gridblast_engine::{apply_move, generate_placements};
use gridblast_eval::{evaluate, EvalWeights};

use crate::permute::Permutations;

/// Best sequence found for a position, with the score that selected it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredSequence {
    pub sequence: Sequence,
    pub score: i64,
}

/// Counters for one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub permutations: u32,
    /// Placements applied, across all depths.
    pub nodes: u64,
    /// Full orders reached and evaluated.
    pub leaves: u64,
    /// Depths where no placement led to a complete sequence.
    pub dead_ends: u64,
}

/// Exhaustive search over every placement order and every placement.
///
/// Ties are broken deterministically: permutations are tried in
/// lexicographic order of slot index, anchors in row-major order, and a
/// candidate only replaces the current best when it scores strictly higher.
pub struct SequenceSearch {
    pub weights: EvalWeights,
}

impl SequenceSearch {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// Best sequence for the unplaced slots, or `None` when no order places
    /// every piece. With nothing left to place the result is the empty
    /// sequence scored by the evaluator.
    pub fn search(&self, grid: &Grid, slots: &[PieceSlot]) -> Option<ScoredSequence> {
        self.search_with_stats(grid, slots).0
    }

    pub fn search_with_stats(
        &self,
        grid: &Grid,
        slots: &[PieceSlot],
    ) -> (Option<ScoredSequence>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut best: Option<ScoredSequence> = None;

        for order in Permutations::new(unplaced_indices(slots)) {
            stats.permutations += 1;
            let result = self.best_continuation(grid, slots, &order, &mut stats);
            log::trace!(
                "order {:?}: {:?}",
                order,
                result.as_ref().map(|r| r.score)
            );

            if let Some(candidate) = result {
                if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                    best = Some(candidate);
                }
            }
        }

        match &best {
            Some(found) => log::debug!(
                "best order {:?} score {} ({} permutations, {} nodes, {} leaves)",
                found.sequence.order(),
                found.score,
                stats.permutations,
                stats.nodes,
                stats.leaves
            ),
            None => log::debug!(
                "no complete sequence ({} permutations, {} nodes, {} dead ends)",
                stats.permutations,
                stats.nodes,
                stats.dead_ends
            ),
        }

        (best, stats)
    }

    /// Best sequence that places the slots in exactly this order.
    pub fn best_for_order(
        &self,
        grid: &Grid,
        slots: &[PieceSlot],
        order: &[usize],
    ) -> Option<ScoredSequence> {
        let mut stats = SearchStats::default();
        self.best_continuation(grid, slots, order, &mut stats)
    }

    /// Depth-first over `order`. Each placement is applied to its own grid
    /// copy; a leaf scores the residual board with zero lines because every
    /// clear on the path was already rewarded when its move was applied.
    fn best_continuation(
        &self,
        grid: &Grid,
        slots: &[PieceSlot],
        order: &[usize],
        stats: &mut SearchStats,
    ) -> Option<ScoredSequence> {
        let Some((&piece, rest)) = order.split_first() else {
            stats.leaves += 1;
            return Some(ScoredSequence {
                sequence: Sequence::new(),
                score: evaluate(grid, &self.weights),
            });
        };

        let shape = &slots.get(piece)?.shape;
        let mut best: Option<ScoredSequence> = None;

        for placement in generate_placements(grid, shape) {
            stats.nodes += 1;
            let (next, lines) = apply_move(grid, shape, placement);
            let Some(mut continuation) = self.best_continuation(&next, slots, rest, stats) else {
                continue;
            };

            let total = self.weights.line_reward(lines) + continuation.score;
            if best.as_ref().map_or(true, |b| total > b.score) {
                continuation.sequence.prepend(Move::at(piece, placement));
                continuation.score = total;
                best = Some(continuation);
            }
        }

        if best.is_none() {
            stats.dead_ends += 1;
        }
        best
    }
}

impl Default for SequenceSearch {
    fn default() -> Self {
        Self::new(EvalWeights::default())
    }
}
