//! gridblast eval crate - heuristics for board evaluation.

use gridblast_core::Grid;
use serde::{Deserialize, Serialize};

/// Every column except the rightmost; masks out row wrap-around on a shift.
const NOT_LAST_COLUMN: u64 = !(Grid::COLUMN_MASK << (Grid::WIDTH - 1));

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Multiplies `lines²`, both for move rewards and in the evaluation.
    pub lines_cleared: i64,
    pub filled_cells: i64,
    pub clustering: i64,
    /// Flat score for an empty grid; replaces every other term.
    pub all_clear_bonus: i64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            lines_cleared: 2000,
            filled_cells: -10,
            clustering: 20,
            all_clear_bonus: 10000,
        }
    }
}

impl EvalWeights {
    /// `lines_cleared × lines²`.
    #[inline]
    pub fn line_reward(&self, lines: u8) -> i64 {
        let lines = lines as i64;
        self.lines_cleared * lines * lines
    }
}

pub fn evaluate(grid: &Grid, weights: &EvalWeights) -> i64 {
    evaluate_with_clear(grid, 0, weights)
}

pub fn evaluate_with_clear(grid: &Grid, lines: u8, weights: &EvalWeights) -> i64 {
    let filled = count_filled(grid);
    if filled == 0 {
        return weights.all_clear_bonus;
    }

    let mut score = weights.line_reward(lines);
    score += filled as i64 * weights.filled_cells;
    score += cluster_score(grid) as i64 * weights.clustering;
    score
}

#[inline]
pub fn count_filled(grid: &Grid) -> u32 {
    grid.filled_count()
}

/// Sum over filled cells of their filled orthogonal neighbours.
///
/// Each adjacent filled pair is seen from both of its cells, so the result
/// is twice the number of horizontal plus vertical filled pairs.
pub fn cluster_score(grid: &Grid) -> u32 {
    let bits = grid.bits();
    let horizontal = (bits & (bits >> 1) & NOT_LAST_COLUMN).count_ones();
    let vertical = (bits & (bits >> Grid::WIDTH)).count_ones();
    2 * (horizontal + vertical)
}
