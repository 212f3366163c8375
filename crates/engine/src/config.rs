use serde::{Deserialize, Serialize};

/// Points awarded to the player for each move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRules {
    pub per_cell: u32,
    pub line_bonus: u32,
}

impl ScoreRules {
    /// One point per cell placed, plus `10 × lines²` for each clear.
    pub fn classic() -> Self {
        Self {
            per_cell: 1,
            line_bonus: 10,
        }
    }

    pub fn points(&self, cells: usize, lines: u8) -> u32 {
        let lines = lines as u32;
        cells as u32 * self.per_cell + lines * lines * self.line_bonus
    }
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_points() {
        let rules = ScoreRules::classic();
        assert_eq!(rules.points(4, 0), 4);
        assert_eq!(rules.points(2, 1), 12);
        assert_eq!(rules.points(5, 2), 45);
    }
}
