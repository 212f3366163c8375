//! Random piece dealing - catalogue shape plus 0-3 clockwise turns.

use gridblast_core::{PieceSlot, Shape, ROUND_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Dealer {
    catalogue: Vec<Shape>,
    rng: StdRng,
}

impl Dealer {
    /// Reproducible dealer.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            catalogue: Shape::catalogue(),
            rng,
        }
    }

    pub fn next_shape(&mut self) -> Shape {
        let base = &self.catalogue[self.rng.random_range(0..self.catalogue.len())];
        let turns = self.rng.random_range(0..4u8);
        base.rotated(turns)
    }

    pub fn deal_round(&mut self) -> [PieceSlot; ROUND_SIZE] {
        let slots = std::array::from_fn(|_| PieceSlot::new(self.next_shape()));
        log::debug!(
            "dealt round: {:?}",
            slots.iter().map(|s: &PieceSlot| s.shape.cells()).collect::<Vec<_>>()
        );
        slots
    }
}
