use ndarray::Array2;

use super::*;

/// Uniform placement by rejection sampling: pick a random cell, keep it if it is not a mine yet.
///
/// Cost grows as `mines` approaches the cell count, which is fine for the preset and custom board sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: &GameConfig) -> MineLayout {
        use rand::prelude::*;

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed = 0;
        let mut attempts: u64 = 0;

        while mines_placed < config.mines {
            let coords = (
                rng.random_range(0..config.rows),
                rng.random_range(0..config.cols),
            );
            attempts += 1;
            let cell = &mut mine_mask[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        log::trace!(
            "Placed {} mines on {}x{} in {} attempts",
            mines_placed,
            config.rows,
            config.cols,
            attempts
        );
        MineLayout::from_mine_mask(mine_mask)
    }
}
