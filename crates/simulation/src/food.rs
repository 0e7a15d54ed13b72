//! Uniform food placement by rejection sampling.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cell::Cell;
use crate::Grid;

/// Seeded sampler for food cells. One per session so replays with the
/// same seed place food identically.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: SmallRng,
    seed: u64,
}

impl FoodPlacer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample uniformly until a cell outside `occupied` turns up.
    ///
    /// Returns `None` when every grid cell is occupied, instead of
    /// sampling forever. `occupied` is expected to hold in-bounds cells only.
    pub fn place(&mut self, occupied: &HashSet<Cell>, grid: &Grid) -> Option<Cell> {
        if occupied.len() >= grid.cell_count() {
            return None;
        }
        let w = grid.width as i32;
        let h = grid.height as i32;
        loop {
            let candidate = Cell::new(self.rng.gen_range(0..w), self.rng.gen_range(0..h));
            if !occupied.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn full_grid_yields_none() {
        let grid = Grid::new(3, 2);
        let occupied: HashSet<Cell> = grid.cells().collect();
        let mut placer = FoodPlacer::new(7);
        assert_eq!(placer.place(&occupied, &grid), None);
    }

    #[test]
    fn single_free_cell_is_found() {
        let grid = Grid::new(4, 4);
        let free = Cell::new(2, 3);
        let occupied: HashSet<Cell> = grid.cells().filter(|&c| c != free).collect();
        let mut placer = FoodPlacer::new(99);
        assert_eq!(placer.place(&occupied, &grid), Some(free));
    }

    #[test]
    fn same_seed_same_sequence() {
        let grid = Grid::new(30, 24);
        let occupied = HashSet::new();
        let mut a = FoodPlacer::new(1234);
        let mut b = FoodPlacer::new(1234);
        for _ in 0..50 {
            assert_eq!(a.place(&occupied, &grid), b.place(&occupied, &grid));
        }
        assert_eq!(a.seed(), 1234);
    }

    proptest! {
        #[test]
        fn prop_placement_avoids_occupied_and_stays_in_bounds(
            seed in any::<u64>(),
            width in 2usize..12,
            height in 2usize..12,
            mask in proptest::collection::vec(any::<bool>(), 144),
        ) {
            let grid = Grid::new(width, height);
            let mut occupied: HashSet<Cell> = grid
                .cells()
                .zip(mask.iter())
                .filter(|(_, &taken)| taken)
                .map(|(c, _)| c)
                .collect();
            // Keep at least one cell free.
            occupied.remove(&Cell::new(0, 0));

            let mut placer = FoodPlacer::new(seed);
            let food = placer.place(&occupied, &grid);
            prop_assert!(food.is_some());
            let food = food.unwrap();
            prop_assert!(grid.in_bounds(food));
            prop_assert!(!occupied.contains(&food));
        }
    }
}
