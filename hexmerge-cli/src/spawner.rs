//! Local random tile spawner
//!
//! Stand-in for the remote spawn service: picks free cells uniformly and
//! assigns 2048-style values. Deterministic under a fixed seed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

use hexmerge_core::{CubeCoord, Grid, SpawnError, Tile, TileSpawner};

/// Tiles placed when seeding an empty board
const INITIAL_SPAWN_COUNT: usize = 3;

/// Chance of a value-4 tile instead of a value-2 one
const HIGH_VALUE_CHANCE: f64 = 0.1;

pub struct RandomSpawner {
    rng: ChaCha8Rng,
}

impl RandomSpawner {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }
}

impl TileSpawner for RandomSpawner {
    fn spawn_tiles(&mut self, occupied: &[Tile], grid_radius: u32) -> Result<Vec<Tile>, SpawnError> {
        let grid = Grid::new(grid_radius);
        let taken: FxHashSet<CubeCoord> = occupied.iter().map(|tile| tile.coords).collect();
        let mut free: Vec<CubeCoord> = grid
            .cells()
            .iter()
            .copied()
            .filter(|cell| !taken.contains(cell))
            .collect();

        let count = if occupied.is_empty() {
            INITIAL_SPAWN_COUNT.min(free.len())
        } else {
            1.min(free.len())
        };

        free.shuffle(&mut self.rng);
        let tiles = free
            .into_iter()
            .take(count)
            .map(|coords| {
                let value = if self.rng.gen_bool(HIGH_VALUE_CHANCE) { 4 } else { 2 };
                Tile::new(coords, value)
            })
            .collect();
        Ok(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_empty_board() {
        let mut spawner = RandomSpawner::new(Some(7));
        let tiles = spawner.spawn_tiles(&[], 3).unwrap();
        assert_eq!(tiles.len(), INITIAL_SPAWN_COUNT);
        let grid = Grid::new(3);
        for tile in &tiles {
            assert!(grid.contains(tile.coords));
            assert!(tile.value == 2 || tile.value == 4);
        }
    }

    #[test]
    fn test_spawns_one_on_occupied_board() {
        let mut spawner = RandomSpawner::new(Some(7));
        let occupied = vec![Tile::new(CubeCoord::new(0, 0, 0), 2)];
        let tiles = spawner.spawn_tiles(&occupied, 2).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_ne!(tiles[0].coords, occupied[0].coords);
    }

    #[test]
    fn test_full_board_spawns_nothing() {
        let grid = Grid::new(2);
        let occupied: Vec<Tile> = grid
            .cells()
            .iter()
            .map(|&coords| Tile::new(coords, 2))
            .collect();
        let mut spawner = RandomSpawner::new(Some(7));
        assert!(spawner.spawn_tiles(&occupied, 2).unwrap().is_empty());
    }

    #[test]
    fn test_deterministic_under_seed() {
        let mut a = RandomSpawner::new(Some(42));
        let mut b = RandomSpawner::new(Some(42));
        assert_eq!(a.spawn_tiles(&[], 4).unwrap(), b.spawn_tiles(&[], 4).unwrap());
    }
}
