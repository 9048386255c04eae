//! Random fleet generation by bounded retry.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, MAX_PLACEMENT_ATTEMPTS};
use crate::vessel::{Axis, Vessel};

/// Produces fully-populated, rule-valid boards.
///
/// For each length in the composition a random origin and axis are sampled
/// and handed to [`Board::place_vessel`]; rejected placements are retried,
/// each retry consuming one attempt from a budget shared across the whole
/// fleet. The RNG is injected so generation is reproducible under a fixed
/// seed.
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    size: u32,
    lengths: Vec<u32>,
    max_attempts: u32,
}

impl FleetGenerator {
    pub fn new(size: u32, lengths: impl Into<Vec<u32>>, max_attempts: u32) -> Self {
        Self {
            size,
            lengths: lengths.into(),
            max_attempts,
        }
    }

    /// Generator for the default board size and fleet composition.
    pub fn standard(size: u32) -> Self {
        Self::new(size, FLEET_LENGTHS, MAX_PLACEMENT_ATTEMPTS)
    }

    /// One generation pass over a fresh board.
    ///
    /// Returns `GenerationExhausted` when the attempt budget runs out before
    /// the whole fleet is placed; the partially-filled board is discarded.
    pub fn try_generate<R: Rng>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut board = Board::new(self.size)?;
        let mut attempts = 0u32;
        for &length in &self.lengths {
            loop {
                if attempts >= self.max_attempts {
                    return Err(BoardError::GenerationExhausted);
                }
                attempts += 1;
                let origin = Coord::new(
                    rng.random_range(0..self.size as i32),
                    rng.random_range(0..self.size as i32),
                );
                let axis = if rng.random() {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                };
                match board.place_vessel(Vessel::new(origin, length, axis)) {
                    Ok(()) => break,
                    Err(BoardError::WrongPlacement) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(board)
    }

    /// Generate a board, restarting from scratch whenever a pass exhausts its
    /// budget. Loops indefinitely for a composition that cannot fit, so the
    /// composition is expected to be feasible for the board size.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Board, BoardError> {
        loop {
            match self.try_generate(rng) {
                Ok(board) => return Ok(board),
                Err(BoardError::GenerationExhausted) => {
                    log::debug!("fleet generation exhausted, restarting");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::standard(BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn chebyshev(a: Coord, b: Coord) -> i32 {
        (a.x - b.x).abs().max((a.y - b.y).abs())
    }

    fn assert_fleet_valid(board: &Board, lengths: &[u32]) {
        let total: u32 = lengths.iter().sum();
        assert_eq!(board.occupied_cells() as u32, total);
        assert_eq!(board.fleet().len(), lengths.len());
        for (i, a) in board.fleet().iter().enumerate() {
            for ca in a.cells() {
                assert!(!board.is_out_of_bounds(ca));
                for b in &board.fleet()[i + 1..] {
                    for cb in b.cells() {
                        assert!(
                            chebyshev(ca, cb) > 1,
                            "vessels touch at {} / {}",
                            ca,
                            cb
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn standard_generation_succeeds_and_is_valid() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = FleetGenerator::default().generate(&mut rng).unwrap();
        assert_fleet_valid(&board, &FLEET_LENGTHS);
        assert!(!board.is_defeated());
    }

    #[test]
    fn generation_is_reproducible_under_a_fixed_seed() {
        let gen = FleetGenerator::default();
        let a = gen.generate(&mut SmallRng::seed_from_u64(42)).unwrap();
        let b = gen.generate(&mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.fleet(), b.fleet());
    }

    #[test]
    fn infeasible_fleet_exhausts_the_budget() {
        // a length-3 vessel can never fit on a 2×2 board
        let gen = FleetGenerator::new(2, [3], 50);
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(matches!(
            gen.try_generate(&mut rng),
            Err(BoardError::GenerationExhausted)
        ));
    }

    #[test]
    fn oversized_board_is_rejected_up_front() {
        let gen = FleetGenerator::new(12, [1], 10);
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(matches!(
            gen.try_generate(&mut rng),
            Err(BoardError::CellSet(_))
        ));
    }

    proptest! {
        #[test]
        fn generated_fleets_never_touch(seed in any::<u64>()) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let board = FleetGenerator::default().generate(&mut rng).unwrap();
            assert_fleet_valid(&board, &FLEET_LENGTHS);
        }
    }
}
