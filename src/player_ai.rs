use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::Coord;
use crate::player::Player;

/// Automated player firing at uniformly random in-bounds cells.
///
/// Stateless: it happily re-proposes cells that were already shot at, relying
/// on the turn controller to reject the shot and ask again.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng, _own: &Board, enemy: &Board) -> Coord {
        let size = enemy.size() as i32;
        let target = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        log::debug!("ai proposes {}", target);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn proposals_are_always_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut ai = AiPlayer::new();
        let own = Board::new(6).unwrap();
        let enemy = Board::new(6).unwrap();
        for _ in 0..200 {
            let c = ai.choose_target(&mut rng, &own, &enemy);
            assert!(!enemy.is_out_of_bounds(c));
        }
    }
}
