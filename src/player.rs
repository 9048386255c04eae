use crate::board::Board;
use crate::common::{BoardError, Coord, ShotOutcome};
use rand::rngs::SmallRng;

/// Strategy capability implemented by the different player types.
///
/// The turn controller depends only on this trait, never on a concrete
/// variant. Producing a target is the single required operation; the
/// notification hooks default to no-ops.
pub trait Player {
    /// Choose the next target on the enemy board.
    ///
    /// The own board is passed read-only so strategies can consult their own
    /// state; neither board is ever mutated through this call. Already-shot
    /// proposals are legal here and rejected downstream, after which the
    /// strategy is simply asked again.
    fn choose_target(&mut self, rng: &mut SmallRng, own: &Board, enemy: &Board) -> Coord;

    /// Inform the player of the outcome of its own shot.
    fn handle_shot_result(&mut self, _target: Coord, _outcome: ShotOutcome) {}

    /// Inform the player that its proposed target was rejected.
    fn handle_shot_error(&mut self, _target: Coord, _err: &BoardError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coord, _outcome: ShotOutcome) {}
}
