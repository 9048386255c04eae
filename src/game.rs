//! Turn sequencing: the state machine coordinating two board/player pairs.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::BoardError;
use crate::player::Player;

/// Turn-machine state. The `*Won` states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    UserTurn,
    OpponentTurn,
    UserWon,
    OpponentWon,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::UserWon | TurnState::OpponentWon)
    }
}

/// One side of the match: a player and the board it defends.
struct Side {
    board: Board,
    player: Box<dyn Player>,
}

/// The match itself.
///
/// Each call to [`Game::step`] runs one complete move for the current mover:
/// the strategy is asked for targets until one resolves (out-of-bounds and
/// repeated shots are reported back and re-asked), the outcome is applied to
/// the defending board, and the state advances. A hit or sink retains the
/// turn, a miss passes it, and defeating the opposing fleet ends the game.
pub struct Game {
    user: Side,
    opponent: Side,
    state: TurnState,
}

impl Game {
    pub fn new(
        user_board: Board,
        user: Box<dyn Player>,
        opponent_board: Board,
        opponent: Box<dyn Player>,
    ) -> Self {
        Self {
            user: Side {
                board: user_board,
                player: user,
            },
            opponent: Side {
                board: opponent_board,
                player: opponent,
            },
            state: TurnState::UserTurn,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn user_board(&self) -> &Board {
        &self.user.board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent.board
    }

    /// Run one move for the current mover and advance the state machine.
    /// A no-op in terminal states.
    pub fn step(&mut self, rng: &mut SmallRng) -> TurnState {
        match self.state {
            TurnState::UserTurn => {
                let retains = Self::perform_move(rng, &mut self.user, &mut self.opponent);
                self.state = if self.opponent.board.is_defeated() {
                    TurnState::UserWon
                } else if retains {
                    TurnState::UserTurn
                } else {
                    TurnState::OpponentTurn
                };
            }
            TurnState::OpponentTurn => {
                let retains = Self::perform_move(rng, &mut self.opponent, &mut self.user);
                self.state = if self.user.board.is_defeated() {
                    TurnState::OpponentWon
                } else if retains {
                    TurnState::OpponentTurn
                } else {
                    TurnState::UserTurn
                };
            }
            TurnState::UserWon | TurnState::OpponentWon => {}
        }
        self.state
    }

    /// Ask the mover for targets until a shot resolves, then report the
    /// outcome to both players. Returns whether the mover keeps the turn.
    fn perform_move(rng: &mut SmallRng, mover: &mut Side, defender: &mut Side) -> bool {
        loop {
            let target = mover.player.choose_target(rng, &mover.board, &defender.board);
            match defender.board.resolve_shot(target) {
                Ok(outcome) => {
                    mover.player.handle_shot_result(target, outcome);
                    defender.player.handle_opponent_shot(target, outcome);
                    return outcome.retains_turn();
                }
                Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyShot)) => {
                    log::debug!("shot at {} rejected: {}", target, err);
                    mover.player.handle_shot_error(target, &err);
                }
                // placement-phase errors cannot occur during play
                Err(err) => {
                    log::warn!("unexpected shot error at {}: {}", target, err);
                    mover.player.handle_shot_error(target, &err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Coord, ShotOutcome};
    use crate::vessel::{Axis, Vessel};
    use rand::SeedableRng;
    use std::vec::Vec;

    use std::cell::RefCell;
    use std::rc::Rc;

    /// What a scripted player saw through its notification hooks.
    #[derive(Default)]
    struct Seen {
        outcomes: Vec<ShotOutcome>,
        rejections: usize,
    }

    /// Plays back a queue of targets, recording what came of them.
    struct Scripted {
        targets: Vec<Coord>,
        next: usize,
        seen: Rc<RefCell<Seen>>,
    }

    impl Scripted {
        fn new(targets: Vec<Coord>) -> Self {
            Self {
                targets,
                next: 0,
                seen: Rc::new(RefCell::new(Seen::default())),
            }
        }

        fn seen(&self) -> Rc<RefCell<Seen>> {
            Rc::clone(&self.seen)
        }
    }

    impl Player for Scripted {
        fn choose_target(&mut self, _rng: &mut SmallRng, _own: &Board, _enemy: &Board) -> Coord {
            let c = self.targets[self.next];
            self.next += 1;
            c
        }

        fn handle_shot_result(&mut self, _target: Coord, outcome: ShotOutcome) {
            self.seen.borrow_mut().outcomes.push(outcome);
        }

        fn handle_shot_error(&mut self, _target: Coord, _err: &BoardError) {
            self.seen.borrow_mut().rejections += 1;
        }
    }

    fn board_with(vessels: &[Vessel]) -> Board {
        let mut b = Board::new(6).unwrap();
        for &v in vessels {
            b.place_vessel(v).unwrap();
        }
        b
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0)
    }

    #[test]
    fn miss_passes_the_turn() {
        let user_board = board_with(&[Vessel::new(Coord::new(0, 0), 1, Axis::Vertical)]);
        let opp_board = board_with(&[Vessel::new(Coord::new(0, 0), 1, Axis::Vertical)]);
        let user = Scripted::new(vec![Coord::new(5, 5)]);
        let opp = Scripted::new(vec![]);
        let mut game = Game::new(user_board, Box::new(user), opp_board, Box::new(opp));
        assert_eq!(game.step(&mut rng()), TurnState::OpponentTurn);
    }

    #[test]
    fn hit_retains_the_turn() {
        let user_board = board_with(&[Vessel::new(Coord::new(0, 0), 1, Axis::Vertical)]);
        let opp_board = board_with(&[Vessel::new(Coord::new(2, 2), 2, Axis::Horizontal)]);
        let user = Scripted::new(vec![Coord::new(2, 2)]);
        let opp = Scripted::new(vec![]);
        let mut game = Game::new(user_board, Box::new(user), opp_board, Box::new(opp));
        assert_eq!(game.step(&mut rng()), TurnState::UserTurn);
    }

    #[test]
    fn rejected_targets_are_re_asked_within_one_move() {
        let user_board = board_with(&[Vessel::new(Coord::new(0, 0), 1, Axis::Vertical)]);
        let opp_board = board_with(&[Vessel::new(Coord::new(2, 2), 2, Axis::Horizontal)]);
        // off the board, then a legitimate miss
        let user = Scripted::new(vec![Coord::new(6, 0), Coord::new(5, 5)]);
        let seen = user.seen();
        let opp = Scripted::new(vec![]);
        let mut game = Game::new(user_board, Box::new(user), opp_board, Box::new(opp));
        assert_eq!(game.step(&mut rng()), TurnState::OpponentTurn);
        assert_eq!(seen.borrow().rejections, 1);
        assert_eq!(seen.borrow().outcomes, vec![ShotOutcome::Miss]);
    }

    #[test]
    fn sinking_the_last_vessel_wins() {
        let user_board = board_with(&[Vessel::new(Coord::new(0, 0), 1, Axis::Vertical)]);
        let opp_board = board_with(&[Vessel::new(Coord::new(2, 2), 2, Axis::Horizontal)]);
        let user = Scripted::new(vec![Coord::new(2, 2), Coord::new(2, 3)]);
        let opp = Scripted::new(vec![]);
        let mut game = Game::new(user_board, Box::new(user), opp_board, Box::new(opp));
        assert_eq!(game.step(&mut rng()), TurnState::UserTurn);
        assert_eq!(game.step(&mut rng()), TurnState::UserWon);
        assert!(game.opponent_board().is_defeated());
    }

    #[test]
    fn opponent_can_win_too() {
        let user_board = board_with(&[Vessel::new(Coord::new(0, 0), 1, Axis::Vertical)]);
        let opp_board = board_with(&[Vessel::new(Coord::new(2, 2), 2, Axis::Horizontal)]);
        // user misses, opponent sinks the single-cell fleet
        let user = Scripted::new(vec![Coord::new(5, 5)]);
        let opp = Scripted::new(vec![Coord::new(0, 0)]);
        let mut game = Game::new(user_board, Box::new(user), opp_board, Box::new(opp));
        assert_eq!(game.step(&mut rng()), TurnState::OpponentTurn);
        assert_eq!(game.step(&mut rng()), TurnState::OpponentWon);
    }

    #[test]
    fn terminal_states_have_no_outgoing_transitions() {
        let user_board = board_with(&[Vessel::new(Coord::new(0, 0), 1, Axis::Vertical)]);
        let opp_board = board_with(&[Vessel::new(Coord::new(2, 2), 1, Axis::Horizontal)]);
        let user = Scripted::new(vec![Coord::new(2, 2)]);
        let opp = Scripted::new(vec![]);
        let mut game = Game::new(user_board, Box::new(user), opp_board, Box::new(opp));
        assert_eq!(game.step(&mut rng()), TurnState::UserWon);
        // stepping a finished game changes nothing and asks nobody
        assert_eq!(game.step(&mut rng()), TurnState::UserWon);
    }

    #[test]
    fn ai_versus_ai_always_finishes() {
        use crate::generator::FleetGenerator;
        use crate::player_ai::AiPlayer;

        let gen = FleetGenerator::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let user_board = gen.generate(&mut rng).unwrap();
        let opp_board = gen.generate(&mut rng).unwrap();
        let mut game = Game::new(
            user_board,
            Box::new(AiPlayer::new()),
            opp_board,
            Box::new(AiPlayer::new()),
        );
        while !game.state().is_terminal() {
            game.step(&mut rng);
        }
        assert!(game.user_board().is_defeated() || game.opponent_board().is_defeated());
    }
}
