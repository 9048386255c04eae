//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Axis, Board, BoardError, Cell, Coord, FleetGenerator, Game, Player, ShotOutcome,
    TurnState, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{coord_label, init_logging, print_match_view, render_board, CliPlayer};
