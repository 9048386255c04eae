#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cellset;
mod common;
mod config;
mod game;
mod generator;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod ui;
mod vessel;

pub mod prelude;

pub use board::*;
pub use cellset::{CellSet, CellSetError};
pub use common::*;
pub use config::*;
pub use game::*;
pub use generator::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use ui::*;
pub use vessel::*;
