//! Game board state: fleet, placement buffer, shot history.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::cellset::CellSet;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::vessel::Vessel;

/// Cell-set type backing the board. `u128` storage caps the side length at
/// [`crate::config::MAX_BOARD_SIZE`].
type CS = CellSet<u128>;

/// Classification of a single cell, as exposed to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// An intact vessel segment. Reported as [`Cell::Empty`] on hidden boards.
    Occupied,
    /// A hit segment of a still-floating vessel.
    Hit,
    /// A segment of a sunk vessel.
    Destroyed,
    /// A recorded miss, including the revealed contour of sunk vessels.
    Miss,
}

/// One participant's grid: the fleet and everything that has happened to it.
///
/// The placement-buffer set and the shot-history set are deliberately
/// distinct. The buffer only ever vetoes placements during generation; shots
/// are checked against the history alone, so a buffered-but-unshot cell is a
/// perfectly legitimate target in play.
#[derive(Debug)]
pub struct Board {
    size: u32,
    fleet: Vec<Vessel>,
    occupied: CS,
    buffer: CS,
    shots: CS,
    hits: CS,
    misses: CS,
    sunk_count: usize,
    hidden: bool,
}

impl Board {
    /// Create an empty board. Fails with `CellSet(SizeTooLarge)` when `size`
    /// exceeds the backing storage.
    pub fn new(size: u32) -> Result<Self, BoardError> {
        let empty = CS::try_new(size as usize)?;
        Ok(Board {
            size,
            fleet: Vec::new(),
            occupied: empty,
            buffer: empty,
            shots: empty,
            hits: empty,
            misses: empty,
            sunk_count: 0,
            hidden: false,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// The fleet in placement order.
    pub fn fleet(&self) -> &[Vessel] {
        &self.fleet
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Number of cells covered by the fleet.
    pub fn occupied_cells(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Presentation hint: whether intact segments are masked in [`Board::cell`].
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// True iff any axis of `c` falls outside `[0, size)`.
    pub fn is_out_of_bounds(&self, c: Coord) -> bool {
        c.x < 0 || c.y < 0 || c.x >= self.size as i32 || c.y >= self.size as i32
    }

    /// Place a vessel, enforcing bounds and the no-touching rule.
    ///
    /// Fails with `WrongPlacement` when any cell is out of bounds, occupied,
    /// or inside another vessel's buffer zone; a failed call leaves the board
    /// untouched. On success every in-bounds 8-connected neighbor of every
    /// occupied cell joins the buffer set (idempotently).
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        let blocked = self.occupied | self.buffer;
        for c in vessel.cells() {
            if self.is_out_of_bounds(c) || blocked.contains(c)? {
                return Err(BoardError::WrongPlacement);
            }
        }
        for c in vessel.cells() {
            self.occupied.insert(c)?;
            for nb in c.neighborhood() {
                if !self.is_out_of_bounds(nb) {
                    self.buffer.insert(nb)?;
                }
            }
        }
        self.fleet.push(vessel);
        Ok(())
    }

    /// Resolve a shot at `target`, recording it in the shot history.
    ///
    /// Fails with `OutOfBounds` or `AlreadyShot` without touching any state.
    /// On a sink, the sunk vessel's whole contour is flood-marked as
    /// pre-resolved misses: those cells enter the shot history, so they can
    /// never be legitimately targeted afterwards.
    pub fn resolve_shot(&mut self, target: Coord) -> Result<ShotOutcome, BoardError> {
        if self.is_out_of_bounds(target) {
            return Err(BoardError::OutOfBounds);
        }
        if self.shots.contains(target)? {
            return Err(BoardError::AlreadyShot);
        }
        self.shots.insert(target)?;

        if let Some(idx) = self.fleet.iter().position(|v| v.is_hit_by(target)) {
            self.fleet[idx].record_hit();
            self.hits.insert(target)?;
            if self.fleet[idx].is_sunk() {
                self.sunk_count += 1;
                self.reveal_contour(idx)?;
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.misses.insert(target)?;
        Ok(ShotOutcome::Miss)
    }

    /// Defeated iff every vessel in the fleet is sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk_count == self.fleet.len()
    }

    /// Classification of `c` for rendering. Hidden boards report intact
    /// segments as empty water.
    pub fn cell(&self, c: Coord) -> Result<Cell, BoardError> {
        if self.is_out_of_bounds(c) {
            return Err(BoardError::OutOfBounds);
        }
        if self.hits.contains(c)? {
            let destroyed = self.fleet.iter().any(|v| v.is_sunk() && v.is_hit_by(c));
            return Ok(if destroyed { Cell::Destroyed } else { Cell::Hit });
        }
        if self.misses.contains(c)? {
            return Ok(Cell::Miss);
        }
        if self.occupied.contains(c)? && !self.hidden {
            return Ok(Cell::Occupied);
        }
        Ok(Cell::Empty)
    }

    /// Mark the sunk vessel's neighborhood as implicit misses.
    fn reveal_contour(&mut self, idx: usize) -> Result<(), BoardError> {
        let vessel = self.fleet[idx];
        for c in vessel.cells() {
            for nb in c.neighborhood() {
                if self.is_out_of_bounds(nb) || self.shots.contains(nb)? {
                    continue;
                }
                self.shots.insert(nb)?;
                self.misses.insert(nb)?;
            }
        }
        Ok(())
    }
}
