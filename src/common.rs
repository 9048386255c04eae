//! Common types for the sea-battle engine: coordinates, shot outcomes and
//! board errors.

use crate::cellset::CellSetError;

/// A single grid cell address. `x` is the row index, `y` the column index.
///
/// Coordinates are plain signed integers so that neighborhood arithmetic
/// (`x - 1` on the top row) stays representable; bounds are checked by the
/// board, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight Chebyshev-distance-1 neighbors plus the cell itself.
    pub fn neighborhood(self) -> impl Iterator<Item = Coord> {
        let Coord { x, y } = self;
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| Coord::new(x + dx, y + dy)))
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot missed all vessels.
    Miss,
    /// Shot hit an undepleted vessel segment.
    Hit,
    /// Shot depleted a vessel's last segment.
    Sunk,
}

impl ShotOutcome {
    /// Turn-retention rule: a hit or sink lets the same mover act again.
    pub fn retains_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by board and generator operations.
///
/// All variants are locally recoverable: callers re-prompt, retry or restart
/// as appropriate, and a failed call never mutates board state.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell-set error (invalid size or index).
    CellSet(CellSetError),
    /// Target coordinate falls outside the grid.
    OutOfBounds,
    /// Target coordinate was already shot at.
    AlreadyShot,
    /// Vessel placement is out of bounds, overlapping, or touching
    /// another vessel's buffer zone.
    WrongPlacement,
    /// Fleet generation ran out of its placement-attempt budget.
    GenerationExhausted,
}

impl From<CellSetError> for BoardError {
    fn from(err: CellSetError) -> Self {
        BoardError::CellSet(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::CellSet(e) => write!(f, "Cell set error: {}", e),
            BoardError::OutOfBounds => write!(f, "Shot is off the board, pick another target"),
            BoardError::AlreadyShot => {
                write!(f, "That cell was already shot at, pick another target")
            }
            BoardError::WrongPlacement => write!(f, "Vessel cannot be placed there"),
            BoardError::GenerationExhausted => {
                write!(f, "Fleet generation exhausted its attempt budget")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_equality_is_structural() {
        assert_eq!(Coord::new(2, 3), Coord::new(2, 3));
        assert_ne!(Coord::new(2, 3), Coord::new(3, 2));
    }

    #[test]
    fn neighborhood_covers_the_three_by_three_block() {
        let cells: Vec<_> = Coord::new(1, 1).neighborhood().collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&Coord::new(0, 0)));
        assert!(cells.contains(&Coord::new(1, 1)));
        assert!(cells.contains(&Coord::new(2, 2)));
    }

    #[test]
    fn retention_follows_the_outcome() {
        assert!(ShotOutcome::Hit.retains_turn());
        assert!(ShotOutcome::Sunk.retains_turn());
        assert!(!ShotOutcome::Miss.retains_turn());
    }
}
