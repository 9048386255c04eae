//! Vessel definitions: a ship occupying a contiguous line of cells.

use crate::common::Coord;

/// Axis a vessel extends along from its origin.
///
/// `Vertical` steps the `x` (row) component, `Horizontal` the `y` (column)
/// component. Adjacency rules depend on this exact derivation, so it is kept
/// as is rather than normalized to screen-space conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// A vessel: origin cell, length, axis and remaining undamaged segments.
///
/// Occupied cells are derived from origin and axis, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    origin: Coord,
    length: u32,
    axis: Axis,
    remaining_hits: u32,
}

impl Vessel {
    /// Create a vessel with all segments intact.
    pub fn new(origin: Coord, length: u32, axis: Axis) -> Self {
        Self {
            origin,
            length,
            axis,
            remaining_hits: length,
        }
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Segments not yet hit. Monotonically non-increasing, zero exactly when
    /// the vessel is destroyed.
    pub fn remaining_hits(&self) -> u32 {
        self.remaining_hits
    }

    /// The cells this vessel occupies: length-many steps from the origin
    /// along the axis.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let Coord { x, y } = self.origin;
        (0..self.length as i32).map(move |i| match self.axis {
            Axis::Vertical => Coord::new(x + i, y),
            Axis::Horizontal => Coord::new(x, y + i),
        })
    }

    /// Whether `target` lands on one of this vessel's cells.
    pub fn is_hit_by(&self, target: Coord) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Register one hit. Floors at zero.
    pub fn record_hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    /// A sunk vessel has no segments left.
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }
}
