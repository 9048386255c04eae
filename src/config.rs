/// Default board side length.
pub const BOARD_SIZE: u32 = 6;

/// Largest side length the `u128`-backed cell sets can hold (11*11 = 121 bits).
pub const MAX_BOARD_SIZE: u32 = 11;

/// Default fleet composition, in placement order.
pub const FLEET_LENGTHS: [u32; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement-attempt budget shared across a whole fleet.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 2000;
