//! A runtime-sized square bit set over board coordinates.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `n×n` grid
//! is packed into an unsigned integer `T`, with the side length chosen at
//! construction time so boards of different sizes can share one storage type.
//! The board keeps several of these side by side (occupancy, buffer zone,
//! shot history), so the footprint matters more than per-cell flexibility.

use core::ops::{BitAnd, BitOr};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// Errors returned by cell-set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSetError {
    /// Requested grid n*n exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Coordinate is out of bounds [0..n).
    IndexOutOfBounds { x: i32, y: i32 },
}

impl core::fmt::Display for CellSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CellSetError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: n*n={} exceeds T::BITS={}", n * n, capacity)
            }
            CellSetError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A set of cells on an `n×n` grid, stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    n: usize,
}

impl<T> CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn mask(n: usize) -> T {
        if n * n == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << (n * n)) - T::one()
        }
    }

    /// Create an empty set for an `n×n` grid.
    /// Returns `Err(SizeTooLarge)` if `n*n > T::BITS`.
    pub fn try_new(n: usize) -> Result<Self, CellSetError> {
        let capacity = mem::size_of::<T>() * 8;
        if n * n > capacity {
            Err(CellSetError::SizeTooLarge { n, capacity })
        } else {
            Ok(CellSet { bits: T::zero(), n })
        }
    }

    /// Side length of the grid this set covers.
    #[inline]
    pub fn side(&self) -> usize {
        self.n
    }

    /// Returns the number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test for `c`.
    pub fn contains(&self, c: Coord) -> Result<bool, CellSetError> {
        let idx = self.index_of(c)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Adds `c` to the set. Idempotent.
    pub fn insert(&mut self, c: Coord) -> Result<(), CellSetError> {
        let idx = self.index_of(c)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Removes `c` from the set. Idempotent.
    pub fn remove(&mut self, c: Coord) -> Result<(), CellSetError> {
        let idx = self.index_of(c)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Clears the set.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index_of(&self, c: Coord) -> Result<usize, CellSetError> {
        if c.x < 0 || c.y < 0 || c.x as usize >= self.n || c.y as usize >= self.n {
            Err(CellSetError::IndexOutOfBounds { x: c.x, y: c.y })
        } else {
            Ok(c.x as usize * self.n + c.y as usize)
        }
    }

    /// Consumes the set and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a set for an `n×n` grid from the raw integer, masking out
    /// upper bits. The caller is responsible for `n` having passed
    /// [`CellSet::try_new`].
    #[inline]
    pub fn from_raw(n: usize, raw: T) -> Self {
        CellSet {
            bits: raw & Self::mask(n),
            n,
        }
    }

    /// Iterator over the coordinates contained in the set.
    #[inline]
    pub fn iter(&self) -> Cells<'_, T> {
        Cells { set: self, idx: 0 }
    }
}

impl<T> fmt::Debug for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}> ({}×{}):", any::type_name::<T>(), self.n, self.n)?;
        for x in 0..self.n {
            for y in 0..self.n {
                let bit = if ((self.bits >> (x * self.n + y)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the coordinates of a cell set.
#[derive(Clone, Copy)]
pub struct Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T>,
    idx: usize,
}

impl<'a, T> Iterator for Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.set.n;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.set.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new((idx / n) as i32, (idx % n) as i32));
            }
        }
        None
    }
}

/// Intersection of two same-sized sets.
impl<T> BitAnd for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        CellSet::from_raw(self.n, self.bits & rhs.bits)
    }
}

/// Union of two same-sized sets.
impl<T> BitOr for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        CellSet::from_raw(self.n, self.bits | rhs.bits)
    }
}
