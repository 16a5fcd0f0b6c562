//! A set of board cells packed into a `u128`.
//!
//! One bit per cell of the 10×10 board. Because [`Coord`] is validated at
//! construction, every operation here is infallible. Membership is pure set
//! semantics: inserting a cell twice is a no-op.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// A fixed-capacity set of [`Coord`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// Create an empty set.
    pub fn new() -> Self {
        CellSet { bits: 0 }
    }

    /// Insert a cell. Returns `true` if it was not already present.
    pub fn insert(&mut self, cell: Coord) -> bool {
        let bit = 1u128 << cell.index();
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    /// Membership test.
    pub fn contains(&self, cell: Coord) -> bool {
        self.bits & (1u128 << cell.index()) != 0
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set holds no cells.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if every cell of `other` is also in `self`.
    pub fn is_superset(&self, other: &CellSet) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Iterator over the cells of the set, in row-major order.
    pub fn iter(&self) -> Cells {
        Cells { bits: self.bits }
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl Extend<Coord> for CellSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl IntoIterator for CellSet {
    type Item = Coord;
    type IntoIter = Cells;
    fn into_iter(self) -> Cells {
        Cells { bits: self.bits }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet ({} cells):", self.len())?;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let idx = r as u32 * BOARD_SIZE as u32 + c as u32;
                let mark = if self.bits & (1u128 << idx) != 0 {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells {
    bits: u128,
}

impl Iterator for Cells {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(Coord::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells {}
