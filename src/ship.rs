//! Ship state: a fixed list of occupied cells and a growing hit set.

use alloc::vec::Vec;

use crate::cellset::CellSet;
use crate::coord::Coord;

/// Orientation of a ship on the board.
///
/// `Row` extends from the anchor along increasing columns; `Column` extends
/// along increasing rows. The anchor is always the occupied cell closest to
/// A1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Row,
    Column,
}

/// A placed ship.
///
/// The occupied cells are fixed at construction; the hit set only grows.
/// Whether the ship is destroyed is derived with set semantics, so the order
/// in which cells are struck, and duplicate strikes, never matter.
///
/// `Ship` performs no placement validation of its own. Shape, length, and
/// overlap legality are the engine's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    cells: Vec<Coord>,
    hits: CellSet,
}

impl Ship {
    /// Construct a ship occupying exactly `cells`, with nothing hit yet.
    pub fn new(cells: Vec<Coord>) -> Self {
        Ship {
            cells,
            hits: CellSet::new(),
        }
    }

    /// Record a strike at `cell`.
    ///
    /// Returns `true` if the cell is one this ship occupies. Strikes on
    /// cells the ship does not occupy, and repeat strikes on the same cell,
    /// are tolerated and leave the hit set's meaning unchanged.
    pub fn register_hit(&mut self, cell: Coord) -> bool {
        if self.occupies(cell) {
            self.hits.insert(cell);
            true
        } else {
            false
        }
    }

    /// `true` once every occupied cell has been struck at least once.
    pub fn is_destroyed(&self) -> bool {
        self.cells.iter().all(|c| self.hits.contains(*c))
    }

    /// Whether `cell` is one of this ship's occupied cells.
    pub fn occupies(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// The occupied cells, in placement order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Occupancy of this ship as a cell set.
    pub fn footprint(&self) -> CellSet {
        self.cells.iter().copied().collect()
    }

    /// Number of distinct cells struck so far.
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}
