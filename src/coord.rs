//! Board coordinates and their human-facing `letter + number` form.

use core::fmt;
use core::str::FromStr;

use crate::common::CoordError;
use crate::config::{BOARD_SIZE, ROW_LABELS};

/// One of the 100 cells of the board.
///
/// Rows and columns are zero-based internally; the textual form renders rows
/// as the letters A–J and columns as the numbers 1–10, so `Coord::new(1, 6)`
/// displays as `"B7"`. Compared, hashed, and ordered by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate from zero-based row and column indices.
    pub fn new(row: u8, col: u8) -> Result<Self, CoordError> {
        if row >= BOARD_SIZE {
            return Err(CoordError::RowOutOfRange(row));
        }
        if col >= BOARD_SIZE {
            return Err(CoordError::ColOutOfRange(col));
        }
        Ok(Coord { row, col })
    }

    /// Zero-based row index.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Zero-based column index.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Flat cell index in `0..100`, used by [`CellSet`](crate::CellSet).
    pub(crate) fn index(self) -> u32 {
        self.row as u32 * BOARD_SIZE as u32 + self.col as u32
    }

    /// Inverse of [`Coord::index`]. `idx` must be below `BOARD_SIZE²`.
    pub(crate) fn from_index(idx: u32) -> Self {
        debug_assert!(idx < (BOARD_SIZE as u32).pow(2));
        Coord {
            row: (idx / BOARD_SIZE as u32) as u8,
            col: (idx % BOARD_SIZE as u32) as u8,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row) as char, self.col + 1)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    /// Parse the human form: a row letter A–J (either case) followed by a
    /// column number 1–10, e.g. `"B7"` or `"j10"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(CoordError::Malformed)?;
        let row = ROW_LABELS
            .find(letter.to_ascii_uppercase())
            .ok_or(CoordError::Malformed)? as u8;
        let col: u8 = chars.as_str().parse().map_err(|_| CoordError::Malformed)?;
        if col == 0 || col > BOARD_SIZE {
            return Err(CoordError::Malformed);
        }
        Coord::new(row, col - 1)
    }
}
