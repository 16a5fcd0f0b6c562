//! Common result and error types for the rules engine.

/// Result of an accepted torpedo shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The target cell was not occupied by any opposing ship.
    Miss,
    /// An opposing ship occupies the cell and still has unhit cells.
    Hit,
    /// The shot struck the last unhit cell of an opposing ship.
    Sunk,
}

/// Outcome of the game as derived from the two fleets.
///
/// `Unfinished` covers both the setup phase (a fleet is still empty) and
/// ordinary play. The engine never caches this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    Unfinished,
    FirstWon,
    SecondWon,
}

/// Errors returned when constructing or parsing a [`Coord`](crate::Coord).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Row index is outside `0..BOARD_SIZE`.
    RowOutOfRange(u8),
    /// Column index is outside `0..BOARD_SIZE`.
    ColOutOfRange(u8),
    /// Text did not match the `letter + number` form (e.g. "B7").
    Malformed,
}

/// Errors returned by ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Some extended cell falls off the board.
    OutOfBounds,
    /// Ship is shorter than the minimum length.
    TooShort,
    /// Some extended cell is already occupied by the same player's fleet.
    Overlap,
    /// Random placement gave up before finding a legal spot.
    NoRoom,
}

/// Errors returned by firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireError {
    /// The firing player is not the active player.
    NotYourTurn,
    /// A player has already won; no further shots are accepted.
    GameOver,
}

impl core::fmt::Display for CoordError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoordError::RowOutOfRange(r) => write!(f, "row index {} is off the board", r),
            CoordError::ColOutOfRange(c) => write!(f, "column index {} is off the board", c),
            CoordError::Malformed => write!(f, "coordinate text is malformed"),
        }
    }
}

impl core::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlaceError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlaceError::TooShort => write!(f, "ship is shorter than the minimum length"),
            PlaceError::Overlap => write!(f, "ship placement overlaps another ship"),
            PlaceError::NoRoom => write!(f, "unable to find room for the ship"),
        }
    }
}

impl core::fmt::Display for FireError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FireError::NotYourTurn => write!(f, "it is not this player's turn to fire"),
            FireError::GameOver => write!(f, "the game has already been won"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
#[cfg(feature = "std")]
impl std::error::Error for PlaceError {}
#[cfg(feature = "std")]
impl std::error::Error for FireError {}
