//! The rules engine: placement legality, turn order, and outcome derivation.

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::cellset::CellSet;
use crate::common::{FireError, GameState, PlaceError, ShotOutcome};
use crate::config::{BOARD_SIZE, MIN_SHIP_LENGTH};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// One of the two players. Used purely as a selector key into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    fn idx(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "first"),
            Player::Second => write!(f, "second"),
        }
    }
}

/// Serializable copy of the full engine state, for host-level state sync.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSnapshot {
    pub fleets: [Vec<Ship>; 2],
    pub active: Player,
}

/// Core game state: two fleets and the turn pointer.
///
/// One instance per game; the engine holds no hidden statics, so concurrent
/// games each own an independent instance. Callers are expected to have both
/// players place at least one ship before firing begins; the engine does not
/// enforce that precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    fleets: [Vec<Ship>; 2],
    active: Player,
}

impl GameEngine {
    /// Create an engine with two empty fleets. The first player fires first.
    pub fn new() -> Self {
        GameEngine {
            fleets: [Vec::new(), Vec::new()],
            active: Player::First,
        }
    }

    /// The player permitted to fire on the current turn.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Immutable view of a player's fleet, in placement order.
    pub fn fleet(&self, player: Player) -> &[Ship] {
        &self.fleets[player.idx()]
    }

    /// Place a ship, reporting only acceptance.
    ///
    /// Boolean facade over [`GameEngine::try_place_ship`]; every rejection
    /// collapses to `false` with no state change.
    pub fn place_ship(
        &mut self,
        player: Player,
        length: u8,
        anchor: Coord,
        orientation: Orientation,
    ) -> bool {
        self.try_place_ship(player, length, anchor, orientation)
            .is_ok()
    }

    /// Place a ship of `length` cells extending from `anchor` in
    /// `orientation` on `player`'s board.
    ///
    /// All legality checks run before any mutation: the extended cells must
    /// fit on the board, the ship must be at least [`MIN_SHIP_LENGTH`] cells,
    /// and no cell may already be occupied by the same player's fleet. The
    /// two boards are independent, so overlap with the opponent is legal.
    /// Placement never touches the turn pointer.
    pub fn try_place_ship(
        &mut self,
        player: Player,
        length: u8,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        let cells = extend(anchor, length, orientation).ok_or(PlaceError::OutOfBounds)?;
        if length < MIN_SHIP_LENGTH {
            return Err(PlaceError::TooShort);
        }
        let candidate: CellSet = cells.iter().copied().collect();
        if !(self.fleet_footprint(player) & candidate).is_empty() {
            return Err(PlaceError::Overlap);
        }
        debug!(
            "{} placed a {}-cell ship at {} ({:?})",
            player, length, anchor, orientation
        );
        self.fleets[player.idx()].push(Ship::new(cells));
        Ok(())
    }

    /// Fire a torpedo, reporting only acceptance.
    ///
    /// Boolean facade over [`GameEngine::try_fire_torpedo`].
    pub fn fire_torpedo(&mut self, firing_player: Player, target: Coord) -> bool {
        self.try_fire_torpedo(firing_player, target).is_ok()
    }

    /// Fire at `target` on the opponent's board.
    ///
    /// Rejected (with no state change) when `firing_player` is not the
    /// active player, or when the game has already been won. An accepted
    /// shot registers a hit on the opposing ship occupying `target`, if any,
    /// and always passes the turn to the other player. Firing at an empty
    /// cell or one already hit is legal and still consumes the turn.
    pub fn try_fire_torpedo(
        &mut self,
        firing_player: Player,
        target: Coord,
    ) -> Result<ShotOutcome, FireError> {
        if firing_player != self.active {
            return Err(FireError::NotYourTurn);
        }
        if self.current_state() != GameState::Unfinished {
            return Err(FireError::GameOver);
        }
        // Per-fleet footprints are disjoint, so at most one ship can match.
        let mut outcome = ShotOutcome::Miss;
        for ship in self.fleets[firing_player.opponent().idx()].iter_mut() {
            if ship.register_hit(target) {
                outcome = if ship.is_destroyed() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                };
                break;
            }
        }
        self.active = self.active.opponent();
        debug!("{} fired at {}: {:?}", firing_player, target, outcome);
        Ok(outcome)
    }

    /// Derive the current outcome. Never cached.
    ///
    /// While either fleet is still empty the game is in its setup phase and
    /// the result is `Unfinished`, whatever state the other fleet is in.
    pub fn current_state(&self) -> GameState {
        if self.fleets.iter().any(|fleet| fleet.is_empty()) {
            return GameState::Unfinished;
        }
        if self.ships_remaining(Player::First) == 0 {
            GameState::SecondWon
        } else if self.ships_remaining(Player::Second) == 0 {
            GameState::FirstWon
        } else {
            GameState::Unfinished
        }
    }

    /// Number of the player's ships not yet destroyed. Sunk ships stay in
    /// the fleet; this only counts survivors.
    pub fn ships_remaining(&self, player: Player) -> usize {
        self.fleets[player.idx()]
            .iter()
            .filter(|ship| !ship.is_destroyed())
            .count()
    }

    /// Pick a random legal `(anchor, orientation)` for a ship of `length`
    /// cells on `player`'s board, without placing it.
    ///
    /// Rejection-samples anchors against the fleet's current footprint and
    /// gives up with `NoRoom` after a bounded number of attempts.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        player: Player,
        length: u8,
    ) -> Result<(Coord, Orientation), PlaceError> {
        if length < MIN_SHIP_LENGTH {
            return Err(PlaceError::TooShort);
        }
        if length > BOARD_SIZE {
            return Err(PlaceError::OutOfBounds);
        }
        let taken = self.fleet_footprint(player);
        for _ in 0..100 {
            let orientation = if rng.random() {
                Orientation::Row
            } else {
                Orientation::Column
            };
            let (max_row, max_col) = match orientation {
                Orientation::Row => (BOARD_SIZE - 1, BOARD_SIZE - length),
                Orientation::Column => (BOARD_SIZE - length, BOARD_SIZE - 1),
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            let anchor = Coord::new(row, col).map_err(|_| PlaceError::OutOfBounds)?;
            let cells = extend(anchor, length, orientation).ok_or(PlaceError::OutOfBounds)?;
            let candidate: CellSet = cells.into_iter().collect();
            if (taken & candidate).is_empty() {
                return Ok((anchor, orientation));
            }
        }
        Err(PlaceError::NoRoom)
    }

    /// Copy out the full state for host-level sync or saving.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            fleets: self.fleets.clone(),
            active: self.active,
        }
    }

    /// Rebuild an engine from a snapshot. The snapshot is trusted: legality
    /// was enforced when the ships were originally placed.
    pub fn from_snapshot(snapshot: EngineSnapshot) -> Self {
        GameEngine {
            fleets: snapshot.fleets,
            active: snapshot.active,
        }
    }

    fn fleet_footprint(&self, player: Player) -> CellSet {
        self.fleets[player.idx()]
            .iter()
            .flat_map(|ship| ship.cells().iter().copied())
            .collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Extend `length` cells from `anchor` in `orientation`, or `None` if any
/// cell falls off the board.
fn extend(anchor: Coord, length: u8, orientation: Orientation) -> Option<Vec<Coord>> {
    let mut cells = Vec::with_capacity(length as usize);
    for i in 0..length {
        let (row, col) = match orientation {
            Orientation::Row => (anchor.row(), anchor.col().checked_add(i)?),
            Orientation::Column => (anchor.row().checked_add(i)?, anchor.col()),
        };
        cells.push(Coord::new(row, col).ok()?);
    }
    Some(cells)
}
