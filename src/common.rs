//! Common types: coordinates, sides, shot outcomes and engine errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::game::Phase;
use crate::ship::ShipKind;

/// A `(row, col)` cell position.
pub type Coord = (usize, usize);

/// The two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Miss,
    /// Hit a ship segment that still has unhit cells.
    Hit,
    /// Hit the last intact segment of a ship.
    Sunk(ShipKind),
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Part of the run leaves the grid.
    OutOfBounds,
    /// The run covers an occupied cell.
    Overlaps,
    /// The run is 8-adjacent to another ship.
    Touches,
    /// A different kind is awaiting placement.
    NotAwaited { expected: ShipKind },
    /// Every ship of the fleet is already placed.
    FleetComplete,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship would leave the grid"),
            PlacementError::Overlaps => write!(f, "ship overlaps another ship"),
            PlacementError::Touches => write!(f, "ship touches another ship"),
            PlacementError::NotAwaited { expected } => {
                write!(f, "expected a {} next", expected.name())
            }
            PlacementError::FleetComplete => write!(f, "fleet is already complete"),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Placement rejected; the board is unchanged.
    InvalidPlacement(PlacementError),
    /// Cell was already shot; the board is unchanged.
    AlreadyShot { row: usize, col: usize },
    /// The session has ended; only `restart` is accepted.
    GameOver,
    /// Random fleet placement failed after every restart.
    PlacementExhausted { restarts: usize },
    /// Operation is not valid in the current phase.
    OutOfPhase(Phase),
}

impl From<BitBoardError> for EngineError {
    fn from(err: BitBoardError) -> Self {
        let BitBoardError::IndexOutOfBounds { row, col } = err;
        EngineError::OutOfBounds { row, col }
    }
}

impl From<PlacementError> for EngineError {
    fn from(err: PlacementError) -> Self {
        EngineError::InvalidPlacement(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
            EngineError::InvalidPlacement(reason) => write!(f, "invalid placement: {}", reason),
            EngineError::AlreadyShot { row, col } => {
                write!(f, "cell ({}, {}) was already shot", row, col)
            }
            EngineError::GameOver => write!(f, "game is over"),
            EngineError::PlacementExhausted { restarts } => {
                write!(f, "unable to place fleet after {} attempts", restarts)
            }
            EngineError::OutOfPhase(phase) => write!(f, "not allowed during {:?}", phase),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
