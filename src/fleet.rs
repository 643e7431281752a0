//! Fleet placement: validation, manual commits and randomized deployment.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::board::{Board, BB};
use crate::common::{Coord, EngineError, PlacementError};
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS, MAX_PLACEMENT_RESTARTS};
use crate::ship::{Orientation, Placement, ShipKind};

/// Validate a placement against the board, returning the run mask.
///
/// Checks, in order: the run stays on the grid, it covers no ship, and no
/// cell around it (diagonals included) holds a ship.
pub fn check_placement(board: &Board, placement: &Placement) -> Result<BB, PlacementError> {
    let mask = placement.mask()?;
    let ships = board.ship_map();
    if mask.intersects(&ships) {
        return Err(PlacementError::Overlaps);
    }
    if mask.halo().intersects(&ships) {
        return Err(PlacementError::Touches);
    }
    Ok(mask)
}

/// `true` if `kind` can be laid at `anchor` with `orientation`.
pub fn can_place(board: &Board, anchor: Coord, kind: ShipKind, orientation: Orientation) -> bool {
    check_placement(board, &Placement::new(kind, anchor, orientation)).is_ok()
}

/// Validate and commit a placement. On error the board is untouched.
///
/// Returns the cells now occupied by the new ship.
pub fn place(
    board: &mut Board,
    anchor: Coord,
    kind: ShipKind,
    orientation: Orientation,
) -> Result<Vec<Coord>, EngineError> {
    let placement = Placement::new(kind, anchor, orientation);
    let mask = check_placement(board, &placement)?;
    board.commit(placement, mask);
    debug!(
        "{:?} board: placed {} at {:?} {:?}",
        board.owner(),
        kind.name(),
        anchor,
        orientation
    );
    Ok(mask.iter_set_bits().collect())
}

/// Retry limits for randomized fleet deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementBudget {
    /// Random anchors tried per ship before the fleet attempt is abandoned.
    pub attempts: usize,
    /// Full-board restarts before giving up.
    pub restarts: usize,
}

impl Default for PlacementBudget {
    fn default() -> Self {
        Self {
            attempts: MAX_PLACEMENT_ATTEMPTS,
            restarts: MAX_PLACEMENT_RESTARTS,
        }
    }
}

/// Randomly deploy the whole fleet onto `board`, replacing any ships on it.
///
/// Each ship gets up to [`MAX_PLACEMENT_ATTEMPTS`] random anchors drawn
/// from unoccupied cells. If one runs out, the board is cleared and the
/// fleet starts over, at most [`MAX_PLACEMENT_RESTARTS`] times. On failure
/// the board is restored to what it held before the call.
pub fn auto_place_fleet<R: Rng>(board: &mut Board, rng: &mut R) -> Result<(), EngineError> {
    auto_place_fleet_within(board, rng, PlacementBudget::default())
}

/// [`auto_place_fleet`] with explicit retry limits.
pub fn auto_place_fleet_within<R: Rng>(
    board: &mut Board,
    rng: &mut R,
    budget: PlacementBudget,
) -> Result<(), EngineError> {
    let before = board.clone();
    for attempt in 1..=budget.restarts {
        board.reset();
        if try_place_fleet(board, rng, budget.attempts) {
            debug!("{:?} fleet deployed on attempt {}", board.owner(), attempt);
            return Ok(());
        }
        debug!("{:?} fleet attempt {} cornered, restarting", board.owner(), attempt);
    }
    *board = before;
    warn!(
        "{:?} fleet placement exhausted after {} restarts",
        board.owner(),
        budget.restarts
    );
    Err(EngineError::PlacementExhausted {
        restarts: budget.restarts,
    })
}

fn try_place_fleet<R: Rng>(board: &mut Board, rng: &mut R, attempts: usize) -> bool {
    for (kind, count) in FLEET {
        for _ in 0..count {
            if !try_place_ship(board, kind, rng, attempts) {
                return false;
            }
        }
    }
    true
}

fn try_place_ship<R: Rng>(
    board: &mut Board,
    kind: ShipKind,
    rng: &mut R,
    attempts: usize,
) -> bool {
    for _ in 0..attempts {
        let free: Vec<Coord> = (!board.ship_map()).iter_set_bits().collect();
        if free.is_empty() {
            return false;
        }
        let anchor = free[rng.random_range(0..free.len())];
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let placement = Placement::new(kind, anchor, orientation);
        if let Ok(mask) = check_placement(board, &placement) {
            board.commit(placement, mask);
            return true;
        }
    }
    false
}

/// Ships of each kind still to be placed, indexed like [`ShipKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetTally {
    remaining: [usize; 4],
}

impl FleetTally {
    /// A full manifest with nothing placed yet.
    pub fn full() -> Self {
        let mut remaining = [0; 4];
        for (kind, count) in FLEET {
            remaining[kind.index()] = count;
        }
        Self { remaining }
    }

    /// A tally with every ship placed.
    pub fn empty() -> Self {
        Self { remaining: [0; 4] }
    }

    pub fn remaining(&self, kind: ShipKind) -> usize {
        self.remaining[kind.index()]
    }

    /// Largest kind that still has ships to place.
    pub fn current(&self) -> Option<ShipKind> {
        ShipKind::ALL
            .into_iter()
            .find(|k| self.remaining[k.index()] > 0)
    }

    pub fn is_complete(&self) -> bool {
        self.current().is_none()
    }

    /// Record one ship of `kind` as placed.
    pub fn take(&mut self, kind: ShipKind) {
        let slot = &mut self.remaining[kind.index()];
        *slot = slot.saturating_sub(1);
    }
}
