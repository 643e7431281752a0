//! Shot resolution: hit/miss, sinking by connectivity, and the reveal ring.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::{debug, info};

use crate::board::{Board, BB};
use crate::common::{Coord, EngineError, ShotOutcome, Side};

/// Everything that changed as the result of one shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    /// Cell that was fired at.
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// Every cell whose state changed: the target first, then any ring
    /// cells revealed around a sunk ship.
    pub touched: Vec<Coord>,
    /// Set when this shot sank the last ship on the board.
    pub winner: Option<Side>,
}

/// Fire at `(row, col)` on `board`.
///
/// Shooting an already-hit cell returns `AlreadyShot` and changes nothing.
pub fn resolve_shot(board: &mut Board, row: usize, col: usize) -> Result<ShotReport, EngineError> {
    let cell = board.cell_at(row, col)?;
    if cell.hit {
        return Err(EngineError::AlreadyShot { row, col });
    }
    board.mark_hit(row, col)?;
    let mut touched = Vec::from([(row, col)]);

    let outcome = match cell.ship {
        None => ShotOutcome::Miss,
        Some(kind) => {
            let ship = ship_component(board, (row, col));
            if ship.iter().all(|&(r, c)| board.is_hit(r, c)) {
                touched.extend(reveal_ring(board, &ship)?);
                ShotOutcome::Sunk(kind)
            } else {
                ShotOutcome::Hit
            }
        }
    };

    let winner = if outcome.is_hit() && board.all_sunk() {
        let winner = board.owner().opponent();
        info!("{:?} fleet destroyed, {} wins", board.owner(), winner);
        Some(winner)
    } else {
        None
    };

    debug!(
        "shot at {:?} on {:?} board: {:?}",
        (row, col),
        board.owner(),
        outcome
    );
    Ok(ShotReport {
        target: (row, col),
        outcome,
        touched,
        winner,
    })
}

/// Cells of the ship containing `start`, found by 4-connected flood fill
/// over occupied cells. Returned in visit order (breadth first, neighbours
/// up, down, left, right). Empty if `start` holds no ship.
pub fn ship_component(board: &Board, start: Coord) -> Vec<Coord> {
    let mut cells = Vec::new();
    if !board.is_occupied(start.0, start.1) {
        return cells;
    }
    let mut visited = BB::new();
    let mut queue = VecDeque::from([start]);
    let _ = visited.set(start.0, start.1);

    while let Some((r, c)) = queue.pop_front() {
        cells.push((r, c));
        for (nr, nc) in Board::neighbors4(r, c) {
            if board.is_occupied(nr, nc) && !visited.contains(nr, nc) {
                let _ = visited.set(nr, nc);
                queue.push_back((nr, nc));
            }
        }
    }
    cells
}

/// Mark every unhit cell around a sunk ship as hit, returning them.
fn reveal_ring(board: &mut Board, ship: &[Coord]) -> Result<Vec<Coord>, EngineError> {
    let hull = BB::from_cells(ship.iter().copied())?;
    let mut revealed = Vec::new();
    for &(r, c) in ship {
        for (nr, nc) in Board::neighbors8(r, c) {
            if !hull.contains(nr, nc) && board.mark_hit(nr, nc)? {
                revealed.push((nr, nc));
            }
        }
    }
    Ok(revealed)
}
