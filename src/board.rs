//! A player's grid: ship occupancy, shot state and committed placements.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{Coord, EngineError, Side};
use crate::config::BOARD_SIZE;
use crate::ship::{Placement, ShipKind};

pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const GRID: usize = BOARD_SIZE as usize;

/// Snapshot of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Kind of ship occupying the cell, if any.
    pub ship: Option<ShipKind>,
    /// Whether the cell has been shot or auto-revealed. Never reverts.
    pub hit: bool,
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        self.ship.is_some()
    }
}

/// Ship and shot state of one side's N×N grid.
///
/// Mutation goes through [`crate::fleet`] and [`crate::shot`]; the board
/// itself only answers queries.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    owner: Side,
    kinds: [[Option<ShipKind>; GRID]; GRID],
    ship_map: BB,
    shots: BB,
    placements: Vec<Placement>,
}

impl Board {
    /// Create an empty board belonging to `owner`.
    pub fn new(owner: Side) -> Self {
        Board {
            owner,
            kinds: [[None; GRID]; GRID],
            ship_map: BB::new(),
            shots: BB::new(),
            placements: Vec::new(),
        }
    }

    /// Side whose fleet sits on this board.
    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Grid side length.
    pub const fn size() -> usize {
        GRID
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < GRID && col < GRID
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let hit = self.shots.get(row, col)?;
        Ok(Cell {
            row,
            col,
            ship: self.kinds[row][col],
            hit,
        })
    }

    /// `true` if a ship segment is present, hit or not.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.ship_map.contains(row, col)
    }

    /// `true` if the cell has been shot or revealed.
    pub fn is_hit(&self, row: usize, col: usize) -> bool {
        self.shots.contains(row, col)
    }

    /// In-bounds orthogonal neighbours in up, down, left, right order.
    pub fn neighbors4(row: usize, col: usize) -> impl Iterator<Item = Coord> {
        const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| offset(row, col, dr, dc))
    }

    /// In-bounds orthogonal and diagonal neighbours, row-major.
    pub fn neighbors8(row: usize, col: usize) -> impl Iterator<Item = Coord> {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| offset(row, col, dr, dc))
    }

    /// Occupancy mask of every ship segment.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Mask of every shot or revealed cell.
    pub fn shots(&self) -> BB {
        self.shots
    }

    /// Placements committed so far, in order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// `true` when every occupied cell has been hit.
    pub fn all_sunk(&self) -> bool {
        (self.ship_map & !self.shots).is_empty()
    }

    /// Iterator over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..GRID).flat_map(move |row| {
            (0..GRID).map(move |col| Cell {
                row,
                col,
                ship: self.kinds[row][col],
                hit: self.shots.contains(row, col),
            })
        })
    }

    /// Clear ships and shots, keeping the owner.
    pub fn reset(&mut self) {
        *self = Board::new(self.owner);
    }

    /// Write an already-validated placement onto the grid.
    pub(crate) fn commit(&mut self, placement: Placement, mask: BB) {
        for (r, c) in mask.iter_set_bits() {
            self.kinds[r][c] = Some(placement.kind);
        }
        self.ship_map = self.ship_map | mask;
        self.placements.push(placement);
    }

    /// Mark a cell hit. Returns `false` if it already was.
    pub(crate) fn mark_hit(&mut self, row: usize, col: usize) -> Result<bool, EngineError> {
        if self.shots.get(row, col)? {
            return Ok(false);
        }
        self.shots.set(row, col)?;
        Ok(true)
    }
}

fn offset(row: usize, col: usize, dr: isize, dc: isize) -> Option<Coord> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    Board::in_bounds(r, c).then_some((r, c))
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  owner: {:?},\n  ship_map: {:?},\n  shots: {:?},\n  placements: {:?}\n}}",
            self.owner, self.ship_map, self.shots, self.placements
        )
    }
}
