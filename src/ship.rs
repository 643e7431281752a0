//! Ship kinds, orientation and placements.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{Coord, PlacementError};
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Unit step `(dr, dc)` along the run.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// The four kinds of ship in the fleet, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// All kinds in placement order (descending size).
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Destroyer,
        ShipKind::Submarine,
    ];

    /// Number of cells a ship of this kind occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 1,
        }
    }

    /// How many ships of this kind each fleet contains.
    pub const fn count(self) -> usize {
        match self {
            ShipKind::Battleship => 1,
            ShipKind::Cruiser => 2,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }

    /// Position of this kind in [`ShipKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cells)", self.name(), self.size())
    }
}

/// A ship laid on the grid: kind, anchor (top/left cell) and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: ShipKind,
    pub anchor: Coord,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(kind: ShipKind, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            kind,
            anchor,
            orientation,
        }
    }

    /// The cells of the run, in order from the anchor. Cells may fall off
    /// the grid; use [`Placement::mask`] to validate.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (row, col) = self.anchor;
        let (dr, dc) = self.orientation.step();
        (0..self.kind.size()).map(move |i| (row + i * dr, col + i * dc))
    }

    /// Occupancy mask of the run, or `OutOfBounds` if any cell leaves the grid.
    pub fn mask(&self) -> Result<BB, PlacementError> {
        BB::from_cells(self.cells()).map_err(|_| PlacementError::OutOfBounds)
    }
}
