use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;

/// Kinds and counts every fleet must contain, in placement order.
pub const FLEET: [(ShipKind, usize); 4] = [
    (ShipKind::Battleship, ShipKind::Battleship.count()),
    (ShipKind::Cruiser, ShipKind::Cruiser.count()),
    (ShipKind::Destroyer, ShipKind::Destroyer.count()),
    (ShipKind::Submarine, ShipKind::Submarine.count()),
];

/// Number of ships in a full fleet.
pub const NUM_SHIPS: usize = 1 + 2 + 3 + 4;

/// Total number of ship segments in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Random anchors tried per ship before a fleet attempt is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Full-board restarts before random fleet placement gives up.
pub const MAX_PLACEMENT_RESTARTS: usize = 5;

/// Cardinal probe order used while hunting: up, down, left, right.
pub const HUNT_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";
