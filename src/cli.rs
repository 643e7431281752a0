#![cfg(feature = "std")]
//! Terminal input parsing for the interactive front end.

use std::string::String;

use crate::board::Board;
use crate::common::Coord;

/// Format a cell as a column letter and 1-based row, e.g. `(0, 1)` -> `B1`.
pub fn coord_label((r, c): Coord) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Parse `B7`-style input into `(row, col)`. Rejects cells off the grid.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || !Board::in_bounds(row - 1, col) {
        return None;
    }
    Some((row - 1, col))
}

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the awaited ship or fire, depending on phase.
    Cell(Coord),
    Rotate,
    Auto,
    Fleet,
    Restart,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "rotate" => Some(Command::Rotate),
            "a" | "auto" => Some(Command::Auto),
            "f" | "fleet" => Some(Command::Fleet),
            "restart" | "new" => Some(Command::Restart),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            other => parse_coord(other).map(Command::Cell),
        }
    }
}

pub const HELP: &str = "\
Commands:
  B7          place the awaited ship (placing) or fire (combat)
  r, rotate   toggle placement orientation
  a, auto     place your whole fleet at random
  f, fleet    show ships left to place
  restart     start a new game
  q, quit     leave";
