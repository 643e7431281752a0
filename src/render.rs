//! Stateless text projection of a board.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::board::{Board, Cell};

/// What a cell looks like to a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Unknown or open water.
    Water,
    /// Intact ship segment (only shown when revealed).
    Ship,
    Hit,
    Miss,
}

impl Marker {
    /// Derive the marker for `cell`; ships stay hidden unless `reveal`.
    pub fn of(cell: &Cell, reveal: bool) -> Self {
        match (cell.hit, cell.is_occupied()) {
            (true, true) => Marker::Hit,
            (true, false) => Marker::Miss,
            (false, true) if reveal => Marker::Ship,
            _ => Marker::Water,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Marker::Water => '.',
            Marker::Ship => 'S',
            Marker::Hit => 'X',
            Marker::Miss => 'o',
        }
    }
}

/// Render `board` as a grid with lettered columns and numbered rows.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let size = Board::size();
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..size {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for row in board.cells().collect::<Vec<_>>().chunks(size) {
        let _ = write!(out, "{:2} ", row[0].row + 1);
        for cell in row {
            let _ = write!(out, " {}", Marker::of(cell, reveal).glyph());
        }
        out.push('\n');
    }
    out
}
