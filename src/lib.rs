#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod render;
mod ship;
mod shot;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use render::{render_board, Marker};
pub use ship::*;
pub use shot::*;
