//! Computer targeting: uniform random search, then hunt-and-destroy after a hit.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::board::{Board, BB};
use crate::common::{Coord, ShotOutcome};
use crate::config::HUNT_DIRECTIONS;

/// Targeting mode of the [`Strategist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No wounded ship known; fire at random unhit cells.
    Search,
    /// A ship has been hit but not sunk; probe around it.
    Hunt,
}

/// Memory of the ship currently being hunted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntState {
    /// Hits on the hunted ship, in the order they were scored.
    pub chain: Vec<Coord>,
    /// The hit that started the hunt; cardinal probes radiate from here.
    pub last_hit: Coord,
    /// Index into [`HUNT_DIRECTIONS`] of the next cardinal probe.
    pub cursor: usize,
}

impl HuntState {
    fn new(origin: Coord) -> Self {
        Self {
            chain: Vec::from([origin]),
            last_hit: origin,
            cursor: 0,
        }
    }

    /// Row shared by every hit, if there are at least two of them.
    fn common_row(&self) -> Option<usize> {
        let row = self.chain.first()?.0;
        (self.chain.len() >= 2 && self.chain.iter().all(|&(r, _)| r == row)).then_some(row)
    }

    /// Column shared by every hit, if there are at least two of them.
    fn common_col(&self) -> Option<usize> {
        let col = self.chain.first()?.1;
        (self.chain.len() >= 2 && self.chain.iter().all(|&(_, c)| c == col)).then_some(col)
    }
}

/// The computer's targeting state machine.
///
/// Call [`Strategist::next_target`] to pick a cell, resolve the shot, then
/// feed the outcome back through [`Strategist::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Strategist {
    hunt: Option<HuntState>,
}

impl Strategist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        if self.hunt.is_some() {
            Mode::Hunt
        } else {
            Mode::Search
        }
    }

    /// Current hunt memory, if hunting.
    pub fn hunt(&self) -> Option<&HuntState> {
        self.hunt.as_ref()
    }

    /// Forget any hunt in progress.
    pub fn reset(&mut self) {
        self.hunt = None;
    }

    /// Choose the next cell to fire at given the opponent's shot mask.
    ///
    /// Returns `None` only when every cell has already been shot. A hunt
    /// with nowhere left to probe is dropped and the pick falls back to a
    /// random search.
    pub fn next_target<R: Rng>(&mut self, shots: &BB, rng: &mut R) -> Option<Coord> {
        if let Some(hunt) = self.hunt.as_mut() {
            if let Some(target) = hunt_target(hunt, shots) {
                return Some(target);
            }
            debug!("hunt around {:?} exhausted, back to search", hunt.last_hit);
            self.hunt = None;
        }
        search_target(shots, rng)
    }

    /// Update hunt memory with the outcome of a shot at `target`.
    pub fn record(&mut self, target: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Sunk(_) => self.hunt = None,
            ShotOutcome::Hit => match self.hunt.as_mut() {
                Some(hunt) => hunt.chain.push(target),
                None => self.hunt = Some(HuntState::new(target)),
            },
            ShotOutcome::Miss => {
                if let Some(hunt) = self.hunt.as_mut() {
                    hunt.cursor += 1;
                }
            }
        }
    }
}

/// Uniform pick among cells not yet shot.
fn search_target<R: Rng>(shots: &BB, rng: &mut R) -> Option<Coord> {
    let open: Vec<Coord> = (!*shots).iter_set_bits().collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

fn hunt_target(hunt: &mut HuntState, shots: &BB) -> Option<Coord> {
    let open = |r: usize, c: usize| Board::in_bounds(r, c) && !shots.contains(r, c);

    if let Some(row) = hunt.common_row() {
        let min = hunt.chain.iter().map(|&(_, c)| c).min()?;
        let max = hunt.chain.iter().map(|&(_, c)| c).max()?;
        if min > 0 && open(row, min - 1) {
            return Some((row, min - 1));
        }
        return open(row, max + 1).then_some((row, max + 1));
    }

    if let Some(col) = hunt.common_col() {
        let min = hunt.chain.iter().map(|&(r, _)| r).min()?;
        let max = hunt.chain.iter().map(|&(r, _)| r).max()?;
        if min > 0 && open(min - 1, col) {
            return Some((min - 1, col));
        }
        return open(max + 1, col).then_some((max + 1, col));
    }

    let (row, col) = hunt.last_hit;
    while let Some(&(dr, dc)) = HUNT_DIRECTIONS.get(hunt.cursor) {
        let probe = row
            .checked_add_signed(dr)
            .zip(col.checked_add_signed(dc))
            .filter(|&(r, c)| open(r, c));
        if probe.is_some() {
            return probe;
        }
        hunt.cursor += 1;
    }
    None
}
