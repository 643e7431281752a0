//! A fixed-size occupancy grid packed into an unsigned integer.
//!
//! Boards are `N×N` cells stored row-major in `T`, one bit per cell. The
//! type is `no_std` friendly and `Copy`, so snapshots of ship and shot
//! layers are free.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create a new empty bitboard.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// `true` when `(row, col)` is in bounds and set.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// `true` when the two boards share at least one set cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_cells<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Every set cell grown by one step in all eight directions.
    ///
    /// The result includes the original cells. Growth is clipped at the
    /// board edges and never wraps between rows.
    pub fn halo(&self) -> Self {
        let mut out = *self;
        for (r, c) in self.iter_set_bits() {
            for dr in -1isize..=1 {
                for dc in -1isize..=1 {
                    if let Some(idx) = Self::offset_index(r, c, dr, dc) {
                        out.bits = out.bits | (T::one() << idx);
                    }
                }
            }
        }
        out
    }

    /// Bit index of `(row + dr, col + dc)`, or `None` off the board.
    #[inline]
    fn offset_index(row: usize, col: usize, dr: isize, dc: isize) -> Option<usize> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < N && c < N).then_some(r * N + c)
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(r, c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}
