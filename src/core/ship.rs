//! Ship definitions and straight-run placement geometry.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use super::bitboard::BitBoard;
use super::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell offset of segment `i` from the ship origin.
    #[inline]
    pub fn step(self, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, i),
            Orientation::Vertical => (i, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A straight run of `length` cells anchored at (`row`, `col`) on an N×N
/// board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Build the run, failing if any segment would leave the board.
    pub fn new(
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        if row >= N || col >= N {
            return Err(BoardError::InvalidCoordinate { row, col });
        }
        let (last_r, last_c) = orientation.step(length - 1);
        if row + last_r >= N || col + last_c >= N {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = BitBoard::<T, N>::new();
        for i in 0..length {
            let (dr, dc) = orientation.step(i);
            mask.set(row + dr, col + dc)?;
        }
        Ok(Ship {
            length,
            orientation,
            row,
            col,
            mask,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    /// Segments of the ship from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| {
            let (dr, dc) = self.orientation.step(i);
            (self.row + dr, self.col + dc)
        })
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: ({}, {}), orientation: {:?} }}",
            self.length, self.row, self.col, self.orientation,
        )
    }
}
