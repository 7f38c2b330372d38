//! One side's grid: ship placement, cell queries and guess resolution.

use core::fmt;

use log::debug;
use rand::Rng;

use super::bitboard::BitBoard;
use super::common::{BoardError, CellState, GuessOutcome};
use super::config::{BOARD_SIZE, SHIPS};
use super::ship::{Orientation, Ship};

const GRID: usize = BOARD_SIZE as usize;

/// Bitboard sized for the game grid.
pub type BB = BitBoard<u64, GRID>;

/// A 7×7 grid of cells plus the count of ship segments still afloat.
///
/// Cell state is kept as three occupancy masks. Struck segments stay in
/// `ship_map`, so `hits` is always a subset of it and `misses` is always
/// disjoint from it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
    hits: BB,
    misses: BB,
    /// `None` until a ship has been placed since construction or reset.
    ship_parts_remaining: Option<usize>,
}

impl Board {
    /// Create an empty board with no ships and an unset parts counter.
    pub fn new() -> Self {
        Board {
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            ship_parts_remaining: None,
        }
    }

    /// Place the standard fleet at random, non-overlapping positions.
    ///
    /// Each ship samples an orientation and an anchor that keeps it fully on
    /// the grid, and resamples both until [`Board::try_place`] succeeds. The
    /// fleet is small relative to the grid, so retries always terminate in
    /// practice.
    pub fn place_ships_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for def in SHIPS.iter() {
            let len = def.length();
            let mut attempts = 0usize;
            loop {
                attempts += 1;
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_r, max_c) = match orientation {
                    Orientation::Horizontal => (GRID - 1, GRID - len),
                    Orientation::Vertical => (GRID - len, GRID - 1),
                };
                let row = rng.random_range(0..=max_r);
                let col = rng.random_range(0..=max_c);
                if self.try_place(row, col, orientation, len).is_ok() {
                    debug!(
                        "placed {} at ({}, {}) {:?} after {} attempt(s)",
                        def.name(),
                        row,
                        col,
                        orientation,
                        attempts
                    );
                    break;
                }
            }
        }
    }

    /// Mark a straight run of `length` cells as Ship if every one is Empty.
    ///
    /// On error the board is left untouched.
    pub fn try_place(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
        length: usize,
    ) -> Result<(), BoardError> {
        let ship = Ship::<u64, GRID>::new(length, orientation, row, col)?;
        let mask = ship.mask();
        if !((self.ship_map | self.misses) & mask).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= mask;
        self.ship_parts_remaining = Some(self.ship_parts_remaining.unwrap_or(0) + length);
        Ok(())
    }

    /// Current state of the cell at (row, col).
    pub fn query_cell(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        Ok(if self.hits.get(row, col)? {
            CellState::Hit
        } else if self.misses.get(row, col)? {
            CellState::Miss
        } else if self.ship_map.get(row, col)? {
            CellState::Ship
        } else {
            CellState::Empty
        })
    }

    /// Resolve a guess at (row, col).
    ///
    /// A Ship cell becomes Hit and the parts counter drops by one, an Empty
    /// cell becomes Miss, and an already visited cell is left alone.
    pub fn apply_guess(&mut self, row: usize, col: usize) -> Result<GuessOutcome, BoardError> {
        let outcome = match self.query_cell(row, col)? {
            CellState::Ship => {
                self.hits.set(row, col)?;
                self.ship_parts_remaining = self.ship_parts_remaining.map(|n| n.saturating_sub(1));
                GuessOutcome::Hit
            }
            CellState::Empty => {
                self.misses.set(row, col)?;
                GuessOutcome::Miss
            }
            CellState::Hit | CellState::Miss => GuessOutcome::Repeat,
        };
        debug!("guess ({}, {}) -> {:?}", row, col, outcome);
        Ok(outcome)
    }

    /// `true` once every placed ship segment has been hit.
    pub fn is_defeated(&self) -> bool {
        self.ship_parts_remaining == Some(0)
    }

    /// Clear the grid and unset the parts counter.
    pub fn reset(&mut self) {
        self.ship_map.clear_all();
        self.hits.clear_all();
        self.misses.clear_all();
        self.ship_parts_remaining = None;
    }

    /// Unstruck ship segments, or `None` if nothing has been placed yet.
    pub fn ship_parts_remaining(&self) -> Option<usize> {
        self.ship_parts_remaining
    }

    /// Every cell that holds a ship segment, struck or not.
    pub fn ship_cells(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Cells that have not been guessed yet.
    pub fn unvisited_count(&self) -> usize {
        GRID * GRID - self.hits.count_ones() - self.misses.count_ones()
    }

    /// Row-major iterator over `(row, col, state)` for renderers.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        (0..GRID * GRID).map(move |idx| {
            let (row, col) = (idx / GRID, idx % GRID);
            (row, col, self.state_at(row, col))
        })
    }

    fn state_at(&self, row: usize, col: usize) -> CellState {
        self.query_cell(row, col).unwrap_or(CellState::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid dump with row and column headers, ships included.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..GRID {
            write!(f, "  {} ", c)?;
        }
        writeln!(f)?;
        for r in 0..GRID {
            write!(f, "{}:", r)?;
            for c in 0..GRID {
                write!(f, " {} |", self.state_at(r, c).glyph())?;
            }
            writeln!(f)?;
            write!(f, "  ")?;
            for c in 0..GRID {
                write!(f, "{}", if c == 0 { "---" } else { "+---" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ship_parts_remaining: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ship_parts_remaining
        )
    }
}
