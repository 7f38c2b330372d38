//! Common types for the game core: cell states, guess outcomes and errors.

use core::fmt;

use super::bitboard::BitBoardError;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    /// Unstruck ship segment.
    Ship,
    /// Struck ship segment.
    Hit,
    /// Guessed water.
    Miss,
}

impl CellState {
    /// `true` once the cell has been the target of a guess.
    pub fn is_visited(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }

    /// Single-character glyph used by the text renderers.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Ship => 'S',
            CellState::Hit => '!',
            CellState::Miss => 'X',
        }
    }
}

/// Result of a guess against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessOutcome {
    /// The cell held a ship segment, now struck.
    Hit,
    /// The cell was water.
    Miss,
    /// The cell had already been guessed; nothing changed.
    Repeat,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Row or column outside the grid.
    InvalidCoordinate { row: usize, col: usize },
    /// Ship run would leave the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps a non-empty cell.
    ShipOverlaps,
    /// Ships must have at least one segment.
    InvalidLength,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                BoardError::InvalidCoordinate { row, col }
            }
            other => BoardError::BitBoard(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps a non-empty cell"),
            BoardError::InvalidLength => write!(f, "Ship length must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by GameSession operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// The session already ended; restart to keep playing.
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::GameOver => write!(f, "Game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
