//! Commonly used types and utilities for ease of import.

pub use crate::{
    pick_unvisited_cell, Board, GameEvent, GameSession, GameStatus, GuessOutcome, BOARD_SIZE,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, GameConfig, Leaderboard, SessionSummary};
