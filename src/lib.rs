#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod domain;
#[cfg(feature = "std")]
pub mod leaderboard;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use crate::core::{
    pick_unvisited_cell, BitBoard, BitBoardError, Board, BoardError, CellState, ComputerShot,
    GameError, GameEvent, GameSession, GameStatus, GuessOutcome, Orientation, Ship, ShipDef, BB,
    BOARD_SIZE, HIT_REWARD, MISS_PENALTY, NUM_SHIPS, SHIPS, TICK_DECAY, TICK_INTERVAL_MS,
    TOTAL_SHIP_CELLS,
};
#[cfg(feature = "std")]
pub use config::GameConfig;
#[cfg(feature = "std")]
pub use domain::SessionSummary;
#[cfg(feature = "std")]
pub use leaderboard::{Leaderboard, Standings};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
