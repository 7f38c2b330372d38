//! Core battleship game engine (no_std compatible)
//!
//! This module contains the pure game logic: boards, ship placement, guess
//! resolution, turn alternation and scoring. It performs no I/O and takes
//! every random source as an argument.

pub mod ai;
pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod events;
pub mod game;
pub mod ship;

// Re-export commonly used types
pub use ai::pick_unvisited_cell;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, BB};
pub use common::{BoardError, CellState, GameError, GuessOutcome};
pub use config::*;
pub use events::GameEvent;
pub use game::{ComputerShot, GameSession, GameStatus};
pub use ship::{Orientation, Ship, ShipDef};
