//! Discrete notifications emitted by a [`GameSession`](super::game::GameSession).
//!
//! The core performs no I/O. Front ends drain these events to play sounds,
//! redraw, or hand the final score to a leaderboard.

use super::game::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// The human struck a computer ship segment.
    PlayerHit { row: usize, col: usize },
    /// The human guessed water.
    PlayerMiss { row: usize, col: usize },
    /// The computer struck a player ship segment.
    ComputerHit { row: usize, col: usize },
    /// The computer guessed water.
    ComputerMiss { row: usize, col: usize },
    /// The session reached a terminal state. Emitted once per session.
    GameOver { status: GameStatus, final_score: i64 },
}

impl GameEvent {
    /// Target cell of a guess event.
    pub fn cell(&self) -> Option<(usize, usize)> {
        match *self {
            GameEvent::PlayerHit { row, col }
            | GameEvent::PlayerMiss { row, col }
            | GameEvent::ComputerHit { row, col }
            | GameEvent::ComputerMiss { row, col } => Some((row, col)),
            GameEvent::GameOver { .. } => None,
        }
    }
}
