//! Turn and scoring orchestration over a player board and a computer board.

use alloc::vec::Vec;

use log::{debug, info};
use rand::Rng;

use super::ai;
use super::board::Board;
use super::common::{GameError, GuessOutcome};
use super::config::{HIT_REWARD, MISS_PENALTY, TICK_DECAY};
use super::events::GameEvent;

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Every computer ship segment was hit.
    Won,
    /// Every player ship segment was hit.
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A guess the computer made during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerShot {
    pub row: usize,
    pub col: usize,
    pub outcome: GuessOutcome,
}

/// One play session: both boards, the guess counters, the score and the
/// queue of events not yet consumed by a front end.
///
/// Guesses always target the opponent's board. The computer board is written
/// only by [`GameSession::submit_human_guess`], the player board only by
/// [`GameSession::computer_turn`].
#[derive(Debug, Clone)]
pub struct GameSession {
    player_board: Board,
    computer_board: Board,
    player_guess_count: u32,
    computer_guess_count: u32,
    score: i64,
    ticks: u64,
    status: GameStatus,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a session with both fleets placed at random.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut computer_board = Board::new();
        computer_board.place_ships_randomly(rng);
        let mut player_board = Board::new();
        player_board.place_ships_randomly(rng);
        Self::from_boards(player_board, computer_board)
    }

    /// Start a session from boards that were already set up.
    pub fn from_boards(player_board: Board, computer_board: Board) -> Self {
        Self {
            player_board,
            computer_board,
            player_guess_count: 0,
            computer_guess_count: 0,
            score: 0,
            ticks: 0,
            status: GameStatus::InProgress,
            events: Vec::new(),
        }
    }

    /// Resolve a human guess against the computer board.
    ///
    /// Hits add [`HIT_REWARD`], misses subtract [`MISS_PENALTY`], and both
    /// count as a player guess. A repeat guess changes nothing and the turn
    /// is silently wasted.
    pub fn submit_human_guess(&mut self, row: usize, col: usize) -> Result<GuessOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let outcome = self.computer_board.apply_guess(row, col)?;
        match outcome {
            GuessOutcome::Hit => {
                self.score += HIT_REWARD;
                self.player_guess_count += 1;
                self.events.push(GameEvent::PlayerHit { row, col });
            }
            GuessOutcome::Miss => {
                self.score -= MISS_PENALTY;
                self.player_guess_count += 1;
                self.events.push(GameEvent::PlayerMiss { row, col });
            }
            GuessOutcome::Repeat => {}
        }
        self.check_termination();
        Ok(outcome)
    }

    /// Advance the session by one tick: decay the score, let the computer
    /// catch up by one guess, then check for the end of the game.
    ///
    /// Ticks after the session ended change nothing.
    pub fn on_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }
        self.decay_score();
        self.computer_turn(rng);
        self.check_termination();
        self.status
    }

    /// Time-based half of a tick. No-op once the session ended.
    pub fn decay_score(&mut self) {
        if self.status.is_over() {
            return;
        }
        self.score -= TICK_DECAY;
        self.ticks += 1;
    }

    /// Turn-taking half of a tick. The computer guesses only while the human
    /// is ahead on guesses, so it never gets more than one shot per tick.
    /// Returns `None` once the session ended.
    pub fn computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ComputerShot> {
        if self.status.is_over() || self.player_guess_count <= self.computer_guess_count {
            return None;
        }
        let (row, col) = ai::pick_unvisited_cell(&self.player_board, rng)?;
        let outcome = self.player_board.apply_guess(row, col).ok()?;
        self.computer_guess_count += 1;
        match outcome {
            GuessOutcome::Hit => self.events.push(GameEvent::ComputerHit { row, col }),
            GuessOutcome::Miss => self.events.push(GameEvent::ComputerMiss { row, col }),
            GuessOutcome::Repeat => {}
        }
        debug!(
            "computer guess #{} at ({}, {}) -> {:?}",
            self.computer_guess_count, row, col, outcome
        );
        Some(ComputerShot { row, col, outcome })
    }

    /// Clear both boards, place fresh fleets and zero every counter.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.computer_board.reset();
        self.player_board.reset();
        self.computer_board.place_ships_randomly(rng);
        self.player_board.place_ships_randomly(rng);
        self.player_guess_count = 0;
        self.computer_guess_count = 0;
        self.score = 0;
        self.ticks = 0;
        self.status = GameStatus::InProgress;
        self.events.clear();
        info!("session restarted");
    }

    fn check_termination(&mut self) {
        if self.status.is_over() {
            return;
        }
        self.status = if self.computer_board.is_defeated() {
            GameStatus::Won
        } else if self.player_board.is_defeated() {
            GameStatus::Lost
        } else {
            return;
        };
        info!("game over: {:?} with final score {}", self.status, self.score);
        self.events.push(GameEvent::GameOver {
            status: self.status,
            final_score: self.score,
        });
    }

    /// Take every queued event in emission order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player_guess_count(&self) -> u32 {
        self.player_guess_count
    }

    pub fn computer_guess_count(&self) -> u32 {
        self.computer_guess_count
    }

    /// Ticks processed since the session started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
