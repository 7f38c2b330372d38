//! Terminal front end: typed guesses, a periodic tick, rendering, sound cues
//! and the leaderboard hand-off at the end of a game.

pub mod input;
pub mod interface;
pub mod layout;
pub mod sound;

use std::io::Write;

use anyhow::Context;
use log::{info, warn};
use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::GameConfig;
use crate::core::{GameError, GameEvent, GameSession, GameStatus, GuessOutcome};
use crate::leaderboard::Leaderboard;

use input::{coord_to_string, parse_command, Command, HELP};
use layout::COMPUTER_LAYOUT;
use sound::SoundPlayer;

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Synchronous driver around a [`GameSession`]. The async loop in
/// [`run_terminal`] only feeds it lines and ticks.
pub struct Frontend<R: Rng, W: Write> {
    session: GameSession,
    rng: R,
    out: W,
    leaderboard: Leaderboard,
    player_name: String,
    sound: SoundPlayer,
}

impl<R: Rng, W: Write> Frontend<R, W> {
    pub fn new(config: &GameConfig, mut rng: R, out: W) -> Self {
        let session = GameSession::new(&mut rng);
        Self {
            session,
            rng,
            out,
            leaderboard: Leaderboard::new(config.scores_path.clone(), config.top_scorer_path.clone()),
            player_name: config.player_name.clone(),
            sound: SoundPlayer::new(config.sound),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// `true` while ticks should be delivered.
    pub fn is_running(&self) -> bool {
        !self.session.status().is_over()
    }

    /// Greet the player and draw the opening boards.
    pub fn start(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Welcome aboard, {}! Sink the enemy fleet.", self.player_name)?;
        writeln!(self.out, "{}", HELP)?;
        interface::render_session(&mut self.out, &self.session)?;
        Ok(())
    }

    /// Handle one line typed by the player.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(self.out, "{}", msg)?;
                return Ok(Flow::Continue);
            }
        };
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Board => interface::render_session(&mut self.out, &self.session)?,
            Command::Restart => {
                self.session.restart(&mut self.rng);
                writeln!(self.out, "New game! Fleets have been redeployed.")?;
                interface::render_session(&mut self.out, &self.session)?;
            }
            Command::Guess { row, col } => self.guess(row, col)?,
            Command::Click { x, y } => match COMPUTER_LAYOUT.cell_at(x, y) {
                Some((row, col)) => self.guess(row, col)?,
                None => writeln!(self.out, "Click ({}, {}) is not on the enemy board.", x, y)?,
            },
        }
        Ok(Flow::Continue)
    }

    /// Deliver one tick to the session.
    pub fn handle_tick(&mut self) -> anyhow::Result<()> {
        if !self.is_running() {
            return Ok(());
        }
        let before = self.session.computer_guess_count();
        self.session.on_tick(&mut self.rng);
        let fired = self.session.computer_guess_count() != before;
        self.flush_events()?;
        if fired && self.is_running() {
            interface::render_session(&mut self.out, &self.session)?;
        }
        Ok(())
    }

    fn guess(&mut self, row: usize, col: usize) -> anyhow::Result<()> {
        let name = coord_to_string(row, col);
        match self.session.submit_human_guess(row, col) {
            Ok(GuessOutcome::Hit) => writeln!(self.out, "{}: HIT!", name)?,
            Ok(GuessOutcome::Miss) => writeln!(self.out, "{}: miss.", name)?,
            Ok(GuessOutcome::Repeat) => {
                writeln!(self.out, "{}: already guessed, turn wasted.", name)?
            }
            Err(GameError::GameOver) => {
                writeln!(self.out, "The game is over. Type 'restart' to play again.")?;
                return Ok(());
            }
            Err(e) => {
                writeln!(self.out, "{}: {}", name, e)?;
                return Ok(());
            }
        }
        self.flush_events()?;
        if self.is_running() {
            interface::render_session(&mut self.out, &self.session)?;
        }
        Ok(())
    }

    /// Consume queued session events: sound cues, computer shot reports and
    /// the end-of-game flow.
    fn flush_events(&mut self) -> anyhow::Result<()> {
        let events: Vec<GameEvent> = self.session.drain_events().collect();
        for event in events {
            self.sound.play(&mut self.out, &event);
            let verdict = match event {
                GameEvent::ComputerHit { .. } => "HIT!",
                GameEvent::ComputerMiss { .. } => "miss.",
                GameEvent::GameOver { status, final_score } => {
                    self.game_over(status, final_score)?;
                    continue;
                }
                GameEvent::PlayerHit { .. } | GameEvent::PlayerMiss { .. } => continue,
            };
            if let Some((row, col)) = event.cell() {
                writeln!(self.out, "Computer fires at {}: {}", coord_to_string(row, col), verdict)?;
            }
        }
        Ok(())
    }

    fn game_over(&mut self, status: GameStatus, final_score: i64) -> anyhow::Result<()> {
        writeln!(self.out, "\n╔══════════════════════════════╗")?;
        writeln!(self.out, "║          GAME  OVER          ║")?;
        writeln!(self.out, "╚══════════════════════════════╝")?;
        interface::render_session(&mut self.out, &self.session)?;
        match status {
            GameStatus::Won => writeln!(self.out, "VICTORY! You sank the enemy fleet.")?,
            GameStatus::Lost => writeln!(self.out, "DEFEAT. Your fleet has been destroyed.")?,
            GameStatus::InProgress => {}
        }
        writeln!(self.out, "Final score: {}", final_score)?;

        match self.leaderboard.record(&self.player_name, final_score) {
            Ok(standings) => {
                info!("recorded score {} for {}", final_score, self.player_name);
                writeln!(self.out, "{}", standings.title())?;
                write!(self.out, "{}", standings)?;
            }
            Err(e) => {
                warn!("leaderboard update failed: {:#}", e);
                writeln!(self.out, "Sorry, the leaderboard could not be updated: {:#}", e)?;
            }
        }
        writeln!(self.out, "Type 'restart' to play again or 'quit' to leave.")?;
        Ok(())
    }
}

/// Play in the terminal until the player quits or stdin closes.
///
/// Ticks start one interval after launch and pause while a finished game
/// waits for a restart.
pub async fn run_terminal<R: Rng>(config: &GameConfig, rng: R) -> anyhow::Result<()> {
    let mut frontend = Frontend::new(config, rng, std::io::stdout());
    frontend.start()?;

    let period = config.tick_interval;
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick(), if frontend.is_running() => frontend.handle_tick()?,
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                let was_running = frontend.is_running();
                if frontend.handle_line(&line)? == Flow::Quit {
                    break;
                }
                if !was_running && frontend.is_running() {
                    ticker.reset();
                }
            }
        }
    }
    Ok(())
}
