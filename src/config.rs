use std::path::PathBuf;
use std::time::Duration;

use crate::core::TICK_INTERVAL_MS;

/// Runtime settings of the terminal game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Name written to the top scorer file.
    pub player_name: String,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
    pub tick_interval: Duration,
    pub scores_path: PathBuf,
    pub top_scorer_path: PathBuf,
    /// Ring the terminal bell on sound cues.
    pub sound: bool,
}

pub const DEFAULT_SCORES_FILE: &str = "scores.txt";
pub const DEFAULT_TOP_SCORER_FILE: &str = "topScorer.txt";

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: String::from("anonymous"),
            seed: None,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
            top_scorer_path: PathBuf::from(DEFAULT_TOP_SCORER_FILE),
            sound: true,
        }
    }
}
