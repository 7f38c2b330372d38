use crate::core::{GameSession, GameStatus};

/// Serializable snapshot of a session for reports and tooling.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionSummary {
    pub status: GameStatus,
    pub score: i64,
    pub player_guesses: u32,
    pub computer_guesses: u32,
    /// Human hits on the computer board.
    pub hits: usize,
    /// Human misses on the computer board.
    pub misses: usize,
    pub ticks: u64,
    pub player_parts_remaining: Option<usize>,
    pub computer_parts_remaining: Option<usize>,
}

impl From<&GameSession> for SessionSummary {
    fn from(session: &GameSession) -> Self {
        let target = session.computer_board();
        SessionSummary {
            status: session.status(),
            score: session.score(),
            player_guesses: session.player_guess_count(),
            computer_guesses: session.computer_guess_count(),
            hits: target.hits().count_ones(),
            misses: target.misses().count_ones(),
            ticks: session.ticks(),
            player_parts_remaining: session.player_board().ship_parts_remaining(),
            computer_parts_remaining: target.ship_parts_remaining(),
        }
    }
}
