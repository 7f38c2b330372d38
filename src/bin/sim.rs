//! Headless seeded game: a bot plays the human side and one tick follows
//! every guess. Prints a JSON summary of the finished session.

use anyhow::bail;
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;

const MAX_ROUNDS: usize = 10_000;

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let prog = args.first().map(String::as_str).unwrap_or("sim");
        eprintln!("Usage: {} <seed>", prog);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game_rng = SmallRng::seed_from_u64(seed);
    let mut bot_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut session = GameSession::new(&mut game_rng);

    let mut rounds = 0;
    while session.status() == GameStatus::InProgress {
        rounds += 1;
        if rounds > MAX_ROUNDS {
            bail!("session did not finish within {} rounds", MAX_ROUNDS);
        }
        if let Some((row, col)) = pick_unvisited_cell(session.computer_board(), &mut bot_rng) {
            session.submit_human_guess(row, col)?;
        }
        session.on_tick(&mut game_rng);
    }

    let summary = SessionSummary::from(&session);
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
