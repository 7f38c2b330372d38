#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;
#[cfg(feature = "std")]
use std::time::Duration;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[cfg(feature = "std")]
use seabattle::config::{DEFAULT_SCORES_FILE, DEFAULT_TOP_SCORER_FILE};
#[cfg(feature = "std")]
use seabattle::prelude::*;
#[cfg(feature = "std")]
use seabattle::TICK_INTERVAL_MS;

#[derive(Parser)]
#[command(author, version, about = "Battleship against the computer on a 7x7 grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Name recorded on the leaderboard (prompted when omitted)")]
        name: Option<String>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = TICK_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: u64,
        #[arg(long, default_value = DEFAULT_SCORES_FILE)]
        scores: PathBuf,
        #[arg(long, default_value = DEFAULT_TOP_SCORER_FILE)]
        top_scorer: PathBuf,
        #[arg(long, help = "Disable the terminal bell on hits and misses")]
        mute: bool,
    },
    /// Show the leaderboard.
    Scores {
        #[arg(long, default_value = DEFAULT_SCORES_FILE)]
        scores: PathBuf,
        #[arg(long, default_value = DEFAULT_TOP_SCORER_FILE)]
        top_scorer: PathBuf,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            name,
            seed,
            tick_ms,
            scores,
            top_scorer,
            mute,
        } => {
            let player_name = match name {
                Some(name) => name,
                None => prompt_name()?,
            };
            let config = GameConfig {
                player_name,
                seed,
                tick_interval: Duration::from_millis(tick_ms),
                scores_path: scores,
                top_scorer_path: top_scorer,
                sound: !mute,
            };
            if let Some(s) = config.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = match config.seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            seabattle::cli::run_terminal(&config, rng).await?;
        }
        Commands::Scores { scores, top_scorer } => {
            let standings = Leaderboard::new(scores, top_scorer).standings()?;
            println!("{}", standings.title());
            print!("{}", standings);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt_name() -> anyhow::Result<String> {
    print!("Enter name for leaderboard: ");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    let name = buf.trim();
    Ok(if name.is_empty() {
        GameConfig::default().player_name
    } else {
        name.to_string()
    })
}
