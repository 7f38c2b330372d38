use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    pick_unvisited_cell, CellState, GameSession, GameStatus, GuessOutcome, BOARD_SIZE,
    HIT_REWARD, MISS_PENALTY, TICK_DECAY,
};

const N: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy)]
enum Step {
    Guess(usize, usize),
    Tick,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..N, 0..N).prop_map(|(r, c)| Step::Guess(r, c)),
        Just(Step::Tick),
    ]
}

fn visited(session: &GameSession) -> usize {
    session
        .player_board()
        .cells()
        .filter(|(_, _, state)| state.is_visited())
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_follows_hits_misses_and_ticks(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..200)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = GameSession::new(&mut rng);
        let (mut hits, mut misses, mut ticks) = (0i64, 0i64, 0i64);

        for step in steps {
            if session.status().is_over() {
                break;
            }
            match step {
                Step::Guess(row, col) => match session.submit_human_guess(row, col).unwrap() {
                    GuessOutcome::Hit => hits += 1,
                    GuessOutcome::Miss => misses += 1,
                    GuessOutcome::Repeat => {}
                },
                Step::Tick => {
                    session.on_tick(&mut rng);
                    ticks += 1;
                }
            }
            prop_assert_eq!(
                session.score(),
                HIT_REWARD * hits - MISS_PENALTY * misses - TICK_DECAY * ticks
            );
            prop_assert_eq!(session.player_guess_count() as i64, hits + misses);
        }
    }

    #[test]
    fn computer_never_leads_and_never_repeats(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..200)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = GameSession::new(&mut rng);

        for step in steps {
            let before = session.computer_guess_count();
            match step {
                Step::Guess(row, col) => {
                    let _ = session.submit_human_guess(row, col);
                }
                Step::Tick => {
                    session.on_tick(&mut rng);
                }
            }
            let after = session.computer_guess_count();
            prop_assert!(after <= session.player_guess_count());
            prop_assert!(after - before <= 1);
            // each computer guess visits exactly one fresh cell
            prop_assert_eq!(visited(&session), after as usize);
        }
    }

    #[test]
    fn idle_ticks_only_decay_the_score(seed in any::<u64>(), idle in 1u64..50) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = GameSession::new(&mut rng);
        let player_board = *session.player_board();
        let computer_board = *session.computer_board();

        for _ in 0..idle {
            prop_assert_eq!(session.on_tick(&mut rng), GameStatus::InProgress);
        }
        prop_assert_eq!(session.score(), -(idle as i64) * TICK_DECAY);
        prop_assert_eq!(session.ticks(), idle);
        prop_assert_eq!(session.computer_guess_count(), 0);
        prop_assert_eq!(*session.player_board(), player_board);
        prop_assert_eq!(*session.computer_board(), computer_board);
        prop_assert_eq!(session.drain_events().count(), 0);
    }
}

/// A bot that keeps guessing ends every seeded game within the board size,
/// and the computer has caught up by the end.
#[test]
fn bot_games_always_finish() {
    for seed in 0..32u64 {
        let mut game_rng = SmallRng::seed_from_u64(seed);
        let mut bot_rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut session = GameSession::new(&mut game_rng);
        let mut rounds = 0;
        while !session.status().is_over() {
            rounds += 1;
            assert!(rounds <= N * N, "seed {} ran past {} rounds", seed, N * N);
            let (row, col) = pick_unvisited_cell(session.computer_board(), &mut bot_rng)
                .expect("an undecided game has unvisited cells");
            if bot_rng.random_bool(0.5) {
                session.submit_human_guess(row, col).unwrap();
                session.on_tick(&mut game_rng);
            } else {
                session.submit_human_guess(row, col).unwrap();
            }
        }
        let won = session.status() == GameStatus::Won;
        assert_eq!(session.computer_board().is_defeated(), won);
        let hidden_ships = session
            .computer_board()
            .cells()
            .filter(|&(_, _, state)| state == CellState::Ship)
            .count();
        assert_eq!(hidden_ships == 0, won);
    }
}
