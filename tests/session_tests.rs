use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, CellState, GameError, GameEvent, GameSession, GameStatus, GuessOutcome, Orientation,
    BOARD_SIZE, TOTAL_SHIP_CELLS,
};

const N: usize = BOARD_SIZE as usize;

/// Computer board with a two-cell ship at (2,3)-(2,4); player board with the
/// standard random fleet.
fn known_session(seed: u64) -> (GameSession, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = Board::new();
    player.place_ships_randomly(&mut rng);
    let mut computer = Board::new();
    computer.try_place(2, 3, Orientation::Horizontal, 2).unwrap();
    (GameSession::from_boards(player, computer), rng)
}

fn events(session: &mut GameSession) -> Vec<GameEvent> {
    session.drain_events().collect()
}

#[test]
fn test_new_session_is_fresh() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut session = GameSession::new(&mut rng);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.score(), 0);
    assert_eq!(session.player_guess_count(), 0);
    assert_eq!(session.computer_guess_count(), 0);
    assert_eq!(session.player_board().ship_parts_remaining(), Some(TOTAL_SHIP_CELLS));
    assert_eq!(session.computer_board().ship_parts_remaining(), Some(TOTAL_SHIP_CELLS));
    assert!(events(&mut session).is_empty());
}

#[test]
fn test_human_hit_scores_and_sinks_a_part() {
    let (mut session, _) = known_session(1);
    let outcome = session.submit_human_guess(2, 3).unwrap();
    assert_eq!(outcome, GuessOutcome::Hit);
    assert_eq!(session.computer_board().ship_parts_remaining(), Some(1));
    assert_eq!(session.score(), 100);
    assert_eq!(session.player_guess_count(), 1);
    assert_eq!(events(&mut session), vec![GameEvent::PlayerHit { row: 2, col: 3 }]);
}

#[test]
fn test_human_miss_costs_five() {
    let (mut session, _) = known_session(1);
    let outcome = session.submit_human_guess(0, 0).unwrap();
    assert_eq!(outcome, GuessOutcome::Miss);
    assert_eq!(session.computer_board().ship_parts_remaining(), Some(2));
    assert_eq!(session.score(), -5);
    assert_eq!(session.player_guess_count(), 1);
    assert_eq!(events(&mut session), vec![GameEvent::PlayerMiss { row: 0, col: 0 }]);
}

#[test]
fn test_repeat_guess_is_a_silent_no_op() {
    let (mut session, _) = known_session(1);
    session.submit_human_guess(2, 3).unwrap();
    session.submit_human_guess(0, 0).unwrap();
    events(&mut session);

    assert_eq!(session.submit_human_guess(2, 3).unwrap(), GuessOutcome::Repeat);
    assert_eq!(session.submit_human_guess(0, 0).unwrap(), GuessOutcome::Repeat);
    assert_eq!(session.score(), 95);
    assert_eq!(session.player_guess_count(), 2);
    assert_eq!(session.computer_board().ship_parts_remaining(), Some(1));
    assert!(events(&mut session).is_empty());
}

#[test]
fn test_invalid_coordinate_is_rejected() {
    let (mut session, _) = known_session(1);
    assert!(matches!(
        session.submit_human_guess(0, N),
        Err(GameError::Board(_))
    ));
    assert_eq!(session.player_guess_count(), 0);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_tick_decays_score_without_computer_turn() {
    let (mut session, mut rng) = known_session(2);
    assert_eq!(session.on_tick(&mut rng), GameStatus::InProgress);
    assert_eq!(session.on_tick(&mut rng), GameStatus::InProgress);
    assert_eq!(session.score(), -2);
    assert_eq!(session.ticks(), 2);
    assert_eq!(session.computer_guess_count(), 0);
    assert!(events(&mut session).is_empty());
}

#[test]
fn test_tick_halves_are_independent() {
    let (mut session, mut rng) = known_session(2);
    session.decay_score();
    assert_eq!(session.score(), -1);
    assert_eq!(session.computer_guess_count(), 0);

    assert_eq!(session.computer_turn(&mut rng), None);
    session.submit_human_guess(0, 0).unwrap();
    let shot = session.computer_turn(&mut rng).expect("computer should fire");
    assert_ne!(shot.outcome, GuessOutcome::Repeat);
    assert!(session
        .player_board()
        .query_cell(shot.row, shot.col)
        .unwrap()
        .is_visited());
    assert_eq!(session.computer_guess_count(), 1);
    let targets: Vec<_> = events(&mut session).iter().filter_map(GameEvent::cell).collect();
    assert_eq!(targets, vec![(0, 0), (shot.row, shot.col)]);
    // computer turn never touches the score
    assert_eq!(session.score(), -6);
    assert_eq!(session.computer_turn(&mut rng), None);
}

#[test]
fn test_computer_catches_up_one_guess_per_tick() {
    let (mut session, mut rng) = known_session(5);
    for col in 0..3 {
        session.submit_human_guess(6, col).unwrap();
    }
    for expected in 1..=3 {
        session.on_tick(&mut rng);
        assert_eq!(session.computer_guess_count(), expected);
    }
    session.on_tick(&mut rng);
    assert_eq!(session.computer_guess_count(), 3);
    assert_eq!(session.score(), -15 - 4);
}

#[test]
fn test_sinking_the_computer_fleet_wins_once() {
    let (mut session, mut rng) = known_session(1);
    session.submit_human_guess(2, 3).unwrap();
    session.on_tick(&mut rng);
    session.submit_human_guess(2, 4).unwrap();
    assert_eq!(session.status(), GameStatus::Won);
    assert!(session.computer_board().is_defeated());

    let final_score = session.score();
    assert_eq!(final_score, 200 - 1);
    let over: Vec<_> = events(&mut session)
        .into_iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .collect();
    assert_eq!(
        over,
        vec![GameEvent::GameOver {
            status: GameStatus::Won,
            final_score
        }]
    );

    // the tick driver is stopped: no more decay, no computer catch-up
    let computer_guesses = session.computer_guess_count();
    for _ in 0..5 {
        assert_eq!(session.on_tick(&mut rng), GameStatus::Won);
    }
    assert_eq!(session.score(), final_score);
    assert_eq!(session.computer_guess_count(), computer_guesses);
    assert_eq!(session.submit_human_guess(0, 0), Err(GameError::GameOver));
    assert!(events(&mut session).is_empty());
}

#[test]
fn test_tick_halves_do_nothing_after_game_over() {
    let (mut session, mut rng) = known_session(6);
    session.submit_human_guess(2, 3).unwrap();
    session.submit_human_guess(2, 4).unwrap();
    assert_eq!(session.status(), GameStatus::Won);
    let final_score = session.score();
    let player_board = *session.player_board();
    events(&mut session);

    // the human is two guesses ahead, yet the computer may not fire
    session.decay_score();
    assert_eq!(session.computer_turn(&mut rng), None);
    assert_eq!(session.score(), final_score);
    assert_eq!(session.ticks(), 0);
    assert_eq!(session.computer_guess_count(), 0);
    assert_eq!(*session.player_board(), player_board);
    assert!(events(&mut session).is_empty());
}

#[test]
fn test_losing_the_player_fleet() {
    // only (6, 6) is left unvisited on the player board and it holds a ship
    let mut player = Board::new();
    player.try_place(6, 6, Orientation::Horizontal, 1).unwrap();
    for row in 0..N {
        for col in 0..N {
            if (row, col) != (6, 6) {
                player.apply_guess(row, col).unwrap();
            }
        }
    }
    let mut computer = Board::new();
    computer.try_place(0, 0, Orientation::Vertical, 2).unwrap();
    let mut session = GameSession::from_boards(player, computer);
    let mut rng = SmallRng::seed_from_u64(11);

    session.submit_human_guess(6, 6).unwrap();
    assert_eq!(session.on_tick(&mut rng), GameStatus::Lost);
    assert_eq!(session.player_board().query_cell(6, 6).unwrap(), CellState::Hit);
    assert_eq!(
        events(&mut session),
        vec![
            GameEvent::PlayerMiss { row: 6, col: 6 },
            GameEvent::ComputerHit { row: 6, col: 6 },
            GameEvent::GameOver {
                status: GameStatus::Lost,
                final_score: -6
            },
        ]
    );
}

#[test]
fn test_restart_resets_everything() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut session = GameSession::new(&mut rng);
    for col in 0..N {
        session.submit_human_guess(3, col).unwrap();
        session.on_tick(&mut rng);
    }
    assert!(session.score() != 0);

    session.restart(&mut rng);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.score(), 0);
    assert_eq!(session.ticks(), 0);
    assert_eq!(session.player_guess_count(), 0);
    assert_eq!(session.computer_guess_count(), 0);
    assert!(events(&mut session).is_empty());
    for board in [session.player_board(), session.computer_board()] {
        assert_eq!(board.ship_parts_remaining(), Some(TOTAL_SHIP_CELLS));
        assert_eq!(board.unvisited_count(), N * N);
    }
}

#[test]
fn test_restart_after_game_over_resumes_play() {
    let (mut session, mut rng) = known_session(4);
    session.submit_human_guess(2, 3).unwrap();
    session.submit_human_guess(2, 4).unwrap();
    assert!(session.status().is_over());

    session.restart(&mut rng);
    assert_eq!(session.status(), GameStatus::InProgress);
    session.on_tick(&mut rng);
    assert_eq!(session.score(), -1);
}
