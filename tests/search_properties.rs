use board_mcts::games::connect_four::ConnectFour;
use board_mcts::games::othello::Othello;
use board_mcts::games::tic_tac_toe::{Cell, TicTacToe};
use board_mcts::{
    select_move, GameResult, GameState, MctsConfig, Player, SearchError, SearchTree,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_config(seed: u64) -> MctsConfig {
    MctsConfig {
        simulations: 500,
        exploration_constant: f64::sqrt(2.0),
        rng_seed: Some(seed),
    }
}

/// X is one move away from completing the top row at cell 2; O threatens
/// the middle row, so anything but the immediate win loses.
fn forced_win_for_a() -> TicTacToe {
    TicTacToe::from_cells(
        [
            Some(Player::A), Some(Player::A), None,
            Some(Player::B), Some(Player::B), None,
            None, None, None,
        ],
        Player::A,
    )
}

#[test]
fn returned_move_is_always_legal() {
    for seed in 0..10 {
        let game = TicTacToe::new();
        let mv = select_move(&game, &seeded_config(seed)).unwrap();
        assert!(game.legal_moves().contains(&mv));

        let game = ConnectFour::new();
        let mv = select_move(&game, &seeded_config(seed)).unwrap();
        assert!(game.legal_moves().contains(&mv));
    }
}

#[test]
fn othello_search_picks_a_legal_flanking_move() {
    // Othello's legal squares are scattered and reshuffle every turn, so
    // this is the adapter that stresses sparse move keys. Full-board
    // rollouts are long; a smaller budget keeps the test quick.
    let config = MctsConfig {
        simulations: 50,
        ..seeded_config(0)
    };

    let mut game = Othello::new();
    for seed in 0..5 {
        let mv = select_move(
            &game,
            &MctsConfig {
                rng_seed: Some(seed),
                ..config
            },
        )
        .unwrap();
        assert!(game.legal_moves().contains(&mv));
        game = game.apply(mv);
    }
}

#[test]
fn identical_seeds_give_identical_searches() {
    let game = ConnectFour::new();
    let config = seeded_config(42);

    let first = select_move(&game, &config).unwrap();
    let second = select_move(&game, &config).unwrap();
    assert_eq!(first, second);

    // The whole visit distribution must match, not just the chosen move.
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree = SearchTree::new(TicTacToe::new(), f64::sqrt(2.0)).unwrap();
        tree.search_n(&mut rng, 500).unwrap();
        let mut stats = tree.root_statistics();
        stats.sort_by_key(|entry| entry.mv);
        stats
            .into_iter()
            .map(|entry| (entry.mv, entry.visits))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn search_finds_the_forced_win() {
    let game = forced_win_for_a();

    let mut hits = 0;
    let trials = 20;
    for seed in 0..trials {
        if select_move(&game, &seeded_config(seed)).unwrap() == Cell(2) {
            hits += 1;
        }
    }

    // Allow a stray miss, but 500 simulations should all but guarantee the
    // immediate win.
    assert!(hits >= trials - 1, "won in only {hits}/{trials} trials");
}

#[test]
fn terminal_root_is_rejected() {
    let game = TicTacToe::from_cells(
        [
            Some(Player::A), Some(Player::A), Some(Player::A),
            Some(Player::B), Some(Player::B), None,
            None, None, None,
        ],
        Player::B,
    );
    assert_eq!(
        select_move(&game, &seeded_config(0)),
        Err(SearchError::InvalidState)
    );
}

#[test]
fn zero_simulations_yield_no_viable_move() {
    let config = MctsConfig {
        simulations: 0,
        ..seeded_config(0)
    };
    assert_eq!(
        select_move(&TicTacToe::new(), &config),
        Err(SearchError::NoViableMove)
    );
}

#[test]
fn draw_only_position_scores_half_per_visit() {
    // One empty cell, no winner possible: every rollout ends in the same
    // draw, so the lone child must accumulate exactly 0.5 per visit.
    let game = TicTacToe::from_cells(
        [
            Some(Player::A), Some(Player::B), Some(Player::A),
            Some(Player::A), Some(Player::B), Some(Player::B),
            Some(Player::B), Some(Player::A), None,
        ],
        Player::A,
    );
    assert_eq!(game.result(), GameResult::Ongoing);

    let mut rng = StdRng::seed_from_u64(5);
    let mut tree = SearchTree::new(game, f64::sqrt(2.0)).unwrap();
    tree.search_n(&mut rng, 10).unwrap();

    let stats = tree.root_statistics();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].visits, 10);
    assert_eq!(stats[0].score, 0.5 * 10.0);
}
