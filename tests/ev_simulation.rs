use poker_odds::hand::{Board, HoleCards};
use poker_odds::simulation::{
    simulate_ev, CancelToken, EvSimulator, SimulationConfig, SimulationError, Wager,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hole(s: &str) -> HoleCards {
    s.parse().unwrap()
}

#[test]
fn royal_flush_on_board_always_splits() {
    let board: Board = "AS KS QS JS 10S".parse().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let wager = Wager::new(100, 20, 0);
    let res = simulate_ev(&hole("2C 3D"), &board, wager, 100, 4, &mut rng).unwrap();
    assert_eq!(res.tie_probability, 1.0);
    assert_eq!(res.win_probability, 0.0);
    assert!((res.expected_value - 40.0).abs() < 1e-9);
    assert_eq!(res.loss_probability(), 0.0);
}

#[test]
fn aces_outperform_seven_deuce() {
    // Hands of equal category split, so the margins stay broad.
    let config = SimulationConfig::default().with_trials(4_000).with_seed(2024);
    let sim = EvSimulator::new(config);
    let wager = Wager::new(100, 20, 0);
    let aces = sim.run(&hole("AS AH"), &Board::empty(), wager, 2).unwrap();
    let junk = sim.run(&hole("7C 2D"), &Board::empty(), wager, 2).unwrap();

    assert!(aces.win_probability > 0.25 && aces.win_probability < 0.95);
    assert!(aces.win_probability + aces.tie_probability > 0.5);
    assert!(aces.win_probability > junk.win_probability);
    assert!(aces.expected_value > junk.expected_value);
}

#[test]
fn aces_heads_up_converge_as_trials_grow() {
    let run = |trials: usize, seed: u64| {
        let config =
            SimulationConfig::default().with_trials(trials).with_seed(seed).with_workers(4);
        EvSimulator::new(config)
            .run(&hole("AS AH"), &Board::empty(), Wager::new(100, 20, 0), 2)
            .unwrap()
    };
    let reference = run(100_000, 99).win_probability;

    // Margin shrinks with the square root of the trial count.
    let mut prev_margin = f64::INFINITY;
    for trials in [100, 10_000, 100_000] {
        let res = run(trials, 5);
        assert_eq!(res.trials, trials);
        let gap = (res.win_probability - reference).abs();
        let margin = 2.0 / (trials as f64).sqrt() + 0.005;
        assert!(gap < margin, "{trials} trials: gap {gap} exceeds {margin}");
        assert!(margin < prev_margin);
        prev_margin = margin;
    }
}

#[test]
fn threaded_runs_repeat_with_a_seed() {
    let config = SimulationConfig::default().with_trials(2_000).with_seed(77).with_workers(4);
    let sim = EvSimulator::new(config);
    let board: Board = "2H 9D KC".parse().unwrap();
    let a = sim.run(&hole("KH QH"), &board, Wager::new(40, 10, 10), 3).unwrap();
    let b = sim.run(&hole("KH QH"), &board, Wager::new(40, 10, 10), 3).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.trials, 2_000);
}

#[test]
fn shared_token_stops_the_simulator() {
    let token = CancelToken::new();
    let sim = EvSimulator::new(SimulationConfig::default().with_seed(1))
        .with_cancel_token(token.clone());
    token.cancel();
    assert!(sim.cancel_token().is_cancelled());
    let res = sim.run(&hole("AS KS"), &Board::empty(), Wager::default(), 2);
    assert_eq!(res, Err(SimulationError::Cancelled));
}
