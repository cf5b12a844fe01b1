//! Monte Carlo estimate of win/tie probability and the expected value of a call.
//!
//! Each trial shuffles its own copy of the remaining deck, deals two cards to
//! every opponent, completes the board and compares best categories. Trials
//! share nothing mutable, so they split freely across worker threads.

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{best_category, strength_of, Category};
use crate::hand::{known_cards, validate_holdem, Board, HandError, HoleCards, MAX_PLAYERS};
use log::{debug, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    #[error("number of trials must be positive")]
    NoTrials,
    #[error("invalid player count: {0} (must be 1..={max})", max = MAX_PLAYERS)]
    InvalidPlayerCount(usize),
    #[error("invalid cards: {0}")]
    Hand(#[from] HandError),
    #[error("simulation cancelled before any trial completed")]
    Cancelled,
}

/// Tuning knobs for [`EvSimulator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub trials: usize,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub workers: usize,
    pub deadline: Option<Duration>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { trials: 10_000, seed: None, workers: 1, deadline: None }
    }
}

impl SimulationConfig {
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Chips in the middle and what calling (plus an optional raise) commits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wager {
    pub pot: u64,
    pub call: u64,
    pub raise: u64,
}

impl Wager {
    pub fn new(pot: u64, call: u64, raise: u64) -> Self {
        Self { pot, call, raise }
    }

    pub fn contribution(&self) -> u64 {
        self.call.saturating_add(self.raise)
    }

    /// Pot after our contribution goes in.
    pub fn total_pot(&self) -> u64 {
        self.pot.saturating_add(self.contribution())
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvResult {
    pub win_probability: f64,
    pub tie_probability: f64,
    pub expected_value: f64,
    /// Trials actually completed; below the request when stopped early.
    pub trials: usize,
}

impl EvResult {
    /// `win * total_pot + tie * total_pot / 2 - contribution`.
    pub fn from_counts(wins: usize, ties: usize, trials: usize, wager: Wager) -> Self {
        let n = trials.max(1) as f64;
        let win_probability = wins as f64 / n;
        let tie_probability = ties as f64 / n;
        let total_pot = wager.total_pot() as f64;
        let contribution = wager.contribution() as f64;
        let expected_value =
            win_probability * total_pot + tie_probability * total_pot / 2.0 - contribution;
        Self { win_probability, tie_probability, expected_value, trials }
    }

    pub fn loss_probability(&self) -> f64 {
        (1.0 - self.win_probability - self.tie_probability).max(0.0)
    }
}

/// Cooperative stop flag shared with running workers.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win,
    Tie,
    Loss,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    wins: usize,
    ties: usize,
    completed: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => {}
        }
        self.completed += 1;
    }

    fn merge(self, other: Tally) -> Tally {
        Tally {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            completed: self.completed + other.completed,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Stop<'a> {
    cancel: Option<&'a CancelToken>,
    deadline: Option<Instant>,
}

const NEVER: Stop<'static> = Stop { cancel: None, deadline: None };

impl Stop<'_> {
    fn reached(&self) -> bool {
        self.cancel.is_some_and(CancelToken::is_cancelled)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Validated inputs shared read-only by every trial.
struct Table {
    hole: [Card; 2],
    board: Vec<Card>,
    opponents: usize,
    remaining: Deck,
}

impl Table {
    fn new(hole: &HoleCards, board: &Board, num_players: usize) -> Result<Self, SimulationError> {
        if num_players == 0 || num_players > MAX_PLAYERS {
            return Err(SimulationError::InvalidPlayerCount(num_players));
        }
        validate_holdem(hole, board)?;
        let remaining = Deck::without(&known_cards(hole, board));
        Ok(Self {
            hole: hole.as_array(),
            board: board.as_slice().to_vec(),
            opponents: num_players - 1,
            remaining,
        })
    }

    fn strength(hole: &[Card], community: &[Card]) -> u8 {
        debug_assert_eq!(hole.len() + community.len(), 7);
        let mut seven = [hole[0]; 7];
        seven[..2].copy_from_slice(hole);
        seven[2..].copy_from_slice(community);
        strength_of(best_category(&seven))
    }

    fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        let mut deck = self.remaining.clone();
        deck.shuffle_with(rng);

        let dealt = deck.draw_n(2 * self.opponents);
        let mut community = self.board.clone();
        community.extend(deck.draw_n(Board::MAX_CARDS - self.board.len()));

        let ours = Self::strength(&self.hole, &community);
        let best_other = dealt.chunks_exact(2).map(|h| Self::strength(h, &community)).max();

        match best_other {
            Some(theirs) if theirs > ours => Outcome::Loss,
            Some(theirs) if theirs == ours => Outcome::Tie,
            _ => Outcome::Win,
        }
    }

    fn run_batch<R: Rng + ?Sized>(&self, trials: usize, rng: &mut R, stop: Stop<'_>) -> Tally {
        let mut tally = Tally::default();
        for _ in 0..trials {
            if stop.reached() {
                break;
            }
            tally.record(self.play(rng));
        }
        tally
    }
}

/// Single-threaded simulation driven by the caller's random source.
///
/// ```
/// use poker_odds::hand::{Board, HoleCards};
/// use poker_odds::simulation::{simulate_ev, Wager};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let hole: HoleCards = "AS AH".parse().unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let res = simulate_ev(&hole, &Board::empty(), Wager::new(100, 20, 0), 500, 2, &mut rng).unwrap();
/// assert!(res.win_probability > 0.4);
/// assert_eq!(res.trials, 500);
/// ```
pub fn simulate_ev<R: Rng + ?Sized>(
    hole: &HoleCards,
    board: &Board,
    wager: Wager,
    trials: usize,
    num_players: usize,
    rng: &mut R,
) -> Result<EvResult, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::NoTrials);
    }
    let table = Table::new(hole, board, num_players)?;
    let tally = table.run_batch(trials, rng, NEVER);
    Ok(EvResult::from_counts(tally.wins, tally.ties, tally.completed, wager))
}

/// Configurable simulator: seeding, worker threads, deadline and cancellation.
#[derive(Debug, Clone, Default)]
pub struct EvSimulator {
    config: SimulationConfig,
    cancel: CancelToken,
}

impl EvSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config, cancel: CancelToken::new() }
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Handle for stopping a run from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn run(
        &self,
        hole: &HoleCards,
        board: &Board,
        wager: Wager,
        num_players: usize,
    ) -> Result<EvResult, SimulationError> {
        let requested = self.config.trials;
        if requested == 0 {
            return Err(SimulationError::NoTrials);
        }
        let table = Table::new(hole, board, num_players)?;
        let workers = self.config.workers.clamp(1, requested);
        let base_seed = self.config.seed.unwrap_or_else(|| rand::rng().random::<u64>());
        let stop = Stop {
            cancel: Some(&self.cancel),
            deadline: self.config.deadline.map(|d| Instant::now() + d),
        };

        debug!(
            "simulating {requested} trials for {hole} on {} cards, {num_players} players, {workers} workers",
            board.len()
        );

        let tally = if workers == 1 {
            let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
            table.run_batch(requested, &mut rng, stop)
        } else {
            let per_worker = requested / workers;
            let extra = requested % workers;
            let table = &table;
            thread::scope(|s| {
                let handles: Vec<_> = (0..workers)
                    .map(|w| {
                        let trials = per_worker + usize::from(w < extra);
                        s.spawn(move || {
                            let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(w as u64));
                            let tally = table.run_batch(trials, &mut rng, stop);
                            trace!("worker {w} finished {}/{trials} trials", tally.completed);
                            tally
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .fold(Tally::default(), Tally::merge)
            })
        };

        if tally.completed == 0 {
            warn!("simulation stopped before completing any trial");
            return Err(SimulationError::Cancelled);
        }
        if tally.completed < requested {
            warn!("simulation stopped early after {}/{requested} trials", tally.completed);
        }

        let result = EvResult::from_counts(tally.wins, tally.ties, tally.completed, wager);
        debug!(
            "win {:.4} tie {:.4} ev {:.2} over {} trials",
            result.win_probability, result.tie_probability, result.expected_value, result.trials
        );
        Ok(result)
    }
}

/// Frequency of each best-hand category over random 7-card deals.
///
/// Returned in ascending category order; frequencies sum to one.
pub fn category_frequencies<R: Rng + ?Sized>(
    trials: usize,
    rng: &mut R,
) -> Result<Vec<(Category, f64)>, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::NoTrials);
    }
    let full = Deck::standard();
    let mut counts = [0usize; 9];
    for _ in 0..trials {
        let mut deck = full.clone();
        deck.shuffle_with(rng);
        if let Some(seven) = deck.draw_array::<7>() {
            counts[best_category(&seven).ordinal() as usize] += 1;
        }
    }
    Ok(Category::ALL.iter().map(|&c| (c, counts[c.ordinal() as usize] as f64 / trials as f64)).collect())
}
