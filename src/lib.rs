//! poker-odds: Texas Hold'em odds engine
//!
//! Goals:
//! - Classify 5-card hands and pick the strongest 5 of 7
//! - Closed-form estimates of reaching each category by the river
//! - Monte Carlo win / tie / EV for calling a bet
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: odds for a hand on the flop
//! ```
//! use poker_odds::evaluator::{best_category, Category};
//! use poker_odds::hand::{Board, HoleCards};
//! use poker_odds::probability::ProbabilityEstimator;
//!
//! let hole: HoleCards = "AH KH".parse().unwrap();
//! let board: Board = "QH JH 2C".parse().unwrap();
//!
//! let estimator = ProbabilityEstimator::new(hole, 4).unwrap();
//! let report = estimator.report(&board).unwrap();
//! let flush = report.get(Category::Flush).unwrap();
//! assert!(flush > 0.0 && flush < 1.0);
//! assert_eq!(report.get(Category::HighCard), None);
//!
//! let seven = poker_odds::cards::parse_cards("AH KH QH JH 10H 2C 3D").unwrap();
//! let seven: [_; 7] = seven.try_into().unwrap();
//! assert_eq!(best_category(&seven), Category::StraightFlush);
//! ```
//!
//! ## TUI
//! Run the interactive calculator with:
//! ```sh
//! cargo run --bin poker-odds
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod probability;
pub mod showdown;
pub mod simulation;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
