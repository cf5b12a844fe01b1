//! Closed-form estimates of reaching each hand category by the river.
//!
//! These are deliberate approximations: draws are treated as independent,
//! categories are estimated separately, and opponents only shrink the pool of
//! unseen cards by two cards each.

use crate::cards::{Card, Suit};
use crate::evaluator::rank_groups::RankGroups;
use crate::evaluator::rank_set::RankSet;
use crate::evaluator::suit_info::SuitInfo;
use crate::evaluator::Category;
use crate::hand::{known_cards, validate_holdem, Board, HandError, HoleCards, Street, MAX_PLAYERS};
use log::debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EstimateError {
    #[error("invalid player count: {0} (must be 1..={max})", max = MAX_PLAYERS)]
    InvalidPlayerCount(usize),
}

/// Unseen pool and remaining reveals for one board state.
#[derive(Debug, Clone, Copy)]
struct Pool {
    unseen: f64,
    to_reveal: usize,
}

impl Pool {
    /// Draws as a float exponent.
    fn draws(self) -> f64 {
        self.to_reveal as f64
    }

    /// `1 - (remaining / total)^draws`, the chance that at least one draw hits.
    fn hit_at_least_once(self, outs: f64, offset: f64) -> f64 {
        1.0 - ratio(self.unseen - offset - outs, self.unseen - offset).powf(self.draws())
    }

    /// Chance of drawing `needed` specific cards in sequence, `per_step(i)`
    /// of them being live at step `i`.
    fn sequential(self, needed: usize, per_step: impl Fn(usize) -> f64) -> f64 {
        let mut prob = 1.0;
        for i in 0..needed {
            prob *= ratio(per_step(i), self.unseen - i as f64);
        }
        prob
    }
}

/// Fraction in `[0, 1]`; a depleted pool yields zero.
fn ratio(num: f64, den: f64) -> f64 {
    if den <= 0.0 {
        0.0
    } else {
        (num / den).clamp(0.0, 1.0)
    }
}

fn clamp_unit(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Per-category estimates for one hole-card pair and table size.
///
/// ```
/// use poker_odds::hand::{Board, HoleCards};
/// use poker_odds::probability::ProbabilityEstimator;
///
/// let hole: HoleCards = "AH KD".parse().unwrap();
/// let board: Board = "10H JH QH".parse().unwrap();
/// let est = ProbabilityEstimator::new(hole, 2).unwrap();
///
/// assert_eq!(est.chance_of_straight(&board), 1.0);
/// let flush = est.chance_of_flush(&board);
/// assert!(flush > 0.0 && flush < 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProbabilityEstimator {
    hole: HoleCards,
    num_players: usize,
}

impl ProbabilityEstimator {
    pub fn new(hole: HoleCards, num_players: usize) -> Result<Self, EstimateError> {
        if num_players == 0 || num_players > MAX_PLAYERS {
            return Err(EstimateError::InvalidPlayerCount(num_players));
        }
        Ok(Self { hole, num_players })
    }

    pub fn hole(&self) -> HoleCards {
        self.hole
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    fn pool(&self, board: &Board) -> Pool {
        let known = 2 + board.len();
        let opponents = 2 * (self.num_players - 1);
        Pool { unseen: 52.0 - known as f64 - opponents as f64, to_reveal: board.to_reveal() }
    }

    fn hole_rank_counts(&self, board: &Board) -> (usize, usize) {
        let (a, b) = (self.hole.first(), self.hole.second());
        let on_board = |c: Card| board.as_slice().iter().filter(|x| x.pairs_with(c)).count();
        (on_board(a), on_board(b))
    }

    fn known_groups(&self, board: &Board) -> RankGroups {
        RankGroups::from_cards(&known_cards(&self.hole, board))
    }

    pub fn chance_of_pair(&self, board: &Board) -> f64 {
        if self.known_groups(board).max_count() >= 2 {
            return 1.0;
        }
        let pool = self.pool(board);
        if pool.to_reveal == 0 {
            return 0.0;
        }
        let miss_one = 1.0 - ratio(3.0, pool.unseen);
        clamp_unit(1.0 - miss_one.powf(2.0 * pool.draws()))
    }

    /// A pocket pair only counts once a second rank is already paired; the
    /// estimate does not project a second pair for it.
    pub fn chance_of_two_pair(&self, board: &Board) -> f64 {
        if self.known_groups(board).ranks_at_least(2) >= 2 {
            return 1.0;
        }
        if self.hole.is_pocket_pair() {
            return 0.0;
        }

        let (a, b) = self.hole_rank_counts(board);
        let pool = self.pool(board);
        if pool.to_reveal == 0 {
            return 0.0;
        }

        let first = pool.hit_at_least_once(3.0, 0.0);
        if a > 0 || b > 0 {
            return clamp_unit(first);
        }
        let second = pool.hit_at_least_once(3.0, 1.0);
        clamp_unit(first * second)
    }

    pub fn chance_of_three_of_a_kind(&self, board: &Board) -> f64 {
        if self.known_groups(board).max_count() >= 3 {
            return 1.0;
        }
        let pocket = self.hole.is_pocket_pair();
        let pool = self.pool(board);
        if pool.to_reveal == 0 {
            return 0.0;
        }

        if pocket {
            clamp_unit(pool.hit_at_least_once(2.0, 0.0))
        } else {
            let first = pool.hit_at_least_once(3.0, 0.0);
            let second = pool.hit_at_least_once(4.0, 1.0);
            clamp_unit(first * second)
        }
    }

    pub fn chance_of_straight(&self, board: &Board) -> f64 {
        let known = known_cards(&self.hole, board);
        let ranks = RankSet::from_cards(&known);
        if ranks.has_straight() {
            return 1.0;
        }
        let pool = self.pool(board);
        if pool.to_reveal == 0 {
            return 0.0;
        }

        let mut total: f64 = 0.0;
        for low in 2..=10u8 {
            let missing = ranks.missing_in_run(low).count();
            if missing > 0 && missing <= pool.to_reveal {
                total += pool.sequential(missing, |_| 4.0);
            }
        }
        clamp_unit(total.min(1.0))
    }

    /// Best single suit; suits are not summed.
    pub fn chance_of_flush(&self, board: &Board) -> f64 {
        let known = known_cards(&self.hole, board);
        let suits = SuitInfo::from_cards(&known);
        if Suit::ALL.iter().any(|&s| suits.count(s) >= 5) {
            return 1.0;
        }
        let pool = self.pool(board);
        if pool.to_reveal == 0 {
            return 0.0;
        }

        let mut best: f64 = 0.0;
        for suit in Suit::ALL {
            let count = suits.count(suit) as usize;
            let needed = 5 - count;
            if needed > pool.to_reveal {
                continue;
            }
            let prob = pool.sequential(needed, |i| (13 - count - i) as f64);
            best = best.max(prob);
        }
        clamp_unit(best)
    }

    pub fn chance_of_full_house(&self, board: &Board) -> f64 {
        let known = known_cards(&self.hole, board);
        let groups = RankGroups::from_cards(&known);
        let trips = groups.first_at_least(3);
        if let Some(rank) = trips {
            if groups.any_other_at_least(rank, 2) {
                return 1.0;
            }
        }
        let pool = self.pool(board);
        if pool.to_reveal == 0 {
            return 0.0;
        }

        if trips.is_some() {
            return clamp_unit(pool.hit_at_least_once(3.0, 0.0));
        }
        clamp_unit(self.chance_of_pair(board) * self.chance_of_three_of_a_kind(board))
    }

    /// Best single rank among those already held.
    pub fn chance_of_four_of_a_kind(&self, board: &Board) -> f64 {
        let known = known_cards(&self.hole, board);
        let groups = RankGroups::from_cards(&known);
        if groups.max_count() >= 4 {
            return 1.0;
        }
        let pool = self.pool(board);
        if pool.to_reveal == 0 {
            return 0.0;
        }

        let mut best: f64 = 0.0;
        for (_, count) in groups.by_rank() {
            let count = count as usize;
            let needed = 4 - count;
            if needed > pool.to_reveal {
                continue;
            }
            best = best.max(pool.sequential(needed, |i| (4 - count - i) as f64));
        }
        clamp_unit(best)
    }

    /// Best single run in a single suit, Ace-low run included. Each missing
    /// card counts as four live cards, so this is an upper-side estimate.
    pub fn chance_of_straight_flush(&self, board: &Board) -> f64 {
        let known = known_cards(&self.hole, board);
        let suits = SuitInfo::from_cards(&known);
        let complete = Suit::ALL
            .iter()
            .any(|&s| (1..=10u8).any(|low| suits.ranks(s).missing_in_run(low).next().is_none()));
        if complete {
            return 1.0;
        }
        let pool = self.pool(board);
        if pool.to_reveal == 0 {
            return 0.0;
        }

        let mut best: f64 = 0.0;
        for suit in Suit::ALL {
            let ranks = suits.ranks(suit);
            for low in 1..=10u8 {
                let needed = ranks.missing_in_run(low).count();
                if needed > pool.to_reveal {
                    continue;
                }
                // Four per step overstates a single specific card; kept on purpose.
                best = best.max(pool.sequential(needed, |_| 4.0));
            }
        }
        clamp_unit(best)
    }

    /// Estimate for one category; `None` for High Card, which is always reached.
    pub fn chance_of(&self, category: Category, board: &Board) -> Option<f64> {
        let p = match category {
            Category::HighCard => return None,
            Category::OnePair => self.chance_of_pair(board),
            Category::TwoPair => self.chance_of_two_pair(board),
            Category::ThreeOfAKind => self.chance_of_three_of_a_kind(board),
            Category::Straight => self.chance_of_straight(board),
            Category::Flush => self.chance_of_flush(board),
            Category::FullHouse => self.chance_of_full_house(board),
            Category::FourOfAKind => self.chance_of_four_of_a_kind(board),
            Category::StraightFlush => self.chance_of_straight_flush(board),
        };
        Some(p)
    }

    /// All eight estimates after checking that no card is used twice.
    pub fn report(&self, board: &Board) -> Result<OddsReport, HandError> {
        validate_holdem(&self.hole, board)?;
        let mut entries = [(Category::OnePair, 0.0); 8];
        for (slot, category) in entries.iter_mut().zip(OddsReport::ORDER) {
            let p = self.chance_of(category, board).unwrap_or(1.0);
            *slot = (category, p);
        }
        debug!(
            "odds for {} on {:?} ({} players): {:?}",
            self.hole,
            board.street(),
            self.num_players,
            entries
        );
        Ok(OddsReport { street: board.street(), entries })
    }
}

/// Estimates for every drawable category at one point of the hand.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsReport {
    pub street: Street,
    entries: [(Category, f64); 8],
}

impl OddsReport {
    /// Listing order of [`OddsReport::entries`].
    pub const ORDER: [Category; 8] = [
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub fn entries(&self) -> &[(Category, f64)] {
        &self.entries
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries.iter().find(|(c, _)| *c == category).map(|(_, p)| *p)
    }

    /// Most likely first; equal estimates keep listing order.
    pub fn sorted(&self) -> Vec<(Category, f64)> {
        let mut out = self.entries.to_vec();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }
}
