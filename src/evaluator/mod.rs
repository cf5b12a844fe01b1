pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod rank_set;
pub(crate) mod suit_info;

use crate::cards::Card;
use core::fmt;
use core::str::FromStr;

/// Poker hand category from weakest to strongest.
///
/// The ordinal is the whole comparable strength: two hands of the same
/// category are equal, kickers are never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = EvalError;

    /// Accepts the display name in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EvalError::UnknownCategory(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand size: expected {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("unknown hand category: {0}")]
    UnknownCategory(String),
}

/// Fixed category to strength table, indexed by category ordinal.
const STRENGTH_TABLE: [(Category, u8); 9] = [
    (Category::HighCard, 0),
    (Category::OnePair, 1),
    (Category::TwoPair, 2),
    (Category::ThreeOfAKind, 3),
    (Category::Straight, 4),
    (Category::Flush, 5),
    (Category::FullHouse, 6),
    (Category::FourOfAKind, 7),
    (Category::StraightFlush, 8),
];

/// Comparable strength of a category, 0 (High Card) to 8 (Straight Flush).
pub const fn strength_of(category: Category) -> u8 {
    STRENGTH_TABLE[category as usize].1
}

/// Strength lookup by category name.
///
/// ```
/// use poker_odds::evaluator::{strength_by_name, EvalError};
///
/// assert_eq!(strength_by_name("full house"), Ok(6));
/// assert!(matches!(strength_by_name("royal"), Err(EvalError::UnknownCategory(_))));
/// ```
pub fn strength_by_name(name: &str) -> Result<u8, EvalError> {
    name.parse::<Category>().map(strength_of)
}

/// Classify exactly five cards.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{classify, Category};
///
/// let cards = parse_cards("AS 2D 3H 4C 5S").unwrap();
/// let hand: [_; 5] = cards.try_into().unwrap();
/// assert_eq!(classify(&hand), Category::Straight);
/// ```
pub fn classify(cards: &[Card; 5]) -> Category {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.category();
        }
    }

    unreachable!("HighCard detector should always match")
}

/// Classify a slice that must hold exactly five cards.
pub fn classify_slice(cards: &[Card]) -> Result<Category, EvalError> {
    let hand: &[Card; 5] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize { expected: 5, actual: cards.len() })?;
    Ok(classify(hand))
}

/// Best five of exactly seven cards.
///
/// Only a strictly stronger subset replaces the current best, so among
/// subsets sharing the top category the first one scanned is returned.
pub fn best_of_seven(cards: &[Card; 7]) -> [Card; 5] {
    use combinations::Combinations7Choose5;

    let mut best: Option<([Card; 5], u8)> = None;

    for indices in Combinations7Choose5::new() {
        let hand = indices.map(|i| cards[i]);
        let strength = strength_of(classify(&hand));

        if best.as_ref().map_or(true, |(_, s)| strength > *s) {
            best = Some((hand, strength));
        }
    }

    best.map_or([cards[0], cards[1], cards[2], cards[3], cards[4]], |(hand, _)| hand)
}

/// Best five of a slice that must hold exactly seven cards.
///
/// ```
/// use poker_odds::cards::parse_cards;
/// use poker_odds::evaluator::{best_of, classify, Category, EvalError};
///
/// let seven = parse_cards("AH KD 10H JH QH 2C 3S").unwrap();
/// let best = best_of(&seven).unwrap();
/// assert_eq!(classify(&best), Category::Straight);
///
/// let err = best_of(&seven[..6]).unwrap_err();
/// assert_eq!(err, EvalError::InvalidHandSize { expected: 7, actual: 6 });
/// ```
pub fn best_of(cards: &[Card]) -> Result<[Card; 5], EvalError> {
    let seven: &[Card; 7] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize { expected: 7, actual: cards.len() })?;
    Ok(best_of_seven(seven))
}

/// Category of the best five of seven cards.
pub fn best_category(cards: &[Card; 7]) -> Category {
    classify(&best_of_seven(cards))
}
