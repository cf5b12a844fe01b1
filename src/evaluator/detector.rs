use super::hand_analysis::HandAnalysis;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognises one category.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

/// Declares a unit detector for `$category` whose test is `$test`.
macro_rules! detector {
    ($(#[$doc:meta])* $name:ident, $category:ident, |$a:ident| $test:expr) => {
        $(#[$doc])*
        pub struct $name;

        impl CategoryDetector for $name {
            fn category(&self) -> Category {
                Category::$category
            }

            fn detect(&self, $a: &HandAnalysis) -> bool {
                $test
            }
        }
    };
}

detector!(
    /// Run of five in one suit, wheel included.
    StraightFlushDetector, StraightFlush, |a| a.is_flush && a.is_straight
);
detector!(FourOfAKindDetector, FourOfAKind, |a| a.rank_groups.has_count(4));
detector!(
    /// Trips plus a second rank seen at least twice.
    FullHouseDetector, FullHouse, |a| a.rank_groups.has_full_house()
);
detector!(FlushDetector, Flush, |a| a.is_flush);
detector!(StraightDetector, Straight, |a| a.is_straight);
detector!(ThreeOfAKindDetector, ThreeOfAKind, |a| a.rank_groups.has_count(3));
detector!(TwoPairDetector, TwoPair, |a| a.rank_groups.pair_count() == 2);
detector!(OnePairDetector, OnePair, |a| a.rank_groups.has_count(2));
detector!(
    /// Fallback; matches every hand.
    HighCardDetector, HighCard, |_a| true
);

/// Checked in order, strongest first; the first match wins.
pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};

    fn hand(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn first_match(cards: &[Card; 5]) -> Category {
        let analysis = HandAnalysis::new(cards);
        DETECTORS
            .iter()
            .find(|d| d.detect(&analysis))
            .map(|d| d.category())
            .unwrap_or(Category::HighCard)
    }

    #[test]
    fn detectors_are_in_descending_strength() {
        for w in DETECTORS.windows(2) {
            assert!(w[0].category() > w[1].category());
        }
    }

    #[test]
    fn straight_flush_wins_over_flush_and_straight() {
        let cards = hand("9H 8H 7H 6H 5H");
        assert!(FlushDetector.detect(&HandAnalysis::new(&cards)));
        assert!(StraightDetector.detect(&HandAnalysis::new(&cards)));
        assert_eq!(first_match(&cards), Category::StraightFlush);
    }

    #[test]
    fn full_house_wins_over_trips_and_pair() {
        let cards = hand("KS KH KD QC QS");
        let analysis = HandAnalysis::new(&cards);
        assert!(ThreeOfAKindDetector.detect(&analysis));
        assert!(OnePairDetector.detect(&analysis));
        assert_eq!(first_match(&cards), Category::FullHouse);
    }

    #[test]
    fn two_pair_detector_needs_two_pairs() {
        let analysis = HandAnalysis::new(&hand("JS JH 9D 7C 3S"));
        assert!(!TwoPairDetector.detect(&analysis));
        assert!(OnePairDetector.detect(&analysis));
    }

    #[test]
    fn high_card_always_matches() {
        let cards = hand("AS KH JD 9C 7S");
        assert!(HighCardDetector.detect(&HandAnalysis::new(&cards)));
        assert_eq!(first_match(&cards), Category::HighCard);
    }
}
