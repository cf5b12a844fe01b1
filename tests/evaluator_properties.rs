use poker_odds::cards::{Card, Rank, Suit};
use poker_odds::deck::Deck;
use poker_odds::evaluator::{
    best_category, best_of_seven, classify, strength_by_name, strength_of, Category,
};
use poker_odds::hand::{Board, HoleCards, MAX_PLAYERS};
use poker_odds::probability::ProbabilityEstimator;
use proptest::prelude::*;

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(Deck::standard().as_slice().to_vec()).prop_shuffle().prop_map(move |cards| cards[..n].to_vec())
}

fn straight_cards(top: u8) -> [Card; 5] {
    let values: [u8; 5] = if top == 5 { [14, 2, 3, 4, 5] } else { [top - 4, top - 3, top - 2, top - 1, top] };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let mut out = [Card::new(Rank::Two, Suit::Clubs); 5];
    for (slot, (v, s)) in out.iter_mut().zip(values.into_iter().zip(suits)) {
        *slot = Card::new(Rank::from_value(v).unwrap(), s);
    }
    out
}

proptest! {
    #[test]
    fn seven_card_best_is_at_least_as_good_as_any_five(cards in distinct_cards(7)) {
        let seven: [Card; 7] = cards.clone().try_into().unwrap();
        let best = best_of_seven(&seven);
        let best_strength = strength_of(classify(&best));

        for c in best {
            prop_assert!(seven.contains(&c));
        }
        for i in 0..3 { for j in (i+1)..4 { for k in (j+1)..5 { for l in (k+1)..6 { for m in (l+1)..7 {
            let five = [seven[i], seven[j], seven[k], seven[l], seven[m]];
            prop_assert!(best_strength >= strength_of(classify(&five)));
        }}}}}
        prop_assert_eq!(best_category(&seven), classify(&best));
    }

    #[test]
    fn classification_ignores_card_order(cards in distinct_cards(5)) {
        let hand: [Card; 5] = cards.clone().try_into().unwrap();
        let mut reversed = hand;
        reversed.reverse();
        prop_assert_eq!(classify(&hand), classify(&reversed));
    }

    #[test]
    fn every_straight_window_is_detected(top in 5u8..=14u8) {
        prop_assert_eq!(classify(&straight_cards(top)), Category::Straight);
    }

    #[test]
    fn estimates_stay_within_unit_interval(
        cards in distinct_cards(7),
        board_len in prop::sample::select(vec![0usize, 3, 4, 5]),
        players in 1usize..=MAX_PLAYERS,
    ) {
        let hole = HoleCards::try_new(cards[0], cards[1]).unwrap();
        let board = Board::try_new(cards[2..2 + board_len].to_vec()).unwrap();
        let est = ProbabilityEstimator::new(hole, players).unwrap();
        let report = est.report(&board).unwrap();
        for &(category, p) in report.entries() {
            prop_assert!((0.0..=1.0).contains(&p), "{category} out of range: {p}");
        }
    }

    #[test]
    fn made_hands_are_certain(cards in distinct_cards(7), players in 1usize..=8) {
        let hole = HoleCards::try_new(cards[0], cards[1]).unwrap();
        let board = Board::try_new(cards[2..].to_vec()).unwrap();
        let seven: [Card; 7] = cards.clone().try_into().unwrap();
        let made = best_category(&seven);
        let est = ProbabilityEstimator::new(hole, players).unwrap();
        match est.chance_of(made, &board) {
            Some(p) => prop_assert_eq!(p, 1.0, "{} not certain", made),
            None => prop_assert_eq!(made, Category::HighCard),
        }
    }
}

#[test]
fn strength_table_matches_ordinals() {
    for c in Category::ALL {
        assert_eq!(strength_of(c), c.ordinal());
        assert_eq!(strength_by_name(c.name()), Ok(c.ordinal()));
    }
    assert!(strength_by_name("Royal Flush").is_err());
}
