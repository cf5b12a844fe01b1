use poker_odds::evaluator::Category;
use poker_odds::hand::{Board, HandError, MAX_PLAYERS};
use poker_odds::probability::{EstimateError, OddsReport, ProbabilityEstimator};

fn est(hole: &str, players: usize) -> ProbabilityEstimator {
    ProbabilityEstimator::new(hole.parse().unwrap(), players).unwrap()
}

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn player_count_is_bounded() {
    let hole = "AH KD".parse().unwrap();
    assert_eq!(ProbabilityEstimator::new(hole, 0).unwrap_err(), EstimateError::InvalidPlayerCount(0));
    assert!(ProbabilityEstimator::new(hole, MAX_PLAYERS).is_ok());
    assert_eq!(
        ProbabilityEstimator::new(hole, MAX_PLAYERS + 1).unwrap_err(),
        EstimateError::InvalidPlayerCount(MAX_PLAYERS + 1)
    );
}

#[test]
fn preflop_pair_uses_both_hole_ranks() {
    let p = est("AH KD", 2).chance_of_pair(&Board::empty());
    let miss: f64 = 45.0 / 48.0;
    assert!(close(p, 1.0 - miss.powi(10)));
    assert_eq!(est("9C 9D", 2).chance_of_pair(&Board::empty()), 1.0);
}

#[test]
fn river_without_a_hit_is_zero() {
    let e = est("AH KD", 3);
    let river = board("2C 5D 8H 9S JC");
    assert_eq!(e.chance_of_pair(&river), 0.0);
    assert_eq!(e.chance_of_flush(&river), 0.0);
    assert_eq!(e.chance_of_straight(&river), 0.0);
}

#[test]
fn flush_draw_on_the_flop() {
    // 52 - 5 known - 2 opponent cards = 45 unseen, 9 hearts live.
    let e = est("AH KH", 2);
    let b = board("QH JH 2C");
    assert!(close(e.chance_of_flush(&b), 9.0 / 45.0));
    assert!(close(e.chance_of_straight_flush(&b), 4.0 / 45.0));
    assert!(est("AH KH", 6).chance_of_flush(&b) > e.chance_of_flush(&b));
}

#[test]
fn made_straight_is_certain() {
    let e = est("AH KD", 2);
    assert_eq!(e.chance_of_straight(&board("10H JH QH")), 1.0);
    assert_eq!(est("AC 2D", 2).chance_of_straight(&board("3H 4S 5C")), 1.0);
}

#[test]
fn pocket_pair_two_pair_needs_a_second_paired_rank() {
    let e = est("9C 9D", 2);
    assert_eq!(e.chance_of_two_pair(&board("9H 2C 3D")), 0.0);
    assert_eq!(e.chance_of_two_pair(&board("2C 2D 5H")), 1.0);
}

#[test]
fn quads_from_a_pocket_pair() {
    let p = est("9C 9D", 1).chance_of_four_of_a_kind(&Board::empty());
    assert!(close(p, (2.0 / 50.0) * (1.0 / 49.0)));
}

#[test]
fn three_of_a_kind_counts_each_rank_separately() {
    // Two different board pairs with the hole cards are not trips.
    let e = est("AH KD", 2);
    let b = board("AC KS 2D 7H 9C");
    assert_eq!(e.chance_of_three_of_a_kind(&b), 0.0);
    assert_eq!(e.chance_of_two_pair(&b), 1.0);
    assert_eq!(e.chance_of_three_of_a_kind(&board("AC AS 2D")), 1.0);
}

#[test]
fn report_agrees_with_made_board_hands() {
    // Trips on the board plus an ace paired from the hole: every lower
    // category is already made too.
    let report = est("AH KD", 3).report(&board("2C 2D 2H AS 9C")).unwrap();
    for category in [
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::FullHouse,
    ] {
        assert_eq!(report.get(category), Some(1.0), "{category}");
    }
    assert_eq!(report.get(Category::FourOfAKind), Some(0.0));
}

#[test]
fn straight_flush_counts_four_per_missing_card() {
    let p = est("9H 10H", 2).chance_of_straight_flush(&board("JH QH 2C"));
    assert!(close(p, 4.0 / 45.0));
}

#[test]
fn report_lists_every_drawable_category() {
    let e = est("AH KH", 4);
    let report = e.report(&board("QH JH 2C")).unwrap();
    let listed: Vec<Category> = report.entries().iter().map(|(c, _)| *c).collect();
    assert_eq!(listed, OddsReport::ORDER.to_vec());
    assert_eq!(report.get(Category::HighCard), None);

    let sorted = report.sorted();
    assert!(sorted.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn report_rejects_reused_cards() {
    let e = est("AH KH", 2);
    assert_eq!(e.report(&board("AH 2C 3D")).unwrap_err(), HandError::Overlap);
}
