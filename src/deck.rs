use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck, or what remains of one after known cards are removed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// Standard deck minus every card in `known`.
    ///
    /// ```
    /// use poker_odds::cards::parse_cards;
    /// use poker_odds::deck::Deck;
    ///
    /// let known = parse_cards("AH KD").unwrap();
    /// assert_eq!(Deck::without(&known).len(), 50);
    /// ```
    pub fn without(known: &[Card]) -> Self {
        let mut deck = Self::standard();
        deck.remove_all(known);
        deck
    }

    pub fn remove_all(&mut self, known: &[Card]) {
        self.cards.retain(|c| !known.contains(c));
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Same seed, same order.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Up to `n` cards; fewer if the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Draw exactly `N` cards, or `None` if the deck runs out.
    pub fn draw_array<const N: usize>(&mut self) -> Option<[Card; N]> {
        if self.cards.len() < N {
            return None;
        }
        let mut out = [Card::new(Rank::Two, Suit::Clubs); N];
        for slot in out.iter_mut() {
            *slot = self.draw()?;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn without_removes_known_cards() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let d = Deck::without(&[ah, kd]);
        assert_eq!(d.len(), 50);
        assert!(!d.contains(ah));
        assert!(!d.contains(kd));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
        let pair: [Card; 2] = d.draw_array().unwrap();
        assert_ne!(pair[0], pair[1]);
        assert_eq!(d.len(), 43);
    }

    #[test]
    fn draw_array_fails_on_short_deck() {
        let mut d = Deck::standard();
        let _ = d.draw_n(51);
        assert!(d.draw_array::<2>().is_none());
        assert_eq!(d.len(), 1);
    }
}
