use super::rank_set::RankSet;
use crate::cards::{Card, Suit};

/// Per-suit card counts and rank sets for a group of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    counts: [u8; 4],
    ranks: [RankSet; 4],
    total: usize,
}

impl SuitInfo {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        let mut ranks = [RankSet::empty(); 4];
        for c in cards {
            let i = c.suit().index();
            counts[i] += 1;
            ranks[i].insert(c.rank());
        }
        Self { counts, ranks, total: cards.len() }
    }

    pub fn count(&self, suit: Suit) -> u8 {
        self.counts[suit.index()]
    }

    /// Distinct ranks held in `suit`.
    pub fn ranks(&self, suit: Suit) -> RankSet {
        self.ranks[suit.index()]
    }

    /// All cards share one suit.
    pub fn is_flush(&self) -> bool {
        self.total > 0 && self.counts.iter().any(|&c| c as usize == self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let info = SuitInfo::from_cards(&cards);
        assert!(info.is_flush());
        assert_eq!(info.count(Suit::Spades), 5);
        assert!(info.ranks(Suit::Spades).contains(14));
    }

    #[test]
    fn not_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let info = SuitInfo::from_cards(&cards);
        assert!(!info.is_flush());
        assert_eq!(info.count(Suit::Hearts), 1);
        assert_eq!(info.count(Suit::Clubs), 0);
    }

    #[test]
    fn empty_is_not_flush() {
        assert!(!SuitInfo::from_cards(&[]).is_flush());
    }
}
