use crate::cards::{Card, Rank};

/// Distinct ranks held, one bit per rank value. An Ace also sets bit 1 so that
/// the wheel (A-2-3-4-5) is the run starting at 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankSet(u16);

const RUN: u16 = 0b1_1111;

impl RankSet {
    pub const fn empty() -> Self {
        RankSet(0)
    }

    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut set = Self::empty();
        for c in cards {
            set.insert(c.rank());
        }
        set
    }

    pub fn insert(&mut self, rank: Rank) {
        self.0 |= 1 << rank.value();
        if rank == Rank::Ace {
            self.0 |= 1 << 1;
        }
    }

    /// Membership by numeric value; `1` asks about the low Ace.
    pub const fn contains(self, value: u8) -> bool {
        value < 16 && self.0 & (1 << value) != 0
    }

    /// Number of distinct ranks (the low-Ace bit is not counted twice).
    pub const fn len(self) -> u32 {
        (self.0 & !(1 << 1)).count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Values of the five-long run starting at `low` that are not in the set.
    pub fn missing_in_run(self, low: u8) -> impl Iterator<Item = u8> {
        (low..low + 5).filter(move |&v| !self.contains(v))
    }

    /// True when some five consecutive values are all present, wheel included.
    pub const fn has_straight(self) -> bool {
        let mut low = 1;
        while low <= 10 {
            let window = RUN << low;
            if self.0 & window == window {
                return true;
            }
            low += 1;
        }
        false
    }
}
