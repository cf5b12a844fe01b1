use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a set of cards, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: [u8; 15],
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank().value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = Vec::new();

        for rank in Rank::ALL.iter().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { counts: *rank_counts, groups }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Largest multiplicity of any rank.
    pub fn max_count(&self) -> u8 {
        self.groups.first().map_or(0, |(_, c)| *c)
    }

    /// Ranks with their counts, ascending by rank.
    pub fn by_rank(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL.iter().copied().map(|r| (r, self.count(r))).filter(|(_, c)| *c > 0)
    }

    pub fn has_count(&self, n: u8) -> bool {
        self.groups.iter().any(|(_, count)| *count == n)
    }

    /// Number of distinct ranks appearing exactly twice.
    pub fn pair_count(&self) -> usize {
        self.groups.iter().filter(|(_, count)| *count == 2).count()
    }

    /// Number of distinct ranks holding at least `n` cards.
    pub fn ranks_at_least(&self, n: u8) -> usize {
        self.groups.iter().filter(|(_, count)| *count >= n).count()
    }

    /// A rank appearing three times and a different rank appearing twice.
    pub fn has_full_house(&self) -> bool {
        self.has_count(3) && self.has_count(2)
    }

    /// First rank (strongest group first) holding at least `n` cards.
    pub fn first_at_least(&self, n: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count >= n).map(|(rank, _)| *rank)
    }

    /// Some rank other than `except` holding at least `n` cards.
    pub fn any_other_at_least(&self, except: Rank, n: u8) -> bool {
        self.groups.iter().any(|(rank, count)| *rank != except && *count >= n)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn quads() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 4), (13, 1)]));
        assert!(groups.has_count(4));
        assert_eq!(groups.max_count(), 4);
        assert_eq!(groups.first_at_least(4), Some(Rank::Ace));
        assert_eq!(groups.pair_count(), 0);
    }

    #[test]
    fn full_house() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 3), (13, 2)]));
        assert!(groups.has_full_house());
        assert!(groups.any_other_at_least(Rank::Ace, 2));
        assert!(!groups.any_other_at_least(Rank::King, 3));
    }

    #[test]
    fn trips_without_pair_is_not_full_house() {
        let groups = RankGroups::from_counts(&make_counts(&[(10, 3), (5, 1), (3, 1)]));
        assert!(groups.has_count(3));
        assert!(!groups.has_full_house());
    }

    #[test]
    fn two_pair_counts() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 2), (13, 2), (10, 1)]));
        assert_eq!(groups.pair_count(), 2);
        assert_eq!(groups.count(Rank::Ten), 1);
        assert_eq!(groups.count(Rank::Two), 0);
    }

    #[test]
    fn ranks_at_least_counts_trips_as_paired() {
        let groups = RankGroups::from_counts(&make_counts(&[(2, 3), (14, 2), (9, 1)]));
        assert_eq!(groups.ranks_at_least(2), 2);
        assert_eq!(groups.ranks_at_least(3), 1);
        assert_eq!(groups.pair_count(), 1);
    }

    #[test]
    fn sorting_and_by_rank() {
        let groups = RankGroups::from_counts(&make_counts(&[(5, 1), (14, 1), (10, 2)]));
        let ranks: Vec<Rank> = groups.groups().iter().map(|(r, _)| *r).collect();
        assert_eq!(ranks, vec![Rank::Ten, Rank::Ace, Rank::Five]);
        let asc: Vec<(Rank, u8)> = groups.by_rank().collect();
        assert_eq!(asc, vec![(Rank::Five, 1), (Rank::Ten, 2), (Rank::Ace, 1)]);
    }
}
