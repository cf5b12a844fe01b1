use super::rank_groups::RankGroups;
use super::rank_set::RankSet;
use super::suit_info::SuitInfo;
use crate::cards::Card;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub is_flush: bool,
    pub is_straight: bool,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let rank_groups = RankGroups::from_cards(cards);
        let is_flush = SuitInfo::from_cards(cards).is_flush();
        let is_straight = RankSet::from_cards(cards).has_straight();
        Self { rank_groups, is_flush, is_straight }
    }
}
