use super::rank_counts::RankCounts;

/// Number of rank steps from the bottom to the top card of a five-card straight.
const STRAIGHT_SPAN: usize = 4;

/// Whether the singleton ranks of a hand form an unbroken run of five.
/// Ace only plays high; there is no A-2-3-4-5 wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    pub fn detect(counts: &RankCounts) -> Self {
        StraightInfo { is_straight: counts.singleton_span() == Some(STRAIGHT_SPAN) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn detect(ranks: &[Rank]) -> StraightInfo {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect();
        StraightInfo::detect(&RankCounts::tally(&cards))
    }

    #[test]
    fn test_ace_high_straight() {
        assert!(detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]).is_straight);
    }

    #[test]
    fn test_low_straight() {
        assert!(detect(&[Rank::Six, Rank::Five, Rank::Four, Rank::Three, Rank::Two]).is_straight);
    }

    #[test]
    fn test_unsorted_input() {
        assert!(detect(&[Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen]).is_straight);
    }

    #[test]
    fn test_no_wheel() {
        assert!(!detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]).is_straight);
    }

    #[test]
    fn test_gap_is_not_straight() {
        assert!(!detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]).is_straight);
    }

    #[test]
    fn test_empty_is_not_straight() {
        assert!(!StraightInfo::detect(&RankCounts::default()).is_straight);
    }
}
