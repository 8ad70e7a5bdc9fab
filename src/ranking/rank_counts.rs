use crate::cards::{Card, Rank};

/// Base of the positional score: one digit per rank.
const SCORE_BASE: u64 = Rank::COUNT as u64;

/// Frequency table of ranks in a hand, indexed by `Rank::index()`.
///
/// Example: AAK92 counts as [Two: 1, Nine: 1, King: 1, Ace: 2], every other rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankCounts {
    counts: [u32; Rank::COUNT],
}

impl RankCounts {
    pub fn tally<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut counts = [0u32; Rank::COUNT];
        for card in cards {
            counts[card.rank().index()] += 1;
        }
        Self { counts }
    }

    #[cfg(test)]
    pub fn get(&self, rank: Rank) -> u32 {
        self.counts[rank.index()]
    }

    /// Base-13 number whose digits are the counts, Ace as the most significant digit.
    pub fn score(&self) -> u64 {
        self.counts.iter().rev().fold(0u64, |score, &c| SCORE_BASE * score + u64::from(c))
    }

    /// Product of the nonzero counts; 1 for a hand without repeated ranks.
    pub fn product(&self) -> u32 {
        self.counts.iter().filter(|&&c| c != 0).product()
    }

    pub fn has_count(&self, n: u32) -> bool {
        self.counts.contains(&n)
    }

    /// Distance between the lowest and highest ranks that appear exactly once.
    pub fn singleton_span(&self) -> Option<usize> {
        let first = self.counts.iter().position(|&c| c == 1)?;
        let last = self.counts.iter().rposition(|&c| c == 1)?;
        Some(last - first)
    }

    #[cfg(test)]
    pub fn as_array(&self) -> &[u32; Rank::COUNT] {
        &self.counts
    }
}
