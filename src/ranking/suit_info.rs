use crate::cards::{Card, Suit};

/// How many distinct suits a hand holds, and whether that makes a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub distinct: usize,
    pub is_flush: bool,
}

impl SuitInfo {
    pub fn detect<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut present = [false; Suit::COUNT];
        for card in cards {
            present[card.suit().index()] = true;
        }
        let distinct = present.iter().filter(|&&p| p).count();
        SuitInfo { distinct, is_flush: distinct == 1 }
    }
}
