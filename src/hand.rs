use crate::cards::{join_cards, parse_cards, Card};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a rankable hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    WrongSize(usize),
    #[error("duplicate card in hand: {0:#}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// An ordered set of distinct cards, iterated lowest card first.
///
/// `Hand::new` is permissive: duplicates collapse and any size is accepted.
/// `Hand::try_new` (and `FromStr`) require exactly five distinct cards.
///
/// ```
/// use poker_ranking::hand::Hand;
///
/// let hand: Hand = "A\u{2665}-K\u{2660}-2\u{2666}-5\u{2663}-Q\u{2665}".parse().unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(format!("{hand:#}"), "2\u{2666}5\u{2663}Q\u{2665}K\u{2660}A\u{2665}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: BTreeSet<Card>,
}

impl Hand {
    pub fn new<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self { cards: cards.into_iter().collect() }
    }

    pub fn try_new<I>(cards: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards: Vec<Card> = cards.into_iter().collect();
        validate_hand(&cards)?;
        Ok(Self::new(cards))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True when the hand holds exactly [`HAND_SIZE`] cards.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::collections::btree_set::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join_cards(f, &self.cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_new(cards)
    }
}

/// Check that `cards` is exactly five distinct cards.
///
/// ```
/// use poker_ranking::cards::{Card, Rank, Suit};
/// use poker_ranking::hand::{validate_hand, HandError};
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(validate_hand(&[ace]), Err(HandError::WrongSize(1)));
/// ```
pub fn validate_hand(cards: &[Card]) -> Result<(), HandError> {
    if cards.len() != HAND_SIZE {
        return Err(HandError::WrongSize(cards.len()));
    }
    let mut seen = HashSet::with_capacity(HAND_SIZE);
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(HandError::DuplicateCard(*dup));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn royal_clubs() -> Vec<Card> {
        vec![
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Ten, Suit::Clubs),
        ]
    }

    #[test]
    fn permissive_hand_collapses_duplicates() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let h = Hand::new([a, a, Card::new(Rank::Two, Suit::Clubs)]);
        assert_eq!(h.len(), 2);
        assert!(!h.is_complete());
        assert!(h.contains(&a));
    }

    #[test]
    fn strict_hand_checks_size_and_dupes() {
        assert!(Hand::try_new(royal_clubs()).unwrap().is_complete());

        let mut short = royal_clubs();
        short.pop();
        assert_eq!(Hand::try_new(short), Err(HandError::WrongSize(4)));

        let mut dup = royal_clubs();
        dup[4] = dup[0];
        assert_eq!(Hand::try_new(dup), Err(HandError::DuplicateCard(Card::new(Rank::Ace, Suit::Clubs))));
    }

    #[test]
    fn iterates_lowest_first() {
        let h = Hand::new(royal_clubs());
        let ranks: Vec<Rank> = h.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
    }

    #[test]
    fn display_concatenates_cards() {
        let h = Hand::new(royal_clubs());
        assert_eq!(h.to_string(), "10\u{2663}J\u{2663}Q\u{2663}K\u{2663}A\u{2663}");

        let red: Hand = "Kh Ah Qh Jh 10h".parse().unwrap();
        assert_eq!(
            red.to_string(),
            "10\x1b[1;31m\u{2665}\x1b[0mJ\x1b[1;31m\u{2665}\x1b[0mQ\x1b[1;31m\u{2665}\x1b[0m\
             K\x1b[1;31m\u{2665}\x1b[0mA\x1b[1;31m\u{2665}\x1b[0m"
        );
    }

    #[test]
    fn parsing_rejects_bad_input() {
        assert!(matches!("As Kx Qs Js Ts".parse::<Hand>(), Err(HandError::CardParse(_))));
        assert_eq!("As Ks Qs".parse::<Hand>(), Err(HandError::WrongSize(3)));
        assert!(matches!("As As Qs Js Ts".parse::<Hand>(), Err(HandError::DuplicateCard(_))));
    }
}
