pub(crate) mod rank_counts;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{validate_hand, Hand, HandError};
use core::cmp::Ordering;
use rank_counts::RankCounts;
use std::fmt;
use std::str::FromStr;
use straight_info::StraightInfo;
use suit_info::SuitInfo;

/// Hand category from weakest to strongest.
///
/// Flush ranks below Straight here, unlike standard poker; callers rely on
/// this order. `None` is only produced for malformed hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    None = 0,
    HighCard = 1,
    Pair = 2,
    DoublePair = 3,
    ThreeOfAKind = 4,
    Flush = 5,
    Straight = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::None,
        Category::HighCard,
        Category::Pair,
        Category::DoublePair,
        Category::ThreeOfAKind,
        Category::Flush,
        Category::Straight,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::None => "None",
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::DoublePair => "Double Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Strength of a hand: its category, then a rank-frequency score within the category.
///
/// Ordering compares `category` first and `score` second (field order matters for
/// the derived `Ord`). Equal rankings are tied hands, not necessarily equal cards.
/// Suits never enter the score.
///
/// ```
/// use poker_ranking::ranking::{Category, Ranking};
///
/// let queen_high: Ranking = "10c 9h Qc 7d Jc".parse().unwrap();
/// let king_high: Ranking = "10c Kh Qc 7d Jc".parse().unwrap();
/// assert_eq!(queen_high.category(), Category::HighCard);
/// assert!(queen_high < king_high);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ranking {
    category: Category,
    score: u64,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankingError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

impl Ranking {
    /// Rank a hand without validating it. Hands that are not five distinct cards
    /// get a deterministic but meaningless category, possibly `Category::None`.
    pub fn new(hand: &Hand) -> Self {
        let counts = RankCounts::tally(hand);
        let score = counts.score();
        let suits = SuitInfo::detect(hand);
        let straight = StraightInfo::detect(&counts);

        let category = match counts.product() {
            1 => match (straight.is_straight, suits.is_flush) {
                (true, true) => Category::StraightFlush,
                (true, false) => Category::Straight,
                (false, true) => Category::Flush,
                (false, false) => Category::HighCard,
            },
            2 => Category::Pair,
            3 => Category::ThreeOfAKind,
            4 if counts.has_count(4) => Category::FourOfAKind,
            4 => Category::DoublePair,
            6 => Category::FullHouse,
            _ => Category::None,
        };

        log::trace!("ranked {hand:#} as {category} (score {score}, {} suits)", suits.distinct);
        Ranking { category, score }
    }

    /// Rank exactly five distinct cards, rejecting anything else.
    ///
    /// ```
    /// use poker_ranking::cards::{Card, Rank, Suit};
    /// use poker_ranking::hand::HandError;
    /// use poker_ranking::ranking::{Category, Ranking, RankingError};
    ///
    /// let quads = [
    ///     Card::new(Rank::Nine, Suit::Clubs),
    ///     Card::new(Rank::Nine, Suit::Diamonds),
    ///     Card::new(Rank::Nine, Suit::Hearts),
    ///     Card::new(Rank::Nine, Suit::Spades),
    ///     Card::new(Rank::Ace, Suit::Clubs),
    /// ];
    /// assert_eq!(Ranking::try_new(&quads).unwrap().category(), Category::FourOfAKind);
    /// assert_eq!(
    ///     Ranking::try_new(&quads[..4]),
    ///     Err(RankingError::InvalidHand(HandError::WrongSize(4)))
    /// );
    /// ```
    pub fn try_new(cards: &[Card]) -> Result<Self, RankingError> {
        if let Err(e) = validate_hand(cards) {
            log::debug!("rejecting hand of {} cards: {e}", cards.len());
            return Err(e.into());
        }
        Ok(Self::new(&Hand::new(cards.iter().copied())))
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// Tie-break value within a category; higher is stronger.
    pub const fn score(&self) -> u64 {
        self.score
    }
}

impl From<&Hand> for Ranking {
    fn from(hand: &Hand) -> Self {
        Ranking::new(hand)
    }
}

impl TryFrom<&[Card]> for Ranking {
    type Error = RankingError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Ranking::try_new(cards)
    }
}

impl FromStr for Ranking {
    type Err = RankingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hand = Hand::from_str(s)?;
        Ok(Ranking::new(&hand))
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.score)
    }
}

/// Compare two five-card hands. Returns the ordering or a validation error.
///
/// ```
/// use poker_ranking::cards::parse_cards;
/// use poker_ranking::ranking::compare_hands;
/// use std::cmp::Ordering;
///
/// let jacks = parse_cards("Jh Js 10d 9c 7h").unwrap();
/// let queens = parse_cards("Qd Qs 10d 9c 8h").unwrap();
/// assert_eq!(compare_hands(&jacks, &queens).unwrap(), Ordering::Less);
/// ```
pub fn compare_hands(a: &[Card], b: &[Card]) -> Result<Ordering, RankingError> {
    let ra = Ranking::try_new(a)?;
    let rb = Ranking::try_new(b)?;
    Ok(ra.cmp(&rb))
}

/// Rank every hand and return `(seat, ranking)` strongest first.
/// Tied hands keep their seat order.
pub fn showdown(hands: &[Hand]) -> Vec<(usize, Ranking)> {
    let mut results: Vec<(usize, Ranking)> =
        hands.iter().enumerate().map(|(seat, hand)| (seat, Ranking::new(hand))).collect();
    results.sort_by(|a, b| b.1.cmp(&a.1));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn category_order_puts_flush_below_straight() {
        assert!(Category::None < Category::HighCard);
        assert!(Category::ThreeOfAKind < Category::Flush);
        assert!(Category::Flush < Category::Straight);
        assert!(Category::Straight < Category::FullHouse);
        assert!(Category::FourOfAKind < Category::StraightFlush);
        assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ordinal_follows_category_order() {
        assert_eq!(Category::None.ordinal(), 0);
        assert_eq!(Category::Flush.ordinal(), 5);
        assert_eq!(Category::StraightFlush.ordinal(), 9);
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(usize::from(c.ordinal()), i);
        }
    }

    #[test]
    fn four_of_a_kind_and_double_pair_share_product() {
        let quads = Ranking::new(&hand("9c 9d 9h 9s Ac"));
        let two_pair = Ranking::new(&hand("9c 9d Ah As Qc"));
        assert_eq!(quads.category(), Category::FourOfAKind);
        assert_eq!(two_pair.category(), Category::DoublePair);
    }

    #[test]
    fn malformed_hands_are_permissive() {
        let four =
            Hand::new(hand("Ac Kd Qc Jc 10c").iter().copied().filter(|c| c.rank() != Rank::Ten));
        assert_eq!(Ranking::new(&four).category(), Category::HighCard);

        // 3 x 3 has no category
        let six = Hand::new([
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Diamonds),
            Card::new(Rank::Eight, Suit::Clubs),
            Card::new(Rank::Eight, Suit::Hearts),
        ]);
        assert_eq!(Ranking::new(&six).category(), Category::None);

        let empty = Ranking::new(&Hand::default());
        assert_eq!(empty.category(), Category::HighCard);
        assert_eq!(empty.score(), 0);
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let c = Card::new(Rank::Two, Suit::Clubs);
        let cards = [
            c,
            c,
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
        ];
        assert_eq!(
            Ranking::try_new(&cards),
            Err(RankingError::InvalidHand(HandError::DuplicateCard(c)))
        );
        assert!(Ranking::try_from(&cards[..]).is_err());
    }

    #[test]
    fn strict_and_permissive_agree_on_valid_hands() {
        let h = hand("Qc Qs Qh 8d 8c");
        let strict = Ranking::try_new(&h.to_vec()).unwrap();
        assert_eq!(strict, Ranking::from(&h));
        assert_eq!(strict.category(), Category::FullHouse);
    }

    #[test]
    fn display_shows_category_and_score() {
        let r = Ranking::new(&hand("As Ks Qs Js 10s"));
        assert_eq!(r.to_string(), format!("Straight Flush ({})", r.score()));
    }

    #[test]
    fn showdown_orders_strongest_first_and_keeps_ties_stable() {
        let hands = vec![
            hand("2c 3d 4h 5s 7c"),
            hand("Ac Ad 9h 7d Kc"),
            hand("2d 3h 4s 5c 7d"),
            hand("Ac Kc Qh Jd 10c"),
        ];
        let seats: Vec<usize> = showdown(&hands).iter().map(|(seat, _)| *seat).collect();
        assert_eq!(seats, vec![3, 1, 0, 2]);
    }
}
