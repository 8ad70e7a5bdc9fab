use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot draw {requested} cards from a deck of {available}")]
    NotEnoughCards { requested: usize, available: usize },
}

/// A deck of cards. The top of the deck is the end of the list.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, rank-major: 2♣ 2♦ 2♥ 2♠ 3♣ ... A♠ (A♠ on top).
    ///
    /// ```
    /// use poker_ranking::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::with_ranks(&Rank::ALL)
    }

    /// Every suit of the given ranks, e.g. a short deck from Seven to Ace.
    pub fn with_ranks(ranks: &[Rank]) -> Self {
        let mut cards = Vec::with_capacity(ranks.len() * Suit::COUNT);
        for &r in ranks {
            for &s in &Suit::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        log::debug!("shuffling {} cards with seed {seed}", self.cards.len());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    ///
    /// Returns [`DeckError::NotEnoughCards`] and leaves the deck untouched if
    /// fewer than `n` cards remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure(n)?;
        Ok((0..n).filter_map(|_| self.draw()).collect())
    }

    /// Deal `per_hand` cards to each of `players` hands, one card at a time
    /// round the table.
    ///
    /// Fails with [`DeckError::NotEnoughCards`], dealing nothing, when the deck
    /// cannot cover every seat. A request too large to count reports
    /// `usize::MAX` as the number of cards requested.
    ///
    /// ```
    /// use poker_ranking::cards::Suit;
    /// use poker_ranking::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// let hands = deck.deal(5, 4).unwrap();
    /// assert_eq!(hands.len(), 4);
    /// assert!(hands[0].iter().all(|c| c.suit() == Suit::Spades));
    /// assert_eq!(deck.len(), 32);
    /// ```
    pub fn deal(&mut self, per_hand: usize, players: usize) -> Result<Vec<Hand>, DeckError> {
        self.ensure(per_hand.checked_mul(players).unwrap_or(usize::MAX))?;
        if players == 0 {
            return Ok(Vec::new());
        }
        log::debug!("dealing {per_hand} cards to {players} players");
        let mut seats: Vec<Vec<Card>> = vec![Vec::with_capacity(per_hand); players];
        for _ in 0..per_hand {
            for seat in seats.iter_mut() {
                seat.extend(self.draw());
            }
        }
        Ok(seats.into_iter().map(Hand::new).collect())
    }

    fn ensure(&self, requested: usize) -> Result<(), DeckError> {
        if requested > self.cards.len() {
            return Err(DeckError::NotEnoughCards { requested, available: self.cards.len() });
        }
        Ok(())
    }
}
