//! poker-ranking: five-card poker hand classification
//!
//! Goals:
//! - Deterministic ranking of a five-card hand into a [`ranking::Category`] plus a tie-break score
//! - Small value types (`Card`, `Hand`, `Ranking`) that are `Copy` or cheaply cloned
//! - Permissive by default; strict validation through `Result` when asked for
//!
//! Category order (weakest first): None, High Card, Pair, Double Pair, Three of a Kind,
//! Flush, Straight, Full House, Four of a Kind, Straight Flush. Ace is always high.
//!
//! ## Quick start: rank a hand
//! ```
//! use poker_ranking::cards::{Card, Rank, Suit};
//! use poker_ranking::hand::Hand;
//! use poker_ranking::ranking::{Category, Ranking};
//!
//! let hand = Hand::try_new([
//!     Card::new(Rank::Queen, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Eight, Suit::Diamonds),
//!     Card::new(Rank::Eight, Suit::Clubs),
//! ]).unwrap();
//!
//! let ranking = Ranking::new(&hand);
//! assert_eq!(ranking.category(), Category::FullHouse);
//! ```
//!
//! ## CLI
//! Rank hands or deal a table with:
//! ```sh
//! cargo run --bin poker-rank -- rank "A♣ K♣ Q♥ J♦ 10♣" "9c Ad 9h 9d Qc"
//! cargo run --bin poker-rank -- deal --players 4 --seed 7
//! ```

pub mod cards;
pub mod deck;
pub mod hand;
pub mod ranking;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
