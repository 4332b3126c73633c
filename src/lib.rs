//! Playing cards and the piles used by turn-based card games.
//!
//! The crate models two-faced flippable cards ([`Card`], [`PlayingCard`]),
//! parseable rank and suit value objects, and a family of pile types
//! ([`Deck`], [`Hand`], [`OrderedHand`], and the klondike piles in
//! [`solitaire`]) sharing their transfer and flip operations through the
//! [`Pile`] trait. Every card carries a [`CardId`], so piles track membership
//! by identity while display and parsing compare by face.
//!
//! # Example
//!
//! ```
//! use bigcards::{Deck, Hand, Pile};
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::standard(false);
//! deck.shuffle(&mut rng);
//!
//! let mut hand = Hand::new().with_name("Alice");
//! hand.add(deck.draw()?);
//! hand.add(deck.draw()?);
//!
//! assert_eq!(hand.len(), 2);
//! assert_eq!(deck.len(), 50);
//! # Ok::<(), bigcards::PileError>(())
//! ```

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod pile;
pub mod rank;
pub mod solitaire;
pub mod suit;

// Re-export main types
pub use card::{Card, CardId, FACE_DOWN, PlayingCard};
pub use deck::{DECK_SIZE, Deck, SortOrder};
pub use error::{DealError, FillError, ParseError, PileError};
pub use hand::{Evaluator, Hand, OrderedHand, PropValue, card_sum};
pub use pile::{Pile, UnorderedPile};
pub use rank::Rank;
pub use suit::{Color, Suit};
