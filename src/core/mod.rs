//! This is the core module. It exports the card level code that
//! knows nothing about equity simulation.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value, parse_cards};

/// Errors for parsing and validating cards.
mod error;
pub use self::error::CardError;

/// A 52 bit set of cards.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter, parse_card_set};

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
/// Export the flat deck used for sampling.
pub use self::flat_deck::FlatDeck;

/// Two card hands.
mod hand;
pub use self::hand::Hand;
