use crate::core::card::Card;
use crate::core::deck::Deck;
use std::ops::{Index, RangeFull};

use rand::Rng;
use rand::seq::IndexedRandom;

/// `FlatDeck` is the live cards laid out in a vector so they can be
/// sampled uniformly. It does not provide contains methods.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl FlatDeck {
    /// How many cards are there in the deck?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pick `n` distinct cards uniformly at random. Asking for more cards
    /// than the deck holds returns every card.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use rs_poker_equity::core::{Deck, FlatDeck};
    ///
    /// let deck: FlatDeck = Deck::default().into();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let cards = deck.sample(&mut rng, 5);
    ///
    /// assert_eq!(5, cards.len());
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Card> {
        self.cards.choose_multiple(rng, n).copied().collect()
    }
}

impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

/// Allow creating a flat deck from a Deck
impl From<Deck> for FlatDeck {
    /// Flatten this deck. The cards come out sorted so that the same
    /// deck always gives the same flat deck, which keeps seeded
    /// sampling reproducible.
    fn from(value: Deck) -> Self {
        Self {
            cards: value.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::card::{Suit, Value};

    #[test]
    fn test_deck_from() {
        let fd: FlatDeck = Deck::default().into();
        assert_eq!(52, fd.len());
        assert!(fd[..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_vec() {
        let c = Card {
            value: Value::Nine,
            suit: Suit::Heart,
        };

        let flat_deck: FlatDeck = vec![c].into();

        assert_eq!(1, flat_deck.len());
        assert_eq!(&[c], &flat_deck[..]);
        assert!(!flat_deck.is_empty());
    }

    #[test]
    fn test_sample_is_distinct_and_from_deck() {
        let deck = Deck::remaining(&[Card::new(Value::Ace, Suit::Club)]).unwrap();
        let fd: FlatDeck = deck.into();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let cards = fd.sample(&mut rng, 5);
            let uniq: HashSet<Card> = cards.iter().copied().collect();
            assert_eq!(5, uniq.len());
            assert!(cards.iter().all(|c| deck.contains(c)));
        }
    }

    #[test]
    fn test_sample_more_than_len() {
        let fd: FlatDeck = vec![Card::from(0), Card::from(1)].into();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(2, fd.sample(&mut rng, 5).len());
    }

    #[test]
    fn test_sample_seeded_rng() {
        let fd: FlatDeck = Deck::default().into();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        assert_eq!(fd.sample(&mut rng_one, 5), fd.sample(&mut rng_two, 5));
    }
}
