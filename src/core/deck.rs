use super::card::parse_cards;
use super::{Card, CardBitSet, CardBitSetIter, CardError};

/// Deck struct that can tell quickly if a card is in the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(CardBitSet);

impl Deck {
    /// The cards left once `excluded` is taken out of the full 52 card
    /// deck. Each excluded card may only be listed once.
    ///
    /// ```
    /// use rs_poker_equity::core::{Card, Deck};
    ///
    /// let gone = [Card::try_from("AC").unwrap(), Card::try_from("KD").unwrap()];
    /// let deck = Deck::remaining(&gone).unwrap();
    ///
    /// assert_eq!(50, deck.len());
    /// assert!(!deck.contains(&gone[0]));
    /// ```
    pub fn remaining(excluded: &[Card]) -> Result<Self, CardError> {
        let excluded = CardBitSet::try_from_cards(excluded.iter().copied())?;
        Ok(Self::without(excluded))
    }

    /// Same as `remaining` but the excluded cards are given as
    /// `,` or `;` separated tokens.
    ///
    /// ```
    /// use rs_poker_equity::core::Deck;
    ///
    /// assert_eq!(48, Deck::remaining_from_str("AC,AD;AH,AS").unwrap().len());
    /// assert!(Deck::remaining_from_str("AC,AC").is_err());
    /// assert!(Deck::remaining_from_str("AC,1C").is_err());
    /// ```
    pub fn remaining_from_str(excluded: &str) -> Result<Self, CardError> {
        Self::remaining(&parse_cards(excluded)?)
    }

    /// The full deck minus an already validated set of cards.
    pub fn without(excluded: CardBitSet) -> Self {
        Self(!excluded)
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.0.count()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use rs_poker_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        Self(CardBitSet::default())
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = CardBitSetIter;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> CardBitSetIter {
        self.0.into_iter()
    }
}
