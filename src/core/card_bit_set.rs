use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use super::{Card, CardError, parse_cards};
use std::fmt::Debug;

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    // The bitset
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1u64 << 52) - 1;

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use rs_poker_equity::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Build a set from cards, failing on the first card seen twice.
    ///
    /// ```
    /// use rs_poker_equity::core::{Card, CardBitSet};
    ///
    /// let ok = CardBitSet::try_from_cards([Card::from(0), Card::from(1)]);
    /// assert_eq!(2, ok.unwrap().count());
    ///
    /// let dup = CardBitSet::try_from_cards([Card::from(3), Card::from(3)]);
    /// assert!(dup.is_err());
    /// ```
    pub fn try_from_cards<I>(cards: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut set = Self::new();
        for card in cards {
            if !set.insert(card) {
                return Err(CardError::DuplicateCard(card));
            }
        }
        Ok(set)
    }

    /// Insert a card. Returns false if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let present = self.contains(card);
        self.cards |= 1u64 << u8::from(card);
        !present
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1u64 << u8::from(card))) != 0
    }

    /// Is the bitset empty ?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// Do the two sets share no cards ?
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.cards & other.cards == 0
    }

    pub fn iter(&self) -> CardBitSetIter {
        CardBitSetIter(self.cards)
    }
}

impl Default for CardBitSet {
    /// Create a new bitset with all the cards in it
    /// ```
    /// use rs_poker_equity::core::CardBitSet;
    ///
    /// let cards = CardBitSet::default();
    ///
    /// assert_eq!(52, cards.count());
    /// assert!(!cards.is_empty());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl FromIterator<Card> for CardBitSet {
    /// Duplicates collapse silently. Use `try_from_cards` to reject them.
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl BitOr<CardBitSet> for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign<CardBitSet> for CardBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            cards: !self.cards & FIFTY_TWO_ONES, // Ensure we only keep the first 52 bits
        }
    }
}

/// Parse `,`, `;` or whitespace separated card tokens into a set. A card
/// listed twice is an error.
///
/// ```
/// use rs_poker_equity::core::parse_card_set;
///
/// assert_eq!(3, parse_card_set("2C, 7D;TH").unwrap().count());
/// assert!(parse_card_set("2C,2C").is_err());
/// assert!(parse_card_set("").unwrap().is_empty());
/// ```
pub fn parse_card_set(input: &str) -> Result<CardBitSet, CardError> {
    CardBitSet::try_from_cards(parse_cards(input)?)
}

/// The iterator for the CardBitSet
/// It yields cards from the lowest index up.
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1u64 << card);

        Some(Card::from(card as u8))
    }
}
