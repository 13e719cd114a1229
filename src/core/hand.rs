use std::fmt;

use super::card::parse_cards;
use super::{Card, CardBitSet, CardError};

/// A player's two hole cards. The two cards are always distinct and
/// keep the order they were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Card; 2]", into = "[Card; 2]"))]
pub struct Hand([Card; 2]);

impl Hand {
    /// Create a hand from two cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_poker_equity::core::{Card, Hand, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Club);
    /// let king = Card::new(Value::King, Suit::Club);
    ///
    /// assert!(Hand::new(ace, king).is_ok());
    /// assert!(Hand::new(ace, ace).is_err());
    /// ```
    pub fn new(first: Card, second: Card) -> Result<Self, CardError> {
        if first == second {
            return Err(CardError::DuplicateCard(first));
        }
        Ok(Self([first, second]))
    }

    /// Create a hand from a slice that must hold exactly two cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, CardError> {
        match cards {
            [first, second] => Self::new(*first, *second),
            _ => Err(CardError::HandSize(cards.len())),
        }
    }

    /// Parse something like `"AC,AD"` or `"AC AD"`.
    pub fn new_from_str(hand_string: &str) -> Result<Self, CardError> {
        Self::from_cards(&parse_cards(hand_string)?)
    }

    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }

    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    pub fn card_set(&self) -> CardBitSet {
        self.0.iter().copied().collect()
    }
}

impl TryFrom<[Card; 2]> for Hand {
    type Error = CardError;

    fn try_from(cards: [Card; 2]) -> Result<Self, Self::Error> {
        Self::new(cards[0], cards[1])
    }
}

impl From<Hand> for [Card; 2] {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_new_from_str() {
        let hand = Hand::new_from_str("AC,AD").unwrap();
        assert_eq!(
            &[
                Card::new(Value::Ace, Suit::Club),
                Card::new(Value::Ace, Suit::Diamond)
            ],
            hand.cards()
        );
        assert_eq!("ACAD", hand.to_string());
    }

    #[test]
    fn test_wrong_size() {
        assert_eq!(Err(CardError::HandSize(1)), Hand::new_from_str("AC"));
        assert_eq!(Err(CardError::HandSize(3)), Hand::new_from_str("AC,KC,QC"));
    }

    #[test]
    fn test_duplicate_card() {
        let ace = Card::new(Value::Ace, Suit::Club);
        assert_eq!(Err(CardError::DuplicateCard(ace)), Hand::new_from_str("AC AC"));
    }

    #[test]
    fn test_card_set() {
        let hand = Hand::new_from_str("2C,7H").unwrap();
        let set = hand.card_set();
        assert_eq!(2, set.count());
        assert!(hand.iter().all(|c| set.contains(*c)));
        assert!(hand.contains(&Card::new(Value::Seven, Suit::Heart)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let hand = Hand::new_from_str("KS,QS").unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!("[\"KS\",\"QS\"]", json);
        assert_eq!(hand, serde_json::from_str::<Hand>(&json).unwrap());
        assert!(serde_json::from_str::<Hand>("[\"KS\",\"KS\"]").is_err());
    }
}
