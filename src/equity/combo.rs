use std::fmt;

use crate::core::{Card, CardBitSet, CardError, parse_cards};

use super::Board;

/// Two hole cards plus a five card board, sorted into canonical order.
/// This is the key used to look up outcome tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
pub struct Combo([Card; 7]);

impl Combo {
    /// Join two hole cards with a board. The hole cards must not be on
    /// the board.
    ///
    /// ```
    /// use rs_poker_equity::core::{Card, parse_cards};
    /// use rs_poker_equity::equity::{Board, Combo};
    ///
    /// let board = Board::new(&parse_cards("2C,7D,9H,JS,KC").unwrap()).unwrap();
    /// let ac = Card::try_from("AC").unwrap();
    /// let ad = Card::try_from("AD").unwrap();
    ///
    /// let combo = Combo::new([ad, ac], &board).unwrap();
    /// assert_eq!("2C,7D,9H,JS,KC,AC,AD", combo.to_string());
    /// ```
    pub fn new(hole: [Card; 2], board: &Board) -> Result<Self, CardError> {
        let b = board.cards();
        Self::from_array([hole[0], hole[1], b[0], b[1], b[2], b[3], b[4]])
    }

    /// Build a combo from seven distinct cards in any order.
    pub fn from_cards(cards: &[Card]) -> Result<Self, CardError> {
        let cards: [Card; 7] = cards
            .try_into()
            .map_err(|_| CardError::ComboSize(cards.len()))?;
        Self::from_array(cards)
    }

    /// Parse a row of seven card tokens, the way outcome tables are
    /// usually stored. The row does not need to be pre sorted.
    pub fn new_from_str(row: &str) -> Result<Self, CardError> {
        Self::from_cards(&parse_cards(row)?)
    }

    fn from_array(mut cards: [Card; 7]) -> Result<Self, CardError> {
        CardBitSet::try_from_cards(cards)?;
        cards.sort_unstable();
        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card; 7] {
        &self.0
    }
}

impl TryFrom<Vec<Card>> for Combo {
    type Error = CardError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(&cards)
    }
}

impl From<Combo> for Vec<Card> {
    fn from(combo: Combo) -> Self {
        combo.0.to_vec()
    }
}

impl std::str::FromStr for Combo {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_does_not_matter() {
        let one: Combo = "AC,AD,2C,7D,9H,JS,KC".parse().unwrap();
        let two: Combo = "KC,JS,9H,7D,2C,AD,AC".parse().unwrap();
        assert_eq!(one, two);
        assert!(one.cards().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hole_card_on_board() {
        let board = Board::new(&parse_cards("2C,7D,9H,JS,KC").unwrap()).unwrap();
        let two_clubs = Card::try_from("2C").unwrap();
        let ace = Card::try_from("AC").unwrap();
        assert_eq!(
            Err(CardError::DuplicateCard(two_clubs)),
            Combo::new([ace, two_clubs], &board)
        );
    }

    #[test]
    fn test_wrong_size() {
        assert_eq!(
            Err(CardError::ComboSize(6)),
            Combo::new_from_str("AC,AD,2C,7D,9H,JS")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_resorts_rows() {
        let combo: Combo =
            serde_json::from_str(r#"["KC","JS","9H","7D","2C","AD","AC"]"#).unwrap();
        assert_eq!(Combo::new_from_str("2C,7D,9H,JS,KC,AC,AD").unwrap(), combo);
    }
}
