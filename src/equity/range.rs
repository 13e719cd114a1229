use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::{CardBitSet, Hand, parse_cards};

use super::EquityError;

/// The hands one player might hold. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Hand>", into = "Vec<Hand>"))]
pub struct HandRange(Vec<Hand>);

impl HandRange {
    /// A range must hold at least one hand. A range built on its own is
    /// reported as range `0`; `parse_ranges` reports its real position.
    pub fn new(hands: Vec<Hand>) -> Result<Self, EquityError> {
        Self::at_position(hands, 0)
    }

    fn at_position(hands: Vec<Hand>, idx: usize) -> Result<Self, EquityError> {
        if hands.is_empty() {
            return Err(EquityError::EmptyRange(idx));
        }
        Ok(Self(hands))
    }

    /// Parse a single range where consecutive card tokens pair up into
    /// hands.
    ///
    /// ```
    /// use rs_poker_equity::equity::HandRange;
    ///
    /// let range = HandRange::new_from_str("AC,AD,KH,KS").unwrap();
    /// assert_eq!(2, range.len());
    ///
    /// assert!(HandRange::new_from_str("AC,AD,KH").is_err());
    /// assert!(HandRange::new_from_str("").is_err());
    /// ```
    pub fn new_from_str(range_str: &str) -> Result<Self, EquityError> {
        parse_range(range_str, 0)
    }

    /// Draw one hand uniformly.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Hand {
        // The constructor guarantees at least one hand.
        self.0.choose(rng).unwrap_or_else(|| &self.0[0])
    }

    pub fn hands(&self) -> &[Hand] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every card used by any hand in the range.
    pub fn card_set(&self) -> CardBitSet {
        self.0.iter().flat_map(|h| h.iter().copied()).collect()
    }
}

impl TryFrom<Vec<Hand>> for HandRange {
    type Error = EquityError;

    fn try_from(hands: Vec<Hand>) -> Result<Self, Self::Error> {
        Self::new(hands)
    }
}

impl From<HandRange> for Vec<Hand> {
    fn from(range: HandRange) -> Self {
        range.0
    }
}

fn parse_range(range_str: &str, idx: usize) -> Result<HandRange, EquityError> {
    let cards = parse_cards(range_str)?;
    if cards.len() % 2 != 0 {
        return Err(EquityError::OddRangeTokens { range: idx });
    }
    let hands = cards
        .chunks_exact(2)
        .map(Hand::from_cards)
        .collect::<Result<Vec<_>, _>>()?;
    HandRange::at_position(hands, idx)
}

/// Parse several ranges separated by `;`. Inside a range card tokens are
/// separated by `,` and every two tokens make one hand, so
/// `"AC,AD;KC,KD"` is two ranges holding one hand each.
///
/// ```
/// use rs_poker_equity::equity::parse_ranges;
///
/// let ranges = parse_ranges("AC,AD;KC,KD,QH,QS").unwrap();
/// assert_eq!(2, ranges.len());
/// assert_eq!(2, ranges[1].len());
/// ```
pub fn parse_ranges(input: &str) -> Result<Vec<HandRange>, EquityError> {
    input
        .split(';')
        .enumerate()
        .map(|(idx, range_str)| parse_range(range_str, idx))
        .collect()
}
