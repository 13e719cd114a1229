use std::fmt;

use super::CardError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Every value, indexed by its discriminant.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    /// Anything above 12 is clamped to `Value::Ace`.
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(12))]
    }

    /// Parse the rank character of a card token.
    ///
    /// ```
    /// use rs_poker_equity::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// Every suit, indexed by its discriminant.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s.min(3))]
    }

    /// Parse the suit character of a card token. The canonical
    /// form is upper case but lower case is tolerated.
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'C' | 'c' => Some(Self::Club),
            'D' | 'd' => Some(Self::Diamond),
            'H' | 'h' => Some(Self::Heart),
            'S' | 's' => Some(Self::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'C',
            Self::Diamond => 'D',
            Self::Heart => 'H',
            Self::Spade => 'S',
        }
    }
}

/// One of the 52 cards. Ordering is by value then suit, which is the
/// canonical order used when sorting combos.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl From<u8> for Card {
    /// Cards are indexed `value * 4 + suit`.
    /// Indices past 51 saturate at the ace of spades.
    fn from(idx: u8) -> Self {
        let idx = idx.min(51);
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * 4 + card.suit as u8
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    /// Parse a two character token such as `"AC"` or `"9d"`.
    ///
    /// ```
    /// use rs_poker_equity::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_from("TH").unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Heart), card);
    /// assert!(Card::try_from("1H").is_err());
    /// assert!(Card::try_from("THS").is_err());
    /// ```
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let trimmed = token.trim();
        let mut chars = trimmed.chars();
        let (Some(vc), Some(sc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::MalformedToken(trimmed.to_string()));
        };
        let value = Value::from_char(vc).ok_or(CardError::UnexpectedValueChar(vc))?;
        let suit = Suit::from_char(sc).ok_or(CardError::UnexpectedSuitChar(sc))?;
        Ok(Self { value, suit })
    }
}

impl std::str::FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Split an input on `,`, `;` and whitespace, then parse every
/// non-empty token as a card. Duplicates are allowed here.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(Card::try_from)
        .collect()
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
struct CardVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for CardVisitor {
    type Value = Card;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a two character card token such as \"AC\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Card::try_from(v).map_err(E::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(CardVisitor)
    }
}
