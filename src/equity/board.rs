use std::collections::HashMap;
use std::fmt;

use crate::core::{Card, CardBitSet, CardError};

use super::EquityError;

/// The five community cards. Stored sorted so two boards with the same
/// cards are equal and hash the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
pub struct Board([Card; 5]);

impl Board {
    /// Build a board from exactly five distinct cards in any order.
    ///
    /// ```
    /// use rs_poker_equity::core::parse_cards;
    /// use rs_poker_equity::equity::Board;
    ///
    /// let board = Board::new(&parse_cards("KD,2C,9H,TS,3C").unwrap()).unwrap();
    /// assert_eq!("2C,3C,9H,TS,KD", board.to_string());
    ///
    /// assert!(Board::new(&parse_cards("KD,2C,9H,TS").unwrap()).is_err());
    /// ```
    pub fn new(cards: &[Card]) -> Result<Self, CardError> {
        let mut sorted: [Card; 5] = cards
            .try_into()
            .map_err(|_| CardError::BoardSize(cards.len()))?;
        CardBitSet::try_from_cards(sorted)?;
        sorted.sort_unstable();
        Ok(Self(sorted))
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }

    pub fn card_set(&self) -> CardBitSet {
        self.0.iter().copied().collect()
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = CardError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(&cards)
    }
}

impl From<Board> for Vec<Card> {
    fn from(board: Board) -> Self {
        board.0.to_vec()
    }
}

impl fmt::Display for Board {
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

/// Names the outcome table that applies to a board. What the names
/// mean is up to whoever built the tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BoardCategory(String);

impl BoardCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoardCategory {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BoardCategory {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BoardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a board to the category whose outcome table judges it.
///
/// The library does not know how boards should be classified; callers
/// inject that knowledge. Any `Fn(&Board) -> Option<BoardCategory>` works.
pub trait BoardCategorizer: Send + Sync {
    /// `None` when the board has no category.
    fn categorize(&self, board: &Board) -> Option<BoardCategory>;

    /// Like `categorize` but a missing category is an error.
    fn category_of(&self, board: &Board) -> Result<BoardCategory, EquityError> {
        self.categorize(board)
            .ok_or(EquityError::UncategorizedBoard(*board))
    }
}

impl<F> BoardCategorizer for F
where
    F: Fn(&Board) -> Option<BoardCategory> + Send + Sync,
{
    fn categorize(&self, board: &Board) -> Option<BoardCategory> {
        self(board)
    }
}

/// Every board belongs to the same category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformCategory(pub BoardCategory);

impl BoardCategorizer for UniformCategory {
    fn categorize(&self, _board: &Board) -> Option<BoardCategory> {
        Some(self.0.clone())
    }
}

/// An explicit board to category table. Boards not in the table are
/// uncategorized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    categories: HashMap<Board, BoardCategory>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, board: Board, category: BoardCategory) -> Option<BoardCategory> {
        self.categories.insert(board, category)
    }

    pub fn with(mut self, board: Board, category: impl Into<BoardCategory>) -> Self {
        self.insert(board, category.into());
        self
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<(Board, BoardCategory)> for CategoryMap {
    fn from_iter<T: IntoIterator<Item = (Board, BoardCategory)>>(iter: T) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl BoardCategorizer for CategoryMap {
    fn categorize(&self, board: &Board) -> Option<BoardCategory> {
        self.categories.get(board).cloned()
    }
}
