use thiserror::Error;

use crate::core::{Card, CardError};

use super::{Board, BoardCategory};

/// Coarse classification of every failure a simulation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed card tokens, empty ranges, bad trial counts.
    InvalidInput,
    /// Too few legal cards left to deal a board.
    InsufficientCards,
    /// The injected categorizer had no category for a board.
    UncategorizedBoard,
    /// No outcome table was loaded for a category.
    UnknownCategory,
    /// Anything else.
    Internal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquityError {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error("At least one hand range is required")]
    NoRanges,
    #[error("Hand range {0} has no hands")]
    EmptyRange(usize),
    #[error("Hand range {range} has a dangling card token; hands need two cards each")]
    OddRangeTokens { range: usize },
    #[error("Card {card} is dead but is held by a hand in range {range}")]
    DeadCardInRange { card: Card, range: usize },
    #[error("Trial count must be at least one")]
    ZeroTrials,
    #[error("At least one board candidate must be generated per trial")]
    ZeroBoardCandidates,
    #[error("Only {available} legal cards remain but a board needs {needed}")]
    InsufficientCards { needed: usize, available: usize },
    #[error("No board category is known for board {0}")]
    UncategorizedBoard(Board),
    #[error("No outcome table is loaded for board category {0}")]
    UnknownCategory(BoardCategory),
    #[error("An equity simulation needs outcome tables")]
    NeedOutcomeTables,
    #[error("An equity simulation needs a board categorizer")]
    NeedCategorizer,
    #[error("Internal simulation fault: {0}")]
    Internal(String),
}

impl EquityError {
    /// Which class of failure this is.
    ///
    /// ```
    /// use rs_poker_equity::equity::{EquityError, ErrorKind};
    ///
    /// assert_eq!(ErrorKind::InvalidInput, EquityError::ZeroTrials.kind());
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Card(_)
            | Self::NoRanges
            | Self::EmptyRange(_)
            | Self::OddRangeTokens { .. }
            | Self::DeadCardInRange { .. }
            | Self::ZeroTrials
            | Self::ZeroBoardCandidates
            | Self::NeedOutcomeTables
            | Self::NeedCategorizer => ErrorKind::InvalidInput,
            Self::InsufficientCards { .. } => ErrorKind::InsufficientCards,
            Self::UncategorizedBoard(_) => ErrorKind::UncategorizedBoard,
            Self::UnknownCategory(_) => ErrorKind::UnknownCategory,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
