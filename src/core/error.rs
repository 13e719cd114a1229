use thiserror::Error;

use super::Card;

/// Errors raised while turning card tokens into cards, hands and card sets.
/// Every one of these is an input problem.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardError {
    #[error("Unable to parse value from '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit from '{0}'")]
    UnexpectedSuitChar(char),
    #[error("Card token '{0}' must be exactly one rank and one suit character")]
    MalformedToken(String),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("A hand holds exactly two cards, found {0}")]
    HandSize(usize),
    #[error("A board holds exactly five cards, found {0}")]
    BoardSize(usize),
    #[error("A combo holds exactly seven cards, found {0}")]
    ComboSize(usize),
}
