//! Range versus range poker equity from precomputed outcome tables.
//!
//! Hands are never ranked at run time. A Monte Carlo loop samples hands
//! and boards, then looks the results up in tables of winning seven card
//! combos grouped by board category.

/// Card level code that knows nothing about equity: cards, hands, decks
/// and card sets.
pub mod core;
/// Sampling, outcome table lookups and equity aggregation.
pub mod equity;
