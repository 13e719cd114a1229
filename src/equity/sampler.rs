use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::event;

use crate::core::{Card, CardBitSet, Deck, FlatDeck, Hand};

use super::{Board, Combo, EquityError, HandRange};

/// Number of community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// How many candidate boards are dealt before one is picked.
pub const DEFAULT_BOARD_CANDIDATES: usize = 10;

/// Knobs for how boards get dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Independent boards dealt per trial. One of them is picked
    /// uniformly. `1` is a plain single board draw.
    pub board_candidates: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            board_candidates: DEFAULT_BOARD_CANDIDATES,
        }
    }
}

/// Everything drawn for one range in one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub hand: Hand,
    pub board: Board,
    /// Hole card pairings joined with the board, in generation order.
    pub combos: Vec<Combo>,
}

/// Draws hands, boards and combos while keeping dead cards out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sampler {
    config: SamplerConfig,
    dead: CardBitSet,
}

impl Sampler {
    pub fn new(config: SamplerConfig, dead: CardBitSet) -> Result<Self, EquityError> {
        if config.board_candidates == 0 {
            return Err(EquityError::ZeroBoardCandidates);
        }
        Ok(Self { config, dead })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn dead(&self) -> CardBitSet {
        self.dead
    }

    /// Pick one hand from the range. Trials are independent so the same
    /// hand can come up again.
    pub fn select_hand<'r, R: Rng + ?Sized>(&self, range: &'r HandRange, rng: &mut R) -> &'r Hand {
        range.choose(rng)
    }

    /// The cards that are neither in `hand` nor dead.
    ///
    /// ```
    /// use rs_poker_equity::core::{CardBitSet, Hand};
    /// use rs_poker_equity::equity::{Sampler, SamplerConfig};
    ///
    /// let sampler = Sampler::new(SamplerConfig::default(), CardBitSet::new()).unwrap();
    /// let hand = Hand::new_from_str("AC,AD").unwrap();
    ///
    /// assert_eq!(50, sampler.legal_pool(&hand).unwrap().len());
    /// ```
    pub fn legal_pool(&self, hand: &Hand) -> Result<FlatDeck, EquityError> {
        let excluded: Vec<Card> = hand.iter().copied().chain(self.dead.iter()).collect();
        let deck = Deck::remaining(&excluded)?;
        if deck.len() < BOARD_SIZE {
            return Err(EquityError::InsufficientCards {
                needed: BOARD_SIZE,
                available: deck.len(),
            });
        }
        Ok(deck.into())
    }

    /// Deal `board_candidates` independent boards from the pool. Each
    /// board is drawn without replacement.
    pub fn board_candidates<R: Rng + ?Sized>(
        &self,
        pool: &FlatDeck,
        rng: &mut R,
    ) -> Result<Vec<Board>, EquityError> {
        if pool.len() < BOARD_SIZE {
            return Err(EquityError::InsufficientCards {
                needed: BOARD_SIZE,
                available: pool.len(),
            });
        }
        (0..self.config.board_candidates)
            .map(|_| Board::new(&pool.sample(rng, BOARD_SIZE)).map_err(EquityError::from))
            .collect()
    }

    /// Uniformly pick the trial's board from the candidates.
    pub fn select_board<R: Rng + ?Sized>(
        &self,
        candidates: &[Board],
        rng: &mut R,
    ) -> Result<Board, EquityError> {
        candidates
            .choose(rng)
            .copied()
            .ok_or_else(|| EquityError::Internal("no board candidates were dealt".to_string()))
    }

    /// Every ordered pair of distinct hole cards joined with the board.
    /// A two card hand gives two combos that sort to the same key.
    pub fn hole_card_pairings(
        &self,
        hand: &Hand,
        board: &Board,
    ) -> Result<Vec<Combo>, EquityError> {
        let mut combos = Vec::with_capacity(2);
        for first in hand.iter() {
            for second in hand.iter() {
                if first != second {
                    combos.push(Combo::new([*first, *second], board)?);
                }
            }
        }
        Ok(combos)
    }

    /// Run every sampling step for one range.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        range: &HandRange,
        rng: &mut R,
    ) -> Result<Sample, EquityError> {
        let hand = *self.select_hand(range, rng);
        let pool = self.legal_pool(&hand)?;
        let candidates = self.board_candidates(&pool, rng)?;
        let board = self.select_board(&candidates, rng)?;
        let combos = self.hole_card_pairings(&hand, &board)?;
        event!(tracing::Level::TRACE, %hand, %board, "Sampled trial");
        Ok(Sample {
            hand,
            board,
            combos,
        })
    }
}
