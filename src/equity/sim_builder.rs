use std::sync::Arc;

use rand::{Rng, rngs::ThreadRng};

use crate::core::{Card, CardBitSet};

use super::{
    BoardCategorizer, EquityError, EquitySimulation, HandRange, OutcomeTableStore, Resolver,
    Sampler, SamplerConfig,
};

/// Trials run when the builder isn't told otherwise.
pub const DEFAULT_TRIALS: usize = 1000;

/// # EquitySimulationBuilder
///
/// `RngEquitySimulationBuilder` is a builder for a validated
/// `EquitySimulation`. Ranges, outcome tables and a board categorizer are
/// required; everything else has a default.
///
/// `EquitySimulationBuilder` is a type alias for
/// `RngEquitySimulationBuilder<ThreadRng>` which draws from the thread rng.
///
/// All input checks happen in `build`, so nothing invalid reaches the
/// sampler.
///
/// ## Examples
///
/// ```
/// use rs_poker_equity::equity::{
///     BoardCategory, EquitySimulationBuilder, OutcomeTable, OutcomeTableStore, UniformCategory,
///     parse_ranges,
/// };
///
/// let result = EquitySimulationBuilder::default()
///     .ranges(parse_ranges("AC,AD;KC,KD").unwrap())
///     .trials(100)
///     .outcome_tables(OutcomeTableStore::new().with_table("all", OutcomeTable::new()))
///     .categorizer(UniformCategory(BoardCategory::from("all")))
///     .build()
///     .unwrap()
///     .run()
///     .unwrap();
///
/// assert_eq!(200, result.summary.loss);
/// ```
///
/// A seeded rng makes the run repeatable:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_poker_equity::equity::{
///     BoardCategory, OutcomeTableStore, OutcomeTable, RngEquitySimulationBuilder,
///     UniformCategory, parse_ranges,
/// };
///
/// let mut sim = RngEquitySimulationBuilder::default()
///     .ranges(parse_ranges("AC,AD").unwrap())
///     .outcome_tables(OutcomeTableStore::new().with_table("all", OutcomeTable::new()))
///     .categorizer(UniformCategory(BoardCategory::from("all")))
///     .rng(StdRng::seed_from_u64(420))
///     .build()
///     .unwrap();
/// assert!(sim.run().is_ok());
/// ```
pub struct RngEquitySimulationBuilder<R: Rng> {
    ranges: Option<Vec<HandRange>>,
    dead_cards: Vec<Card>,
    trials: usize,
    sampler_config: SamplerConfig,
    store: Option<Arc<OutcomeTableStore>>,
    categorizer: Option<Arc<dyn BoardCategorizer>>,
    rng: Option<R>,
}

impl<R: Rng> RngEquitySimulationBuilder<R> {
    /// Set the ranges, one per player.
    pub fn ranges(mut self, ranges: Vec<HandRange>) -> Self {
        self.ranges = Some(ranges);
        self
    }

    /// Cards that can't show up on any board.
    pub fn dead_cards(mut self, dead_cards: &[Card]) -> Self {
        self.dead_cards = dead_cards.to_vec();
        self
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn sampler_config(mut self, sampler_config: SamplerConfig) -> Self {
        self.sampler_config = sampler_config;
        self
    }

    /// Set the outcome tables. Takes either an owned store or one that is
    /// already shared.
    pub fn outcome_tables(mut self, store: impl Into<Arc<OutcomeTableStore>>) -> Self {
        self.store = Some(store.into());
        self
    }

    pub fn categorizer<C: BoardCategorizer + 'static>(mut self, categorizer: C) -> Self {
        self.categorizer = Some(Arc::new(categorizer));
        self
    }

    pub fn shared_categorizer(mut self, categorizer: Arc<dyn BoardCategorizer>) -> Self {
        self.categorizer = Some(categorizer);
        self
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate everything and create the simulation.
    pub fn build(self) -> Result<EquitySimulation<R>, EquityError> {
        let ranges = self.ranges.ok_or(EquityError::NoRanges)?;
        if ranges.is_empty() {
            return Err(EquityError::NoRanges);
        }
        if self.trials == 0 {
            return Err(EquityError::ZeroTrials);
        }

        let dead = CardBitSet::try_from_cards(self.dead_cards)?;
        for (idx, range) in ranges.iter().enumerate() {
            if range.is_empty() {
                return Err(EquityError::EmptyRange(idx));
            }
            if let Some(card) = (range.card_set() & dead).iter().next() {
                return Err(EquityError::DeadCardInRange { card, range: idx });
            }
        }

        let sampler = Sampler::new(self.sampler_config, dead)?;
        let store = self.store.ok_or(EquityError::NeedOutcomeTables)?;
        let categorizer = self.categorizer.ok_or(EquityError::NeedCategorizer)?;

        Ok(EquitySimulation {
            ranges,
            trials: self.trials,
            sampler,
            resolver: Resolver::new(store, categorizer),
            rng: self.rng,
        })
    }
}

impl<R: Rng> Default for RngEquitySimulationBuilder<R> {
    fn default() -> Self {
        Self {
            ranges: None,
            dead_cards: vec![],
            trials: DEFAULT_TRIALS,
            sampler_config: SamplerConfig::default(),
            store: None,
            categorizer: None,
            rng: None,
        }
    }
}

/// The builder that uses the thread rng.
pub type EquitySimulationBuilder = RngEquitySimulationBuilder<ThreadRng>;

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{CardError, parse_cards};
    use crate::equity::{BoardCategory, ErrorKind, OutcomeTable, UniformCategory, parse_ranges};

    fn builder() -> RngEquitySimulationBuilder<StdRng> {
        RngEquitySimulationBuilder::default()
            .ranges(parse_ranges("AC,AD;KC,KD").unwrap())
            .outcome_tables(OutcomeTableStore::new().with_table("all", OutcomeTable::new()))
            .categorizer(UniformCategory(BoardCategory::from("all")))
            .rng(StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_defaults() {
        let sim = builder().build().unwrap();
        assert_eq!(DEFAULT_TRIALS, sim.trials());
        assert_eq!(2, sim.ranges().len());
    }

    #[test]
    fn test_missing_ranges() {
        let b: RngEquitySimulationBuilder<StdRng> = RngEquitySimulationBuilder::default();
        assert_eq!(EquityError::NoRanges, b.build().unwrap_err());
        assert_eq!(EquityError::NoRanges, builder().ranges(vec![]).build().unwrap_err());
    }

    #[test]
    fn test_zero_trials() {
        let err = builder().trials(0).build().unwrap_err();
        assert_eq!(EquityError::ZeroTrials, err);
        assert_eq!(ErrorKind::InvalidInput, err.kind());
    }

    #[test]
    fn test_duplicate_dead_cards() {
        let dead = parse_cards("2C,2C").unwrap();
        assert_eq!(
            EquityError::Card(CardError::DuplicateCard(dead[0])),
            builder().dead_cards(&dead).build().unwrap_err()
        );
    }

    #[test]
    fn test_dead_card_in_range() {
        let dead = parse_cards("3S,KD").unwrap();
        assert_eq!(
            EquityError::DeadCardInRange {
                card: dead[1],
                range: 1
            },
            builder().dead_cards(&dead).build().unwrap_err()
        );
    }

    #[test]
    fn test_zero_board_candidates() {
        let err = builder()
            .sampler_config(SamplerConfig { board_candidates: 0 })
            .build()
            .unwrap_err();
        assert_eq!(EquityError::ZeroBoardCandidates, err);
    }

    #[test]
    fn test_missing_tables_and_categorizer() {
        let no_tables: RngEquitySimulationBuilder<StdRng> = RngEquitySimulationBuilder::default()
            .ranges(parse_ranges("AC,AD").unwrap())
            .categorizer(UniformCategory(BoardCategory::from("all")));
        assert_eq!(EquityError::NeedOutcomeTables, no_tables.build().unwrap_err());

        let no_categorizer: RngEquitySimulationBuilder<StdRng> =
            RngEquitySimulationBuilder::default()
                .ranges(parse_ranges("AC,AD").unwrap())
                .outcome_tables(OutcomeTableStore::new());
        assert_eq!(EquityError::NeedCategorizer, no_categorizer.build().unwrap_err());
    }

    #[test]
    fn test_thread_rng_builder_runs() {
        let result = EquitySimulationBuilder::default()
            .ranges(parse_ranges("QH,QS").unwrap())
            .trials(25)
            .outcome_tables(OutcomeTableStore::new().with_table("all", OutcomeTable::new()))
            .categorizer(UniformCategory(BoardCategory::from("all")))
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(25, result.trials);
        assert_eq!(25, result.summary.loss);
    }
}
