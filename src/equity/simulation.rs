use std::sync::Arc;

use rand::Rng;
use tracing::{event, trace_span};

use crate::core::{Card, parse_card_set};

use super::{
    BoardCategorizer, EquityError, EquitySimulationBuilder, HandRange, OutcomeTableStore,
    Resolver, Sampler, parse_ranges,
};

/// Win, loss and tie counts over every range and trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeSummary {
    pub win: u64,
    pub loss: u64,
    /// Ties are never detected so this is always zero.
    pub tie: u64,
}

/// The finished output of a simulation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResult {
    /// One percentage per range, in input order.
    pub equities: Vec<f64>,
    pub summary: OutcomeSummary,
    /// Raw win counts per range.
    pub wins: Vec<u64>,
    /// Trials that were run.
    pub trials: usize,
}

/// Per range win counters for a run or part of a run. Only the trial
/// loop can record into a tally; callers see it finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialTally {
    wins: Vec<u64>,
    trials: usize,
}

impl TrialTally {
    pub fn new(num_ranges: usize) -> Self {
        Self {
            wins: vec![0; num_ranges],
            trials: 0,
        }
    }

    pub(crate) fn record_win(&mut self, range_idx: usize) {
        self.wins[range_idx] += 1;
    }

    /// Mark one full trial, every range included, as done.
    pub(crate) fn finish_trial(&mut self) {
        self.trials += 1;
    }

    pub fn wins(&self) -> &[u64] {
        &self.wins
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Combine two tallies over the same ranges. Order does not matter.
    /// Tallies over a different number of ranges can't be combined.
    pub(crate) fn merge(mut self, other: Self) -> Result<Self, EquityError> {
        if self.wins.len() != other.wins.len() {
            return Err(EquityError::Internal(format!(
                "cannot merge a tally over {} ranges with one over {}",
                self.wins.len(),
                other.wins.len()
            )));
        }
        for (mine, theirs) in self.wins.iter_mut().zip(other.wins) {
            *mine += theirs;
        }
        self.trials += other.trials;
        Ok(self)
    }

    /// Turn the counts into percentages. Each range's wins are divided by
    /// every trial of every range.
    pub fn finalize(self) -> EquityResult {
        let total = (self.trials * self.wins.len()) as u64;
        let win: u64 = self.wins.iter().sum();
        let equities = self
            .wins
            .iter()
            .map(|w| {
                if total == 0 {
                    0.0
                } else {
                    100.0 * *w as f64 / total as f64
                }
            })
            .collect();
        EquityResult {
            equities,
            summary: OutcomeSummary {
                win,
                loss: total.saturating_sub(win),
                tie: 0,
            },
            wins: self.wins,
            trials: self.trials,
        }
    }
}

/// Run `trials` rounds where every range is sampled and judged on its own.
/// The first failure stops the run.
pub(crate) fn run_trials<G: Rng + ?Sized>(
    ranges: &[HandRange],
    trials: usize,
    sampler: &Sampler,
    resolver: &Resolver,
    rng: &mut G,
) -> Result<TrialTally, EquityError> {
    let mut tally = TrialTally::new(ranges.len());
    for _ in 0..trials {
        for (idx, range) in ranges.iter().enumerate() {
            let sample = sampler.sample(range, rng)?;
            if resolver.resolve_sample(&sample)? == Some(sample.hand) {
                tally.record_win(idx);
            }
        }
        tally.finish_trial();
    }
    Ok(tally)
}

/// A fully validated equity simulation, ready to run.
///
/// Build one with `EquitySimulationBuilder`.
#[derive(Debug)]
pub struct EquitySimulation<R> {
    pub(crate) ranges: Vec<HandRange>,
    pub(crate) trials: usize,
    pub(crate) sampler: Sampler,
    pub(crate) resolver: Resolver,
    pub(crate) rng: Option<R>,
}

impl<R: Rng> EquitySimulation<R> {
    pub fn ranges(&self) -> &[HandRange] {
        &self.ranges
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Run every trial on this thread.
    ///
    /// Nothing partial is returned: any failing trial aborts the run with
    /// that trial's error.
    pub fn run(&mut self) -> Result<EquityResult, EquityError> {
        let Self {
            ranges,
            trials,
            sampler,
            resolver,
            rng,
        } = self;
        let span = trace_span!("equity_simulation", trials = *trials, ranges = ranges.len());
        let _enter = span.enter();
        event!(tracing::Level::DEBUG, "Starting equity simulation");

        let tally = match rng.as_mut() {
            Some(rng) => run_trials(ranges, *trials, sampler, resolver, rng),
            None => run_trials(ranges, *trials, sampler, resolver, &mut rand::rng()),
        }
        .inspect_err(|e| {
            event!(tracing::Level::WARN, error = %e, "Equity simulation failed");
        })?;

        let result = tally.finalize();
        event!(
            tracing::Level::DEBUG,
            wins = result.summary.win,
            losses = result.summary.loss,
            "Finished equity simulation"
        );
        Ok(result)
    }
}

/// Trials handed to each parallel worker.
#[cfg(feature = "parallel")]
pub const PARALLEL_CHUNK_TRIALS: usize = 1024;

#[cfg(feature = "parallel")]
impl<R> EquitySimulation<R> {
    /// Split the trials into fixed size chunks and run them on the rayon
    /// pool. Chunk `i` gets its own `StdRng` seeded from `seed + i`, so the
    /// result only depends on the seed, never on thread scheduling.
    pub fn run_parallel(&self, seed: u64) -> Result<EquityResult, EquityError> {
        run_chunks(&self.ranges, self.trials, &self.sampler, &self.resolver, seed)
    }

    /// `run_parallel` on a dedicated pool of `threads` workers.
    pub fn run_parallel_with_threads(
        &self,
        seed: u64,
        threads: usize,
    ) -> Result<EquityResult, EquityError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| EquityError::Internal(e.to_string()))?;
        let (ranges, trials, sampler, resolver) =
            (&self.ranges, self.trials, &self.sampler, &self.resolver);
        pool.install(|| run_chunks(ranges, trials, sampler, resolver, seed))
    }
}

#[cfg(feature = "parallel")]
fn run_chunks(
    ranges: &[HandRange],
    trials: usize,
    sampler: &Sampler,
    resolver: &Resolver,
    seed: u64,
) -> Result<EquityResult, EquityError> {
    use rand::{SeedableRng, rngs::StdRng};
    use rayon::prelude::*;

    let num_chunks = trials.div_ceil(PARALLEL_CHUNK_TRIALS);
    let span = trace_span!("equity_simulation_parallel", trials, chunks = num_chunks);
    let _enter = span.enter();
    event!(tracing::Level::DEBUG, seed, "Starting parallel equity simulation");

    let tally = (0..num_chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * PARALLEL_CHUNK_TRIALS;
            let chunk_trials = PARALLEL_CHUNK_TRIALS.min(trials - start);
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chunk as u64));
            run_trials(ranges, chunk_trials, sampler, resolver, &mut rng)
        })
        .try_reduce(|| TrialTally::new(ranges.len()), TrialTally::merge)?;

    let result = tally.finalize();
    event!(
        tracing::Level::DEBUG,
        wins = result.summary.win,
        losses = result.summary.loss,
        "Finished parallel equity simulation"
    );
    Ok(result)
}

/// Run a simulation on the thread rng with the default sampler settings.
pub fn run_simulation(
    ranges: Vec<HandRange>,
    dead_cards: &[Card],
    trials: usize,
    store: Arc<OutcomeTableStore>,
    categorizer: Arc<dyn BoardCategorizer>,
) -> Result<EquityResult, EquityError> {
    EquitySimulationBuilder::default()
        .ranges(ranges)
        .dead_cards(dead_cards)
        .trials(trials)
        .outcome_tables(store)
        .shared_categorizer(categorizer)
        .build()?
        .run()
}

/// `run_simulation` for token input: ranges like `"AC,AD;KC,KD"` and
/// dead cards like `"2C,3D"`.
pub fn run_simulation_from_str(
    ranges: &str,
    dead_cards: &str,
    trials: usize,
    store: Arc<OutcomeTableStore>,
    categorizer: Arc<dyn BoardCategorizer>,
) -> Result<EquityResult, EquityError> {
    let ranges = parse_ranges(ranges)?;
    let dead_cards: Vec<Card> = parse_card_set(dead_cards)?.into_iter().collect();
    run_simulation(ranges, &dead_cards, trials, store, categorizer)
}
