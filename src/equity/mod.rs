//! Monte Carlo range equity.
//!
//! Each trial draws one hand from every range, deals that range its own
//! board from the cards nobody holds, and asks the precomputed outcome
//! tables whether the hand wins on that board's category. Equity is the
//! share of wins over every trial of every range.
//!
//! ```
//! use rs_poker_equity::equity::{
//!     BoardCategory, EquitySimulationBuilder, OutcomeTable, OutcomeTableStore, UniformCategory,
//!     parse_ranges,
//! };
//!
//! let store = OutcomeTableStore::new().with_table("dry", OutcomeTable::new());
//! let result = EquitySimulationBuilder::default()
//!     .ranges(parse_ranges("AC,AD,KC,KD;QH,QS").unwrap())
//!     .trials(50)
//!     .outcome_tables(store)
//!     .categorizer(UniformCategory(BoardCategory::from("dry")))
//!     .build()
//!     .unwrap()
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(2, result.equities.len());
//! assert_eq!(100, result.summary.win + result.summary.loss);
//! ```

/// Error types and their coarse kinds.
mod errors;
pub use self::errors::{EquityError, ErrorKind};

/// Five card boards and the categories they fall into.
mod board;
pub use self::board::{Board, BoardCategorizer, BoardCategory, CategoryMap, UniformCategory};

/// Seven card lookup keys.
mod combo;
pub use self::combo::Combo;

/// Winning combo tables keyed by board category.
mod outcome_table;
pub use self::outcome_table::{OutcomeTable, OutcomeTableStore};

/// Hand ranges and their token parser.
mod range;
pub use self::range::{HandRange, parse_ranges};

/// Random hand, board and combo selection.
mod sampler;
pub use self::sampler::{BOARD_SIZE, DEFAULT_BOARD_CANDIDATES, Sample, Sampler, SamplerConfig};

/// Deciding whether a sampled hand won.
mod resolve;
pub use self::resolve::{Resolver, resolve};

/// Trial loop and equity aggregation.
mod simulation;
#[cfg(feature = "parallel")]
pub use self::simulation::PARALLEL_CHUNK_TRIALS;
pub use self::simulation::{
    EquityResult, EquitySimulation, OutcomeSummary, TrialTally, run_simulation,
    run_simulation_from_str,
};

mod sim_builder;
pub use self::sim_builder::{DEFAULT_TRIALS, EquitySimulationBuilder, RngEquitySimulationBuilder};
