use std::fmt;
use std::sync::Arc;

use crate::core::Hand;

use super::{BoardCategorizer, BoardCategory, Combo, EquityError, OutcomeTableStore, Sample};

/// Return `hand` as soon as one of `combos` is a recorded winner for
/// `category`, checking combos in the order given. `None` if none win.
///
/// Every combo goes through `OutcomeTableStore::lookup`, so a category that
/// was never loaded fails with `UnknownCategory`.
///
/// ```
/// use rs_poker_equity::core::Hand;
/// use rs_poker_equity::equity::{BoardCategory, Combo, OutcomeTable, OutcomeTableStore, resolve};
///
/// let hand = Hand::new_from_str("AC,AD").unwrap();
/// let combo = Combo::new_from_str("AC,AD,2C,7D,9H,JS,KC").unwrap();
/// let store = OutcomeTableStore::new().with_table("dry", OutcomeTable::from_iter([combo]));
///
/// let winner = resolve(&hand, &[combo], &BoardCategory::from("dry"), &store).unwrap();
/// assert_eq!(Some(hand), winner);
/// ```
pub fn resolve(
    hand: &Hand,
    combos: &[Combo],
    category: &BoardCategory,
    store: &OutcomeTableStore,
) -> Result<Option<Hand>, EquityError> {
    for combo in combos {
        if store.lookup(category, combo)? {
            return Ok(Some(*hand));
        }
    }
    Ok(None)
}

/// Pairs the outcome tables with the injected board categorizer so a
/// sampled trial can be judged in one call. Cheap to clone and safe to
/// share between threads.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<OutcomeTableStore>,
    categorizer: Arc<dyn BoardCategorizer>,
}

impl Resolver {
    pub fn new(store: Arc<OutcomeTableStore>, categorizer: Arc<dyn BoardCategorizer>) -> Self {
        Self { store, categorizer }
    }

    pub fn store(&self) -> &OutcomeTableStore {
        &self.store
    }

    /// Categorize the sample's board then resolve its combos.
    pub fn resolve_sample(&self, sample: &Sample) -> Result<Option<Hand>, EquityError> {
        let category = self.categorizer.category_of(&sample.board)?;
        resolve(&sample.hand, &sample.combos, &category, &self.store)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("categories", &self.store.len())
            .finish_non_exhaustive()
    }
}
