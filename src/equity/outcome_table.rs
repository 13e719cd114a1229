use std::collections::{HashMap, HashSet};

use crate::core::CardError;

use super::{BoardCategory, Combo, EquityError};

/// The set of seven card combos known to win for one board category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OutcomeTable {
    winners: HashSet<Combo>,
}

impl OutcomeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows of seven card tokens.
    ///
    /// ```
    /// use rs_poker_equity::equity::OutcomeTable;
    ///
    /// let table = OutcomeTable::from_rows(["AC,AD,2C,7D,9H,JS,KC"]).unwrap();
    /// assert_eq!(1, table.len());
    /// assert!(OutcomeTable::from_rows(["AC,AD"]).is_err());
    /// ```
    pub fn from_rows<I, S>(rows: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        rows.into_iter()
            .map(|row| Combo::new_from_str(row.as_ref()))
            .collect()
    }

    pub fn insert(&mut self, combo: Combo) -> bool {
        self.winners.insert(combo)
    }

    pub fn contains(&self, combo: &Combo) -> bool {
        self.winners.contains(combo)
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }
}

impl FromIterator<Combo> for OutcomeTable {
    fn from_iter<T: IntoIterator<Item = Combo>>(iter: T) -> Self {
        Self {
            winners: iter.into_iter().collect(),
        }
    }
}

/// Every loaded outcome table keyed by board category.
///
/// The store is filled before a simulation starts and only read after
/// that, so it can be shared behind an `Arc` without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OutcomeTableStore {
    tables: HashMap<BoardCategory, OutcomeTable>,
}

impl OutcomeTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the table for a category.
    pub fn insert(
        &mut self,
        category: impl Into<BoardCategory>,
        table: OutcomeTable,
    ) -> Option<OutcomeTable> {
        self.tables.insert(category.into(), table)
    }

    /// Builder style `insert`.
    pub fn with_table(mut self, category: impl Into<BoardCategory>, table: OutcomeTable) -> Self {
        self.insert(category, table);
        self
    }

    /// Is `combo` a recorded winner for `category`?
    ///
    /// ```
    /// use rs_poker_equity::equity::{BoardCategory, Combo, OutcomeTable, OutcomeTableStore};
    ///
    /// let combo = Combo::new_from_str("AC,AD,2C,7D,9H,JS,KC").unwrap();
    /// let store = OutcomeTableStore::new()
    ///     .with_table("dry", [combo].into_iter().collect::<OutcomeTable>());
    ///
    /// assert_eq!(Ok(true), store.lookup(&BoardCategory::from("dry"), &combo));
    /// assert!(store.lookup(&BoardCategory::from("wet"), &combo).is_err());
    /// ```
    pub fn lookup(&self, category: &BoardCategory, combo: &Combo) -> Result<bool, EquityError> {
        self.tables
            .get(category)
            .map(|table| table.contains(combo))
            .ok_or_else(|| EquityError::UnknownCategory(category.clone()))
    }

    pub fn table(&self, category: &BoardCategory) -> Option<&OutcomeTable> {
        self.tables.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &BoardCategory> {
        self.tables.keys()
    }

    /// Number of loaded categories.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<(BoardCategory, OutcomeTable)> for OutcomeTableStore {
    fn from_iter<T: IntoIterator<Item = (BoardCategory, OutcomeTable)>>(iter: T) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo(s: &str) -> Combo {
        Combo::new_from_str(s).unwrap()
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let winner = combo("AC,AD,2C,7D,9H,JS,KC");
        let loser = combo("KH,KD,2C,7D,9H,JS,KC");
        let store =
            OutcomeTableStore::new().with_table("paired", OutcomeTable::from_iter([winner]));
        let paired = BoardCategory::from("paired");
        assert_eq!(Ok(true), store.lookup(&paired, &winner));
        assert_eq!(Ok(false), store.lookup(&paired, &loser));
    }

    #[test]
    fn test_lookup_unknown_category() {
        let store = OutcomeTableStore::new();
        let missing = BoardCategory::from("missing");
        assert_eq!(
            Err(EquityError::UnknownCategory(missing.clone())),
            store.lookup(&missing, &combo("AC,AD,2C,7D,9H,JS,KC"))
        );
    }

    #[test]
    fn test_lookup_is_pure() {
        let winner = combo("AC,AD,2C,7D,9H,JS,KC");
        let other = combo("AC,AH,2C,7D,9H,JS,KC");
        let store = OutcomeTableStore::new()
            .with_table("a", OutcomeTable::from_iter([winner]))
            .with_table("b", OutcomeTable::new());
        let a = BoardCategory::from("a");
        let b = BoardCategory::from("b");

        let first: Vec<_> = [(&a, &winner), (&b, &winner), (&a, &other)]
            .iter()
            .map(|(cat, c)| store.lookup(cat, c))
            .collect();
        let second: Vec<_> = [(&a, &other), (&b, &winner), (&a, &winner)]
            .iter()
            .rev()
            .map(|(cat, c)| store.lookup(cat, c))
            .collect();
        assert_eq!(first, second);
        assert_eq!(Ok(true), first[0]);
    }

    #[test]
    fn test_rows_are_canonicalized() {
        let table = OutcomeTable::from_rows(["KC,JS,9H,7D,2C,AD,AC"]).unwrap();
        assert!(table.contains(&combo("AC,AD,2C,7D,9H,JS,KC")));
    }

    #[test]
    fn test_insert_replaces() {
        let mut store = OutcomeTableStore::new();
        assert!(store.insert("x", OutcomeTable::new()).is_none());
        assert!(store.insert("x", OutcomeTable::new()).is_some());
        assert_eq!(1, store.len());
        assert_eq!(
            vec![&BoardCategory::from("x")],
            store.categories().collect::<Vec<_>>()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_store_from_json() {
        let json = r#"{"dry": [["AC","AD","2C","7D","9H","JS","KC"]], "wet": []}"#;
        let store: OutcomeTableStore = serde_json::from_str(json).unwrap();
        assert_eq!(2, store.len());
        assert_eq!(
            Ok(true),
            store.lookup(&BoardCategory::from("dry"), &combo("KC,JS,9H,7D,2C,AD,AC"))
        );
        assert!(store.table(&BoardCategory::from("wet")).unwrap().is_empty());
    }
}
