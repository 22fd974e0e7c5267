//! Data-driven choice tables
//!
//! Enum-like fields (SKU tiers, protocols, VM sizes) accept snake_case values
//! from the caller but must be submitted in a canonical spelling. Instead of
//! hand-written branches per field, every table is data:
//! `table name -> { caller value -> canonical value }`, consumed by `map`
//! passes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single value override table.
pub type ChoiceTable = BTreeMap<String, String>;

/// Named choice tables, usually loaded from a profile's `[choices]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceTables {
    tables: BTreeMap<String, ChoiceTable>,
}

impl ChoiceTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table.
    pub fn insert<I, K, V>(&mut self, name: impl Into<String>, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.tables.insert(name.into(), table);
    }

    pub fn get(&self, name: &str) -> Option<&ChoiceTable> {
        self.tables.get(name)
    }

    /// Look up the canonical spelling of `value` in table `name`.
    pub fn canonical(&self, name: &str, value: &str) -> Option<&str> {
        self.get(name)?.get(value).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }
}
