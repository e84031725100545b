//! LookupTable - percept 列全体 → action の対応表

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::action::Action;
use super::errors::BuildError;
use super::percept::Percept;

/// One row of a lookup table, as it appears in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry<P, A> {
    pub percepts: Vec<P>,
    pub action: A,
}

/// Maps complete percept sequences (not just the latest percept) to actions.
#[derive(Debug, Clone)]
pub struct LookupTable<P, A> {
    entries: HashMap<Vec<P>, A>,
}

impl<P: Percept, A: Action> LookupTable<P, A> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Map `percepts` to `action`.
    ///
    /// Remapping a sequence is rejected rather than overwritten.
    pub fn insert(&mut self, percepts: Vec<P>, action: A) -> Result<(), BuildError> {
        if self.entries.contains_key(&percepts) {
            return Err(BuildError::DuplicateEntry(format!("{percepts:?}")));
        }
        self.entries.insert(percepts, action);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, percepts: Vec<P>, action: A) -> Result<Self, BuildError> {
        self.insert(percepts, action)?;
        Ok(self)
    }

    pub fn lookup(&self, percepts: &[P]) -> Option<&A> {
        let found = self.entries.get(percepts);
        trace!(len = percepts.len(), hit = found.is_some(), "table lookup");
        found
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = TableEntry<P, A>>,
    ) -> Result<Self, BuildError> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.percepts, entry.action)?;
        }
        Ok(table)
    }
}

impl<P: Percept, A: Action> Default for LookupTable<P, A> {
    fn default() -> Self {
        Self::new()
    }
}
