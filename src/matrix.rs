//! The concept-value matrix handed to the template-fill collaborator.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Column key for the consolidated (100%) figures.
pub const TOTAL_COLUMN: &str = "total";

/// Output of the pipeline: `concept -> column -> value`.
///
/// Backed by ordered maps so iteration, serialization and equality are
/// deterministic, which is what makes the bit-identical-output property
/// testable at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptMatrix {
    cells: BTreeMap<String, BTreeMap<String, i64>>,
}

impl ConceptMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` into a cell, creating it at zero first. Rules that share
    /// an output concept accumulate rather than overwrite.
    pub fn add(&mut self, concept: &str, column: &str, value: i64) {
        *self
            .cells
            .entry(concept.to_string())
            .or_default()
            .entry(column.to_string())
            .or_insert(0) += value;
    }

    /// Overwrites a cell. Used by the concept aggregator, whose values are
    /// computed, never accumulated.
    pub fn set(&mut self, concept: &str, column: &str, value: i64) {
        self.cells
            .entry(concept.to_string())
            .or_default()
            .insert(column.to_string(), value);
    }

    /// Cell value, defaulting to 0 for anything never populated.
    pub fn get(&self, concept: &str, column: &str) -> i64 {
        self.cells
            .get(concept)
            .and_then(|row| row.get(column))
            .copied()
            .unwrap_or(0)
    }

    pub fn row(&self, concept: &str) -> Option<&BTreeMap<String, i64>> {
        self.cells.get(concept)
    }

    pub fn concepts(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Union of all column keys present in the matrix, ordered.
    pub fn columns(&self) -> BTreeSet<String> {
        self.cells
            .values()
            .flat_map(|row| row.keys().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Diagnostic CSV dump: one row per concept, one column per column key.
    pub fn to_csv(&self) -> String {
        let columns = self.columns();

        let mut output = String::new();
        output.push_str("Concept");
        for column in &columns {
            output.push_str(&format!(",{}", column));
        }
        output.push('\n');

        for (concept, row) in &self.cells {
            output.push_str(concept);
            for column in &columns {
                output.push_str(&format!(",{}", row.get(column).copied().unwrap_or(0)));
            }
            output.push('\n');
        }

        output
    }
}
