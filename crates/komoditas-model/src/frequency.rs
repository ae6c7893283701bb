//! Frequency tables produced by the aggregator.

use serde::{Deserialize, Serialize};

/// One distinct value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
}

/// Value counts of one column, highest count first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub column: String,
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn new(column: impl Into<String>, entries: Vec<FrequencyEntry>) -> Self {
        Self {
            column: column.into(),
            entries,
        }
    }

    /// Sum of all counts; equals the row count of the aggregated frame.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count_of(&self, value: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.count)
    }
}
