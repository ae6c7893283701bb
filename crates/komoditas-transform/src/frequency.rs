//! Value counts of filtered frames.

use std::collections::HashMap;

use polars::prelude::DataFrame;

use komoditas_model::{FrequencyEntry, FrequencyTable};

use crate::error::Result;
use crate::frame::text_column;

/// Counts each distinct value of `column`, highest count first.
///
/// Values with equal counts keep the order in which they first appear in the
/// frame. Missing values are counted under the empty string, so the counts
/// always sum to the frame's row count.
pub fn frequency_of(frame: &DataFrame, column: &str) -> Result<FrequencyTable> {
    let values = text_column(frame, column)?;
    let values = values.str()?;

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    for value in values {
        let value = value.unwrap_or_default();
        match positions.get(value) {
            Some(&idx) => entries[idx].count += 1,
            None => {
                positions.insert(value, entries.len());
                entries.push(FrequencyEntry {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    // Stable sort: ties stay in first-appearance order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(FrequencyTable::new(column, entries))
}

/// One frequency table per column, all computed from the same frame.
pub fn frequency_tables<S: AsRef<str>>(
    frame: &DataFrame,
    columns: &[S],
) -> Result<Vec<FrequencyTable>> {
    columns
        .iter()
        .map(|column| frequency_of(frame, column.as_ref()))
        .collect()
}
