//! DataFrame access helpers shared by the transform stages.

use polars::prelude::{BooleanChunked, Column, DataFrame, DataType, NewChunkedArray};

use crate::error::{Result, TransformError};

/// Returns the named column cast to text.
///
/// The cast is a no-op for columns that already hold strings.
pub fn text_column(frame: &DataFrame, name: &str) -> Result<Column> {
    let column = frame
        .column(name)
        .map_err(|_| TransformError::ColumnNotFound {
            column: name.to_string(),
        })?;
    Ok(column.cast(&DataType::String)?)
}

/// Keeps the rows whose `keep` flag is set, preserving their order.
pub fn filter_rows(frame: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(frame.filter(&mask)?)
}
