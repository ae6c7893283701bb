//! Text normalization of comparison columns.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use komoditas_model::normalize_value;

use crate::error::Result;
use crate::frame::text_column;

/// Rewrites each named column to its trimmed, upper-cased form.
///
/// Missing values become the empty string, so normalized columns never hold
/// nulls. Columns not named are left untouched. Normalizing twice is the same
/// as normalizing once.
pub fn normalize<I, S>(mut frame: DataFrame, columns: I) -> Result<DataFrame>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for name in columns {
        let name = name.as_ref();
        let text = text_column(&frame, name)?;
        let values: Vec<String> = text
            .str()?
            .into_iter()
            .map(|value| value.map(normalize_value).unwrap_or_default())
            .collect();
        frame.with_column(Series::new(name.into(), values))?;
        debug!(column = name, rows = frame.height(), "column normalized");
    }
    Ok(frame)
}
