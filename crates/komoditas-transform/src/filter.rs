//! Cascading office and commodity filters.
//!
//! The office choice narrows the commodity choice list, and both narrow the
//! rows handed to the aggregator. Frames are expected to be normalized.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use tracing::debug;

use komoditas_model::columns::{KOMODITAS, SATPEL};
use komoditas_model::{Choice, CommodityMatch, FilterSelection, normalize_value};

use crate::error::Result;
use crate::frame::{filter_rows, text_column};

/// Distinct non-empty values of `column`, sorted, optionally restricted to one office.
fn distinct_values(frame: &DataFrame, column: &str, office: &Choice) -> Result<Vec<String>> {
    let values = text_column(frame, column)?;
    let values = values.str()?;
    let offices = text_column(frame, SATPEL)?;
    let offices = offices.str()?;
    let office = office.value().map(normalize_value);

    let mut distinct = BTreeSet::new();
    for (value, row_office) in values.into_iter().zip(offices) {
        if let Some(wanted) = &office
            && row_office.unwrap_or_default() != wanted.as_str()
        {
            continue;
        }
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            distinct.insert(value.to_string());
        }
    }
    Ok(distinct.into_iter().collect())
}

/// Branch offices available for selection, sorted.
pub fn available_offices(frame: &DataFrame) -> Result<Vec<String>> {
    distinct_values(frame, SATPEL, &Choice::All)
}

/// Commodities available under `office`, sorted.
///
/// With an office chosen the list only holds commodities recorded for that
/// office; it is always a subset of the list for [`Choice::All`].
pub fn available_commodities(frame: &DataFrame, office: &Choice) -> Result<Vec<String>> {
    distinct_values(frame, KOMODITAS, office)
}

/// Drops an exact-match commodity choice that the chosen office does not offer
/// but another office does.
///
/// A commodity recorded nowhere in the frame is kept, so filtering yields the
/// empty result. Substring choices are free text and are kept as given.
pub fn reconcile_commodity(
    frame: &DataFrame,
    selection: FilterSelection,
    policy: CommodityMatch,
) -> Result<FilterSelection> {
    let Some(commodity) = selection.commodity.value() else {
        return Ok(selection);
    };
    if policy == CommodityMatch::Substring || selection.office.is_all() {
        return Ok(selection);
    }
    let offered = |office: &Choice| -> Result<bool> {
        Ok(available_commodities(frame, office)?
            .iter()
            .any(|candidate| candidate == commodity))
    };
    if offered(&selection.office)? || !offered(&Choice::All)? {
        Ok(selection)
    } else {
        debug!(
            office = %selection.office,
            commodity,
            "commodity not offered by office, resetting to all"
        );
        Ok(selection.with_commodity(Choice::All))
    }
}

/// Rows that satisfy both constraints of `selection`, in their original order.
///
/// An empty result is a valid zero-row frame.
pub fn apply_filter(
    frame: &DataFrame,
    selection: &FilterSelection,
    policy: CommodityMatch,
) -> Result<DataFrame> {
    let office = selection.office.value().map(normalize_value);
    let commodity = selection.commodity.value().map(normalize_value);
    if office.is_none() && commodity.is_none() {
        return Ok(frame.clone());
    }

    let offices = text_column(frame, SATPEL)?;
    let offices = offices.str()?;
    let commodities = text_column(frame, KOMODITAS)?;
    let commodities = commodities.str()?;

    let keep: Vec<bool> = offices
        .into_iter()
        .zip(commodities)
        .map(|(row_office, row_commodity)| {
            let office_ok = office
                .as_deref()
                .is_none_or(|wanted| row_office.unwrap_or_default() == wanted);
            let commodity_ok = commodity
                .as_deref()
                .is_none_or(|wanted| policy.matches(row_commodity.unwrap_or_default(), wanted));
            office_ok && commodity_ok
        })
        .collect();

    let filtered = filter_rows(frame, &keep)?;
    debug!(
        office = %selection.office,
        commodity = %selection.commodity,
        policy = policy.label(),
        rows = filtered.height(),
        "filter applied"
    );
    Ok(filtered)
}
