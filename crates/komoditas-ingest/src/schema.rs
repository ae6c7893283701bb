//! Required-column validation and column resolution.
//!
//! Validation is the one place where header whitespace, fallback columns, and
//! optional enrichment columns are dealt with. Everything downstream can rely
//! on the canonical column names being present.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::{debug, warn};

use komoditas_model::{ColumnRequirement, DatasetProfile, OPTIONAL_COLUMNS};

use crate::error::SchemaError;

/// Finds the actual column whose trimmed name equals `name`.
fn find_column(frame: &DataFrame, name: &str) -> Option<String> {
    frame
        .get_column_names()
        .into_iter()
        .find(|actual| actual.trim() == name)
        .map(|actual| actual.to_string())
}

/// Resolves a requirement to the actual column that satisfies it.
fn resolve(frame: &DataFrame, requirement: &ColumnRequirement) -> Option<String> {
    find_column(frame, requirement.name)
        .or_else(|| requirement.fallback.and_then(|name| find_column(frame, name)))
}

/// Lists every requirement the frame does not satisfy, in requirement order.
pub fn missing_columns(frame: &DataFrame, requirements: &[ColumnRequirement]) -> Vec<String> {
    requirements
        .iter()
        .filter(|req| resolve(frame, req).is_none())
        .map(|req| req.name.to_string())
        .collect()
}

/// Copies `actual` under the name `canonical` unless they already coincide.
fn expose_as(frame: &mut DataFrame, actual: &str, canonical: &str) -> Result<(), SchemaError> {
    if actual == canonical {
        return Ok(());
    }
    let series = frame
        .column(actual)?
        .as_materialized_series()
        .clone()
        .with_name(canonical.into());
    frame.with_column(series)?;
    Ok(())
}

/// Validates `frame` against `profile` and resolves its columns.
///
/// Fails with [`SchemaError::MissingColumns`] naming every absent required
/// column. On success, every required column is reachable under its canonical
/// name and each optional classification column exists, filled with its
/// placeholder when the file does not provide it.
pub fn validate_schema(
    mut frame: DataFrame,
    profile: &DatasetProfile,
) -> Result<DataFrame, SchemaError> {
    let missing = missing_columns(&frame, profile.required);
    if !missing.is_empty() {
        warn!(
            kind = %profile.kind,
            missing = %missing.join(", "),
            "required columns missing"
        );
        return Err(SchemaError::MissingColumns {
            kind: profile.kind,
            missing,
        });
    }

    for requirement in profile.required {
        if let Some(actual) = resolve(&frame, requirement) {
            if actual != requirement.name {
                debug!(
                    kind = %profile.kind,
                    column = requirement.name,
                    source = %actual,
                    "column resolved from alternative header"
                );
            }
            expose_as(&mut frame, &actual, requirement.name)?;
        }
    }

    let height = frame.height();
    for optional in OPTIONAL_COLUMNS {
        match find_column(&frame, optional.name) {
            Some(actual) => expose_as(&mut frame, &actual, optional.name)?,
            None => {
                debug!(column = optional.name, "optional column absent, using placeholder");
                let series = Series::new(optional.name.into(), vec![optional.default; height]);
                frame.with_column(series)?;
            }
        }
    }

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use komoditas_model::DatasetKind;
    use polars::prelude::{Column, IntoColumn};

    fn frame(names: &[&str]) -> DataFrame {
        let cols: Vec<Column> = names
            .iter()
            .map(|name| Series::new((*name).into(), vec!["x".to_string()]).into_column())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn test_missing_columns_empty_when_complete() {
        let df = frame(&["Komoditas", "Satpel", "Negara Asal", "Pelabuhan Masuk", "Pemohon"]);
        let profile = DatasetProfile::for_kind(DatasetKind::Import);
        assert!(missing_columns(&df, profile.required).is_empty());
    }

    #[test]
    fn test_missing_columns_compares_trimmed_headers() {
        let df = frame(&[" Komoditas ", "Satpel", "Negara Asal", "Pelabuhan Masuk", "Pemohon"]);
        let profile = DatasetProfile::for_kind(DatasetKind::Import);
        assert!(missing_columns(&df, profile.required).is_empty());
        let resolved = validate_schema(df, &profile).unwrap();
        assert!(resolved.column("Komoditas").is_ok());
    }

    #[test]
    fn test_fallback_satisfies_requirement() {
        let df = frame(&["Komoditas", "Satpel", "Daerah Tujuan", "Daerah Asal", "Pemohon"]);
        let profile = DatasetProfile::for_kind(DatasetKind::Export);
        assert!(missing_columns(&df, profile.required).is_empty());
    }
}
