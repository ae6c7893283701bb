//! Delimited text to DataFrame conversion.

use std::collections::HashSet;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

/// Normalizes a header cell: trims whitespace and a stray byte-order mark.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Makes header names unique and non-empty.
///
/// Blank headers become `Unnamed: <index>`; repeated names get `.1`, `.2`, ...
fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(raw.len());
    for (idx, name) in raw.into_iter().enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

/// Parses delimited text into a DataFrame of nullable string columns.
///
/// The first record is the header. Empty cells become nulls, short rows are
/// padded with nulls, and a row with extra non-empty fields is rejected.
/// Returns a human-readable reason on failure.
pub fn parse_delimited(text: &str, delimiter: u8) -> Result<DataFrame, String> {
    if text.contains('\0') {
        return Err("binary content (NUL byte)".to_string());
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header_record = match records.next() {
        Some(record) => record.map_err(|e| format!("header: {e}"))?,
        None => return Err("no header row".to_string()),
    };
    let headers = dedupe_headers(header_record.iter().map(normalize_header).collect());
    let width = headers.len();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    for record in records {
        let record = record.map_err(|e| e.to_string())?;
        if record.len() > width && record.iter().skip(width).any(|cell| !cell.is_empty()) {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(format!(
                "line {line}: expected {width} fields, saw {}",
                record.len()
            ));
        }
        for (idx, values) in columns.iter_mut().enumerate() {
            let cell = record.get(idx).filter(|cell| !cell.is_empty());
            values.push(cell.map(str::to_string));
        }
    }

    let frame_columns: Vec<Column> = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into_column())
        .collect();
    DataFrame::new(frame_columns).map_err(|e| e.to_string())
}
