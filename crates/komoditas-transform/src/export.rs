//! Downloadable report combining frequency tables and commodity classifications.

use std::collections::HashSet;
use std::path::Path;

use csv::WriterBuilder;
use polars::prelude::{DataFrame, StringChunked};
use serde::Serialize;

use komoditas_model::columns::{FREKUENSI, KLASIFIKASI, KODE_HS, KOMODITAS, NAMA_TERCETAK};
use komoditas_model::{DatasetKind, FilterSelection, FrequencyTable};

use crate::error::{Result, TransformError};
use crate::frame::text_column;

/// Classification metadata of one commodity as it appears in the data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassificationRow {
    pub komoditas: String,
    pub klasifikasi: String,
    pub nama_tercetak: String,
    pub kode_hs: String,
}

impl ClassificationRow {
    pub const HEADER: [&'static str; 4] = [KOMODITAS, KLASIFIKASI, NAMA_TERCETAK, KODE_HS];

    pub fn fields(&self) -> [&str; 4] {
        [
            self.komoditas.as_str(),
            self.klasifikasi.as_str(),
            self.nama_tercetak.as_str(),
            self.kode_hs.as_str(),
        ]
    }
}

/// Distinct classification rows in first-appearance order.
///
/// The frame must carry the optional classification columns, which schema
/// validation guarantees.
pub fn classification_rows(frame: &DataFrame) -> Result<Vec<ClassificationRow>> {
    let columns = [
        text_column(frame, KOMODITAS)?,
        text_column(frame, KLASIFIKASI)?,
        text_column(frame, NAMA_TERCETAK)?,
        text_column(frame, KODE_HS)?,
    ];
    let [komoditas, klasifikasi, nama_tercetak, kode_hs] = [
        columns[0].str()?,
        columns[1].str()?,
        columns[2].str()?,
        columns[3].str()?,
    ];

    let mut seen: HashSet<ClassificationRow> = HashSet::new();
    let mut rows = Vec::new();
    for idx in 0..frame.height() {
        let cell = |ca: &StringChunked| ca.get(idx).unwrap_or_default().to_string();
        let row = ClassificationRow {
            komoditas: cell(komoditas),
            klasifikasi: cell(klasifikasi),
            nama_tercetak: cell(nama_tercetak),
            kode_hs: cell(kode_hs),
        };
        if seen.insert(row.clone()) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// File name for a report: `<kind>_<commodity>_<office>.txt`.
///
/// Unconstrained choices render as `SEMUA`; spaces and path separators
/// become underscores.
pub fn export_file_name(kind: DatasetKind, selection: &FilterSelection) -> String {
    let stem = format!(
        "{}_{}_{}",
        kind.slug(),
        selection.commodity,
        selection.office
    );
    let stem: String = stem
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("{stem}.txt")
}

fn export_error(err: impl std::fmt::Display) -> TransformError {
    TransformError::Export {
        message: err.to_string(),
    }
}

/// Writes one tab-delimited section.
fn render_section<'a, R>(header: &[&str], rows: R) -> Result<String>
where
    R: IntoIterator<Item = Vec<&'a str>>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(false)
        .from_writer(Vec::new());
    writer.write_record(header).map_err(export_error)?;
    for row in rows {
        writer.write_record(&row).map_err(export_error)?;
    }
    let bytes = writer.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}

/// Renders the report: each frequency table, then the classification rows,
/// with a blank line between sections.
pub fn render_report(
    tables: &[FrequencyTable],
    classifications: &[ClassificationRow],
) -> Result<String> {
    let mut sections = Vec::with_capacity(tables.len() + 1);
    for table in tables {
        let counts: Vec<String> = table
            .entries
            .iter()
            .map(|entry| entry.count.to_string())
            .collect();
        let rows = table
            .entries
            .iter()
            .zip(&counts)
            .map(|(entry, count)| vec![entry.value.as_str(), count.as_str()]);
        sections.push(render_section(&[table.column.as_str(), FREKUENSI], rows)?);
    }
    let rows = classifications.iter().map(|row| row.fields().to_vec());
    sections.push(render_section(&ClassificationRow::HEADER, rows)?);
    Ok(sections.join("\n"))
}

/// Renders the report and writes it to `path`.
pub fn write_report(
    path: &Path,
    tables: &[FrequencyTable],
    classifications: &[ClassificationRow],
) -> Result<()> {
    let report = render_report(tables, classifications)?;
    std::fs::write(path, report).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use komoditas_model::{Choice, FrequencyEntry};

    #[test]
    fn file_name_replaces_spaces() {
        let selection = FilterSelection::new(
            Choice::parse("satpel teluk bayur"),
            Choice::parse("buah durian"),
        );
        assert_eq!(
            export_file_name(DatasetKind::Import, &selection),
            "import_BUAH_DURIAN_SATPEL_TELUK_BAYUR.txt"
        );
    }

    #[test]
    fn file_name_uses_semua_for_all() {
        assert_eq!(
            export_file_name(DatasetKind::DomesticOutbound, &FilterSelection::all()),
            "domestic-out_SEMUA_SEMUA.txt"
        );
    }

    #[test]
    fn file_name_strips_path_separators() {
        let selection = FilterSelection::new(Choice::All, Choice::parse("a/b"));
        assert_eq!(
            export_file_name(DatasetKind::Export, &selection),
            "export_A_B_SEMUA.txt"
        );
    }

    #[test]
    fn report_has_sections_separated_by_blank_lines() {
        let tables = vec![FrequencyTable::new(
            "Negara Asal",
            vec![
                FrequencyEntry {
                    value: "CHINA".to_string(),
                    count: 2,
                },
                FrequencyEntry {
                    value: "JEPANG".to_string(),
                    count: 1,
                },
            ],
        )];
        let classifications = vec![ClassificationRow {
            komoditas: "KOPI".to_string(),
            klasifikasi: "-".to_string(),
            nama_tercetak: "Coffee".to_string(),
            kode_hs: "0901".to_string(),
        }];

        let report = render_report(&tables, &classifications).unwrap();
        assert_eq!(
            report,
            "Negara Asal\tFrekuensi\nCHINA\t2\nJEPANG\t1\n\n\
             Komoditas\tKlasifikasi\tNama Tercetak\tKode HS\nKOPI\t-\tCoffee\t0901\n"
        );
    }

    #[test]
    fn report_without_tables_still_lists_classifications() {
        let report = render_report(&[], &[]).unwrap();
        assert_eq!(report, "Komoditas\tKlasifikasi\tNama Tercetak\tKode HS\n");
    }
}
