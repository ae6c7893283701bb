//! Command behavior against datasets in a temporary data directory.

use std::fs;

use komoditas_cli::commands::{
    OverviewStatus, SearchRequest, describe_kinds, list_commodities, list_offices, run_overview,
    run_search,
};
use komoditas_cli::config::AppConfig;
use komoditas_cli::summary::{kinds_table, overview_table};
use komoditas_ingest::TextEncoding;
use komoditas_model::DatasetKind;
use tempfile::TempDir;

const IMPORT_DATA: &str = "Komoditas\tSatpel\tNegara Asal\tPelabuhan Masuk\tPemohon\n\
                           Kopi\tPriok\tBrasil\tTanjung Priok\tCV Aroma\n\
                           kopi \tpriok\tVietnam\tTanjung Priok\tCV Aroma\n\
                           Teh\tPriok\tIndia\tTanjung Priok\tPT Daun\n\
                           Durian\tPerak\tThailand\tTanjung Perak\tPT Segar\n";

const EXPORT_DATA: &str = "Komoditas\tSatpel\tDaerah Tujuan\tDaerah Asal\tPemohon\n\
                           Sarang Walet\tPriok\tChina\tJakarta\tPT Walet\n";

fn data_dir() -> (TempDir, AppConfig) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("impor.txt"), IMPORT_DATA).unwrap();
    fs::write(dir.path().join("bahanekspor.txt"), EXPORT_DATA).unwrap();
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    (dir, config)
}

fn request(satpel: Option<&str>, komoditas: Option<&str>) -> SearchRequest {
    SearchRequest {
        kind: DatasetKind::Import,
        satpel: satpel.map(str::to_string),
        komoditas: komoditas.map(str::to_string),
        export_dir: None,
    }
}

#[test]
fn kinds_report_missing_files() {
    let (_dir, config) = data_dir();

    let kinds = describe_kinds(&config);

    assert_eq!(kinds.len(), 4);
    let import = kinds.iter().find(|k| k.kind == DatasetKind::Import).unwrap();
    assert!(import.exists);
    let domestic = kinds
        .iter()
        .find(|k| k.kind == DatasetKind::DomesticInbound)
        .unwrap();
    assert!(!domestic.exists);
    let export = kinds.iter().find(|k| k.kind == DatasetKind::Export).unwrap();
    assert!(export.required.iter().any(|c| c == "Tujuan (or Daerah Tujuan)"));
    let rendered = kinds_table(&kinds).to_string();
    assert!(rendered.contains("domestic-in"));
    assert!(rendered.contains("(missing)"));
}

#[test]
fn offices_and_commodities_cascade() {
    let (_dir, config) = data_dir();

    let offices = list_offices(&config, DatasetKind::Import).unwrap();
    assert_eq!(offices, vec!["PERAK", "PRIOK"]);

    let all = list_commodities(&config, DatasetKind::Import, None).unwrap();
    assert_eq!(all, vec!["DURIAN", "KOPI", "TEH"]);

    let priok = list_commodities(&config, DatasetKind::Import, Some("priok")).unwrap();
    assert_eq!(priok, vec!["KOPI", "TEH"]);

    let semua = list_commodities(&config, DatasetKind::Import, Some("semua")).unwrap();
    assert_eq!(semua, all);
}

#[test]
fn search_counts_and_ranks() {
    let (_dir, config) = data_dir();

    let result = run_search(&config, &request(Some("Priok"), Some("KOPI"))).unwrap();

    assert!(result.reset_commodity.is_none());
    assert_eq!(result.outcome.matched_rows(), 2);
    let pemohon = &result.outcome.frequencies[2];
    assert_eq!(pemohon.column, "Pemohon");
    assert_eq!(pemohon.count_of("CV AROMA"), Some(2));
}

#[test]
fn unavailable_commodity_is_reset() {
    let (_dir, config) = data_dir();

    let result = run_search(&config, &request(Some("Perak"), Some("Kopi"))).unwrap();

    assert_eq!(result.reset_commodity.as_deref(), Some("KOPI"));
    assert!(result.outcome.selection.commodity.is_all());
    assert_eq!(result.outcome.matched_rows(), 1);
}

#[test]
fn unknown_commodity_yields_empty_search() {
    let (_dir, config) = data_dir();

    let result = run_search(&config, &request(None, Some("KOPII"))).unwrap();

    assert!(result.reset_commodity.is_none());
    assert_eq!(result.outcome.matched_rows(), 0);
    assert_eq!(
        result.outcome.export_file_name(),
        "import_KOPII_SEMUA.txt"
    );
}

#[test]
fn search_json_and_export() {
    let (dir, config) = data_dir();
    let out = dir.path().join("out");
    let mut req = request(Some("Priok"), None);
    req.export_dir = Some(out.clone());

    let result = run_search(&config, &req).unwrap();

    let path = result.export_path.clone().unwrap();
    assert_eq!(path, out.join("import_SEMUA_PRIOK.txt"));
    let report = fs::read_to_string(&path).unwrap();
    assert!(report.starts_with("Negara Asal\tFrekuensi\n"));

    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert_eq!(json["kind"], "import");
    assert_eq!(json["matched_rows"], 3);
    assert!(json["reset_commodity"].is_null());
    assert!(json["export_path"].as_str().unwrap().ends_with("import_SEMUA_PRIOK.txt"));
}

#[test]
fn missing_dataset_reports_path() {
    let (_dir, config) = data_dir();

    let err = list_offices(&config, DatasetKind::DomesticOutbound).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("ujidokel.txt"));
}

#[test]
fn overview_isolates_failures() {
    let (dir, config) = data_dir();
    fs::write(
        dir.path().join("domas.txt"),
        "Komoditas\tSatpel\tDaerah Asal\n",
    )
    .unwrap();

    let rows = run_overview(&config);

    assert_eq!(rows.len(), 4);
    let status_of = |kind: DatasetKind| &rows.iter().find(|r| r.kind == kind).unwrap().status;
    match status_of(DatasetKind::Import) {
        OverviewStatus::Ready {
            encoding,
            rows,
            offices,
            commodities,
        } => {
            assert_eq!(*encoding, TextEncoding::Utf8);
            assert_eq!(*rows, 4);
            assert_eq!(*offices, 2);
            assert_eq!(*commodities, 3);
        }
        other => panic!("import should load, got {other:?}"),
    }
    assert!(matches!(
        status_of(DatasetKind::Export),
        OverviewStatus::Ready { rows: 1, .. }
    ));
    assert!(matches!(
        status_of(DatasetKind::DomesticInbound),
        OverviewStatus::Failed { stage: "validate", .. }
    ));
    assert!(matches!(
        status_of(DatasetKind::DomesticOutbound),
        OverviewStatus::Failed { stage: "load", .. }
    ));
    let rendered = overview_table(&rows).to_string();
    assert!(rendered.contains("FAILED (validate)"));
}
