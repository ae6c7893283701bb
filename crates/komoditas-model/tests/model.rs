//! Tests for komoditas-model types.

use komoditas_model::{
    Choice, DatasetKind, DatasetProfile, FilterSelection, FrequencyEntry, FrequencyTable,
};

#[test]
fn frequency_table_totals() {
    let table = FrequencyTable::new(
        "Negara Asal",
        vec![
            FrequencyEntry {
                value: "CHINA".to_string(),
                count: 3,
            },
            FrequencyEntry {
                value: "VIETNAM".to_string(),
                count: 1,
            },
        ],
    );
    assert_eq!(table.total(), 4);
    assert_eq!(table.len(), 2);
    assert_eq!(table.count_of("VIETNAM"), Some(1));
    assert_eq!(table.count_of("JEPANG"), None);
}

#[test]
fn selection_serializes() {
    let selection = FilterSelection::new(Choice::parse("Satpel A"), Choice::All);
    let json = serde_json::to_string(&selection).expect("serialize selection");
    let round: FilterSelection = serde_json::from_str(&json).expect("deserialize selection");
    assert_eq!(round, selection);
    assert_eq!(round.office.value(), Some("SATPEL A"));
}

#[test]
fn kind_serializes_as_slug() {
    let json = serde_json::to_string(&DatasetKind::DomesticInbound).expect("serialize kind");
    assert_eq!(json, "\"domestic-in\"");
}

#[test]
fn export_destination_falls_back_to_daerah_tujuan() {
    let profile = DatasetProfile::for_kind(DatasetKind::Export);
    let destination = profile
        .required
        .iter()
        .find(|req| req.name == "Tujuan")
        .expect("export requires Tujuan");
    assert_eq!(destination.fallback, Some("Daerah Tujuan"));
}
