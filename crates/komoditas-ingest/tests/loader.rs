//! Integration tests for the encoding-resilient loader.

use std::io::Write;

use komoditas_ingest::{LoadError, TextEncoding, load_dataset};
use tempfile::NamedTempFile;

fn write_bytes(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn first_value(frame: &polars::prelude::DataFrame, column: &str) -> Option<String> {
    frame
        .column(column)
        .unwrap()
        .str()
        .unwrap()
        .get(0)
        .map(str::to_string)
}

#[test]
fn loads_plain_utf8() {
    let file = write_bytes("Komoditas\tSatpel\nKopi\tSatpel A\nTeh\tSatpel B\n".as_bytes());
    let loaded = load_dataset(file.path()).unwrap();

    assert_eq!(loaded.encoding, TextEncoding::Utf8);
    assert_eq!(loaded.frame.height(), 2);
    assert_eq!(first_value(&loaded.frame, "Komoditas").as_deref(), Some("Kopi"));
}

#[test]
fn loads_utf8_with_byte_order_mark() {
    let file = write_bytes("\u{feff}Komoditas\tSatpel\nKopi\tA\n".as_bytes());
    let loaded = load_dataset(file.path()).unwrap();

    assert!(loaded.frame.column("Komoditas").is_ok());
    assert_eq!(loaded.frame.height(), 1);
}

#[test]
fn loads_windows_1252_text() {
    let file = write_bytes(b"Komoditas\tSatpel\nJamur \xe9noki\tA\n");
    let loaded = load_dataset(file.path()).unwrap();

    assert_eq!(loaded.encoding, TextEncoding::Windows1252);
    assert_eq!(
        first_value(&loaded.frame, "Komoditas").as_deref(),
        Some("Jamur \u{e9}noki")
    );
}

#[test]
fn numeric_looking_values_stay_text() {
    let file = write_bytes(b"Kode HS\tKomoditas\n00120\tBenih\n");
    let loaded = load_dataset(file.path()).unwrap();

    assert_eq!(first_value(&loaded.frame, "Kode HS").as_deref(), Some("00120"));
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_dataset(&dir.path().join("impor.txt"));

    assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
}

#[test]
fn bytes_invalid_in_every_encoding_are_unreadable() {
    // 0x81 is undefined in cp1252 and the NUL byte is rejected as binary content.
    let file = write_bytes(b"Komoditas\tSatpel\n\x81\x00\xff\tA\n");
    let result = load_dataset(file.path());

    assert!(matches!(result, Err(LoadError::Unreadable { .. })));
}

#[test]
fn empty_file_is_unreadable() {
    let file = write_bytes(b"");
    let result = load_dataset(file.path());

    assert!(matches!(result, Err(LoadError::Unreadable { .. })));
}

#[test]
fn header_only_file_loads_with_zero_rows() {
    let file = write_bytes(b"Komoditas\tSatpel\tNegara Asal\tPelabuhan Masuk\tPemohon\n");
    let loaded = load_dataset(file.path()).unwrap();

    assert_eq!(loaded.frame.height(), 0);
    assert_eq!(loaded.frame.width(), 5);
}
