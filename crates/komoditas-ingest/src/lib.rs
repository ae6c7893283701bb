//! Commodity data ingestion.
//!
//! This crate turns a tab-delimited export of unknown text encoding into a
//! Polars DataFrame of string columns, then checks it against the schema of
//! its dataset kind.
//!
//! # Features
//!
//! - **Encoding fallback**: UTF-8, UTF-8 with BOM, Windows-1252, Latin-1 and
//!   ISO-8859-1 are tried in that order; the first that decodes and parses wins
//! - **Text-only columns**: no type inference, so codes keep their leading zeros
//! - **Schema validation**: reports every missing required column at once and
//!   resolves fallback and optional columns in one place
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use komoditas_ingest::{load_dataset, validate_schema};
//! use komoditas_model::{DatasetKind, DatasetProfile};
//!
//! let loaded = load_dataset(Path::new("data/impor.txt"))?;
//! let profile = DatasetProfile::for_kind(DatasetKind::Import);
//! let frame = validate_schema(loaded.frame, &profile)?;
//! ```

mod encoding;
mod error;
mod loader;
mod schema;
mod table;

// === Error Types ===
pub use error::{LoadError, SchemaError};

// === Loading ===
pub use encoding::TextEncoding;
pub use loader::{
    LoadedDataset, MAX_FILE_SIZE, TAB, check_file_size, decode_and_parse, load_dataset,
    load_delimited,
};
pub use table::parse_delimited;

// === Schema ===
pub use schema::{missing_columns, validate_schema};
