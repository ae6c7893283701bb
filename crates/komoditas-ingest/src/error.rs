//! Error types for commodity data ingestion.

use std::path::PathBuf;

use komoditas_model::DatasetKind;
use thiserror::Error;

/// Errors raised while reading a dataset file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Dataset file not found.
    #[error("data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File exceeds the loader's size limit.
    #[error("data file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No encoding in the fallback list produced a parseable table.
    #[error("could not read {path} with any supported encoding: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Errors raised while checking a loaded table against its dataset schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// One or more required columns are absent.
    #[error("{kind} data is missing required columns: {}", missing.join(", "))]
    MissingColumns {
        kind: DatasetKind,
        missing: Vec<String>,
    },

    /// Failed DataFrame operation while resolving columns.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for SchemaError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}
