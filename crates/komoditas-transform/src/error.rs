//! Error types for the transform stage and the full pipeline.

use std::path::PathBuf;

use komoditas_ingest::{LoadError, SchemaError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    #[error("failed to build export report: {message}")]
    Export { message: String },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// A failure anywhere between loading a file and aggregating it.
///
/// Load and schema failures are terminal for the dataset they occur in; no
/// filtered or aggregated state exists alongside them.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl PipelineError {
    /// Pipeline stage the failure happened in.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Schema(_) => "validate",
            Self::Transform(_) => "transform",
        }
    }
}
