//! Per-dataset pipeline: load, validate, normalize, filter, aggregate.
//!
//! Each call reads the file afresh and returns owned results; nothing is
//! cached between calls, so a file that changes on disk is picked up on the
//! next run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{info, info_span};

use komoditas_ingest::{LoadedDataset, TextEncoding, load_dataset, validate_schema};
use komoditas_model::{Choice, DatasetKind, DatasetProfile, FilterSelection, FrequencyTable};

use crate::error::{PipelineError, Result, TransformError};
use crate::export::{ClassificationRow, classification_rows, export_file_name, write_report};
use crate::filter::{apply_filter, available_commodities, available_offices, reconcile_commodity};
use crate::frequency::frequency_tables;
use crate::normalize::normalize;

/// A dataset that passed loading, validation, and normalization.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    pub profile: DatasetProfile,
    pub path: PathBuf,
    pub encoding: TextEncoding,
    pub frame: DataFrame,
}

/// Loads, validates, and normalizes the dataset of `kind` stored at `path`.
pub fn prepare(
    kind: DatasetKind,
    path: &Path,
) -> std::result::Result<PreparedDataset, PipelineError> {
    let span = info_span!("dataset", kind = %kind, path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let LoadedDataset { frame, encoding } = load_dataset(path)?;
    let profile = DatasetProfile::for_kind(kind);
    let frame = validate_schema(frame, &profile)?;
    let frame = normalize(frame, profile.normalized_columns())?;

    info!(
        rows = frame.height(),
        %encoding,
        duration_ms = start.elapsed().as_millis(),
        "dataset prepared"
    );
    Ok(PreparedDataset {
        profile,
        path: path.to_path_buf(),
        encoding,
        frame,
    })
}

impl PreparedDataset {
    pub fn kind(&self) -> DatasetKind {
        self.profile.kind
    }

    pub fn offices(&self) -> Result<Vec<String>> {
        available_offices(&self.frame)
    }

    pub fn commodities(&self, office: &Choice) -> Result<Vec<String>> {
        available_commodities(&self.frame, office)
    }

    /// Resets a commodity choice the chosen office does not offer.
    pub fn reconcile(&self, selection: FilterSelection) -> Result<FilterSelection> {
        reconcile_commodity(&self.frame, selection, self.profile.commodity_match)
    }

    /// Filters by `selection` and aggregates the matching rows.
    pub fn search(&self, selection: FilterSelection) -> Result<PipelineOutcome> {
        let start = Instant::now();
        let matched = apply_filter(&self.frame, &selection, self.profile.commodity_match)?;
        let frequencies = frequency_tables(&matched, self.profile.frequency_columns)?;
        let classifications = classification_rows(&matched)?;
        info!(
            kind = %self.kind(),
            office = %selection.office,
            commodity = %selection.commodity,
            matched = matched.height(),
            total = self.frame.height(),
            duration_ms = start.elapsed().as_millis(),
            "search complete"
        );
        Ok(PipelineOutcome {
            kind: self.kind(),
            path: self.path.clone(),
            encoding: self.encoding,
            total_rows: self.frame.height(),
            selection,
            matched,
            frequencies,
            classifications,
        })
    }
}

/// Filtered rows and their breakdowns for one selection.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub kind: DatasetKind,
    pub path: PathBuf,
    pub encoding: TextEncoding,
    pub total_rows: usize,
    pub selection: FilterSelection,
    pub matched: DataFrame,
    pub frequencies: Vec<FrequencyTable>,
    pub classifications: Vec<ClassificationRow>,
}

/// Serializable view of a [`PipelineOutcome`].
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub kind: DatasetKind,
    pub path: PathBuf,
    pub encoding: TextEncoding,
    pub total_rows: usize,
    pub matched_rows: usize,
    pub selection: FilterSelection,
    pub frequencies: Vec<FrequencyTable>,
    pub classifications: Vec<ClassificationRow>,
}

impl PipelineOutcome {
    pub fn matched_rows(&self) -> usize {
        self.matched.height()
    }

    /// True when no row matched; an informational state, not a failure.
    pub fn is_empty(&self) -> bool {
        self.matched.height() == 0
    }

    pub fn report(&self) -> SearchReport {
        SearchReport {
            kind: self.kind,
            path: self.path.clone(),
            encoding: self.encoding,
            total_rows: self.total_rows,
            matched_rows: self.matched_rows(),
            selection: self.selection.clone(),
            frequencies: self.frequencies.clone(),
            classifications: self.classifications.clone(),
        }
    }

    pub fn export_file_name(&self) -> String {
        export_file_name(self.kind, &self.selection)
    }

    /// Writes the export report into `dir` and returns the file path.
    pub fn write_export(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|source| TransformError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(self.export_file_name());
        write_report(&path, &self.frequencies, &self.classifications)?;
        info!(path = %path.display(), "export written");
        Ok(path)
    }
}

/// Runs the whole pipeline for one dataset and one selection.
pub fn run_pipeline(
    kind: DatasetKind,
    path: &Path,
    selection: FilterSelection,
) -> std::result::Result<PipelineOutcome, PipelineError> {
    let prepared = prepare(kind, path)?;
    Ok(prepared.search(selection)?)
}
