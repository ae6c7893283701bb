//! Filtering and frequency aggregation over commodity datasets.
//!
//! Every function here is pure: it takes a frame (and a selection) and returns
//! a new value, so one pipeline run can never observe another's state.

pub mod error;
pub mod export;
pub mod filter;
pub mod frame;
pub mod frequency;
pub mod normalize;
pub mod pipeline;

pub use error::{PipelineError, Result, TransformError};
pub use export::{
    ClassificationRow, classification_rows, export_file_name, render_report, write_report,
};
pub use filter::{apply_filter, available_commodities, available_offices, reconcile_commodity};
pub use frequency::{frequency_of, frequency_tables};
pub use normalize::normalize;
pub use pipeline::{PipelineOutcome, PreparedDataset, SearchReport, prepare, run_pipeline};
