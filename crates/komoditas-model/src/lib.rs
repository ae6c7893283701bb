//! Data model for the commodity trade dashboard engine.
//!
//! Holds the vocabulary shared by the ingest, transform, and CLI crates:
//! dataset kinds and their profiles, filter selections, and frequency tables.

pub mod columns;
pub mod frequency;
pub mod kind;
pub mod profile;
pub mod selection;

pub use columns::{OPTIONAL_COLUMNS, OptionalColumn, normalize_value};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use kind::{DatasetKind, UnknownKind};
pub use profile::{ColumnRequirement, CommodityMatch, DatasetProfile};
pub use selection::{Choice, FilterSelection};
