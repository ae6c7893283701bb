//! Per-kind pipeline configuration.
//!
//! The four datasets share one pipeline; everything that differs between them
//! lives in a [`DatasetProfile`].

use serde::{Deserialize, Serialize};

use crate::columns::{
    DAERAH_ASAL, DAERAH_TUJUAN, KOMODITAS, NEGARA_ASAL, PELABUHAN_MASUK, PEMOHON, PROVINSI, PULAU,
    SATPEL, TUJUAN,
};
use crate::kind::DatasetKind;

/// A column the dataset must provide, optionally satisfied by a fallback column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRequirement {
    pub name: &'static str,
    /// Column used in place of `name` when the file lacks `name`.
    pub fallback: Option<&'static str>,
}

impl ColumnRequirement {
    pub const fn exact(name: &'static str) -> Self {
        Self {
            name,
            fallback: None,
        }
    }

    pub const fn with_fallback(name: &'static str, fallback: &'static str) -> Self {
        Self {
            name,
            fallback: Some(fallback),
        }
    }
}

/// How a commodity choice is compared against the commodity column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommodityMatch {
    /// The value must equal the choice.
    Exact,
    /// The value must contain the choice.
    Substring,
}

impl CommodityMatch {
    #[must_use]
    pub fn matches(&self, value: &str, choice: &str) -> bool {
        match self {
            Self::Exact => value == choice,
            Self::Substring => value.contains(choice),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Substring => "substring",
        }
    }
}

const DOMESTIC_OUTBOUND_REQUIRED: [ColumnRequirement; 5] = [
    ColumnRequirement::exact(DAERAH_TUJUAN),
    ColumnRequirement::exact(KOMODITAS),
    ColumnRequirement::exact(PROVINSI),
    ColumnRequirement::exact(PULAU),
    ColumnRequirement::exact(SATPEL),
];

const EXPORT_REQUIRED: [ColumnRequirement; 5] = [
    ColumnRequirement::exact(KOMODITAS),
    ColumnRequirement::exact(SATPEL),
    ColumnRequirement::with_fallback(TUJUAN, DAERAH_TUJUAN),
    ColumnRequirement::exact(DAERAH_ASAL),
    ColumnRequirement::exact(PEMOHON),
];

const DOMESTIC_INBOUND_REQUIRED: [ColumnRequirement; 5] = [
    ColumnRequirement::exact(KOMODITAS),
    ColumnRequirement::exact(SATPEL),
    ColumnRequirement::exact(DAERAH_ASAL),
    ColumnRequirement::exact(DAERAH_TUJUAN),
    ColumnRequirement::exact(PEMOHON),
];

const IMPORT_REQUIRED: [ColumnRequirement; 5] = [
    ColumnRequirement::exact(KOMODITAS),
    ColumnRequirement::exact(SATPEL),
    ColumnRequirement::exact(NEGARA_ASAL),
    ColumnRequirement::exact(PELABUHAN_MASUK),
    ColumnRequirement::exact(PEMOHON),
];

/// Schema, commodity policy, and breakdown columns of one dataset kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetProfile {
    pub kind: DatasetKind,
    pub required: &'static [ColumnRequirement],
    pub commodity_match: CommodityMatch,
    /// Columns broken down into frequency tables, in display order.
    pub frequency_columns: &'static [&'static str],
}

impl DatasetProfile {
    #[must_use]
    pub const fn for_kind(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::DomesticOutbound => Self {
                kind,
                required: &DOMESTIC_OUTBOUND_REQUIRED,
                commodity_match: CommodityMatch::Substring,
                frequency_columns: &[DAERAH_TUJUAN, PROVINSI, PULAU],
            },
            DatasetKind::Export => Self {
                kind,
                required: &EXPORT_REQUIRED,
                commodity_match: CommodityMatch::Exact,
                frequency_columns: &[TUJUAN, DAERAH_ASAL, PEMOHON],
            },
            DatasetKind::DomesticInbound => Self {
                kind,
                required: &DOMESTIC_INBOUND_REQUIRED,
                commodity_match: CommodityMatch::Exact,
                frequency_columns: &[DAERAH_ASAL, DAERAH_TUJUAN, PEMOHON],
            },
            DatasetKind::Import => Self {
                kind,
                required: &IMPORT_REQUIRED,
                commodity_match: CommodityMatch::Exact,
                frequency_columns: &[NEGARA_ASAL, PELABUHAN_MASUK, PEMOHON],
            },
        }
    }

    /// Columns the normalizer rewrites: every required column under its canonical name.
    pub fn normalized_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required.iter().map(|req| req.name)
    }
}
