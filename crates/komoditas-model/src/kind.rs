//! The four trade datasets the dashboard covers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of goods movement a dataset records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    /// Goods leaving the region for other parts of the country.
    #[serde(rename = "domestic-out")]
    DomesticOutbound,
    /// Goods leaving the country.
    #[serde(rename = "export")]
    Export,
    /// Goods arriving from other parts of the country.
    #[serde(rename = "domestic-in")]
    DomesticInbound,
    /// Goods arriving from abroad.
    #[serde(rename = "import")]
    Import,
}

impl DatasetKind {
    /// All kinds in dashboard tab order.
    pub const ALL: [DatasetKind; 4] = [
        Self::DomesticOutbound,
        Self::Export,
        Self::DomesticInbound,
        Self::Import,
    ];

    /// Stable identifier used on the command line, in config keys, and in file names.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::DomesticOutbound => "domestic-out",
            Self::Export => "export",
            Self::DomesticInbound => "domestic-in",
            Self::Import => "import",
        }
    }

    /// Human-readable tab title.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DomesticOutbound => "Domestik Keluar",
            Self::Export => "Ekspor",
            Self::DomesticInbound => "Domestik Masuk",
            Self::Import => "Impor",
        }
    }

    /// File name the dataset is read from when no configuration overrides it.
    #[must_use]
    pub const fn default_file_name(&self) -> &'static str {
        match self {
            Self::DomesticOutbound => "ujidokel.txt",
            Self::Export => "bahanekspor.txt",
            Self::DomesticInbound => "domas.txt",
            Self::Import => "impor.txt",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a slug names no dataset kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dataset kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for DatasetKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownKind(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trips_through_from_str() {
        for kind in DatasetKind::ALL {
            assert_eq!(kind.slug().parse::<DatasetKind>(), Ok(kind));
        }
    }

    #[test]
    fn from_str_ignores_case_and_padding() {
        assert_eq!(" IMPORT ".parse(), Ok(DatasetKind::Import));
        assert_eq!(
            "bogus".parse::<DatasetKind>(),
            Err(UnknownKind("bogus".to_string()))
        );
    }

    #[test]
    fn unknown_kind_message_names_input() {
        let err = "ekspor".parse::<DatasetKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown dataset kind: ekspor");
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
