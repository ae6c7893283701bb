//! Filter selections passed into the engine by the presenter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns::normalize_value;

/// One selectable field: either unconstrained or a specific normalized value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    #[default]
    All,
    Value(String),
}

impl Choice {
    /// Keywords that select everything; the second is the dashboard's own label.
    pub const ALL_KEYWORDS: [&'static str; 2] = ["ALL", "SEMUA"];

    /// Parses user input. Empty input or an "all" keyword yields [`Choice::All`].
    ///
    /// The keywords are reserved: a data value spelled `ALL` or `SEMUA` is
    /// only selectable by building [`Choice::Value`] directly.
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize_value(raw);
        if normalized.is_empty() || Self::ALL_KEYWORDS.contains(&normalized.as_str()) {
            Self::All
        } else {
            Self::Value(normalized)
        }
    }

    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("SEMUA"),
            Self::Value(value) => f.write_str(value),
        }
    }
}

/// Branch office and commodity constraints applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub office: Choice,
    pub commodity: Choice,
}

impl FilterSelection {
    pub fn new(office: Choice, commodity: Choice) -> Self {
        Self { office, commodity }
    }

    /// The unconstrained selection.
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_commodity(mut self, commodity: Choice) -> Self {
        self.commodity = commodity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_all_keywords() {
        assert_eq!(Choice::parse("ALL"), Choice::All);
        assert_eq!(Choice::parse(" semua "), Choice::All);
        assert_eq!(Choice::parse(""), Choice::All);
        assert_eq!(Choice::parse("   "), Choice::All);
    }

    #[test]
    fn keywords_only_match_whole_input() {
        assert_eq!(
            Choice::parse("semua kopi"),
            Choice::Value("SEMUA KOPI".to_string())
        );
        assert_eq!(
            Choice::parse("ALLIUM"),
            Choice::Value("ALLIUM".to_string())
        );
        assert!(!Choice::Value("SEMUA".into()).is_all());
    }

    #[test]
    fn parse_normalizes_values() {
        assert_eq!(
            Choice::parse(" buah durian"),
            Choice::Value("BUAH DURIAN".to_string())
        );
    }

    #[test]
    fn display_uses_dashboard_label_for_all() {
        assert_eq!(Choice::All.to_string(), "SEMUA");
        assert_eq!(Choice::Value("KOPI".into()).to_string(), "KOPI");
    }

    #[test]
    fn from_option_defaults_to_all() {
        assert_eq!(Choice::from_option(None), Choice::All);
        assert_eq!(Choice::from_option(Some("a")), Choice::Value("A".into()));
    }
}
