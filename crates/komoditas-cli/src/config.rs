//! Dashboard configuration loaded from `komoditas.toml`.
//!
//! Resolution order for the file itself:
//! 1. `--config PATH`
//! 2. `KOMODITAS_CONFIG` environment variable
//! 3. `komoditas.toml` in the working directory, when present
//! 4. built-in defaults
//!
//! `--data-dir` and `KOMODITAS_DATA_DIR` override `data_dir` afterwards, in
//! that order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use komoditas_model::DatasetKind;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "KOMODITAS_CONFIG";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "KOMODITAS_DATA_DIR";

/// File looked up in the working directory when nothing else names one.
pub const DEFAULT_CONFIG_FILE: &str = "komoditas.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Dataset file names, relative to the data directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetFiles {
    pub domestic_out: PathBuf,
    pub export: PathBuf,
    pub domestic_in: PathBuf,
    pub import: PathBuf,
}

impl Default for DatasetFiles {
    fn default() -> Self {
        Self {
            domestic_out: DatasetKind::DomesticOutbound.default_file_name().into(),
            export: DatasetKind::Export.default_file_name().into(),
            domestic_in: DatasetKind::DomesticInbound.default_file_name().into(),
            import: DatasetKind::Import.default_file_name().into(),
        }
    }
}

impl DatasetFiles {
    #[must_use]
    pub fn file_for(&self, kind: DatasetKind) -> &Path {
        match kind {
            DatasetKind::DomesticOutbound => &self.domestic_out,
            DatasetKind::Export => &self.export,
            DatasetKind::DomesticInbound => &self.domestic_in,
            DatasetKind::Import => &self.import,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub files: DatasetFiles,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            files: DatasetFiles::default(),
        }
    }
}

/// Inputs to [`AppConfig::resolve`], gathered from flags and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub config_flag: Option<PathBuf>,
    pub config_env: Option<PathBuf>,
    pub data_dir_flag: Option<PathBuf>,
    pub data_dir_env: Option<PathBuf>,
    /// Directory searched for [`DEFAULT_CONFIG_FILE`].
    pub working_dir: PathBuf,
}

impl ConfigSources {
    /// Reads the environment variables and pairs them with the CLI flags.
    pub fn from_env(config_flag: Option<PathBuf>, data_dir_flag: Option<PathBuf>) -> Self {
        Self {
            config_flag,
            config_env: env_path(CONFIG_ENV_VAR),
            data_dir_flag,
            data_dir_env: env_path(DATA_DIR_ENV_VAR),
            working_dir: PathBuf::from("."),
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

impl AppConfig {
    /// Parses a TOML document; `origin` only labels errors.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Applies the documented precedence to `sources`.
    ///
    /// An explicitly named file that cannot be read is an error; a missing
    /// `komoditas.toml` in the working directory is not.
    pub fn resolve(sources: &ConfigSources) -> Result<Self, ConfigError> {
        let explicit = sources
            .config_flag
            .as_ref()
            .or(sources.config_env.as_ref());
        let mut config = if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            Self::load_file(path)?
        } else {
            let local = sources.working_dir.join(DEFAULT_CONFIG_FILE);
            if local.is_file() {
                debug!(path = %local.display(), "loading config");
                Self::load_file(&local)?
            } else {
                debug!("no config file, using defaults");
                Self::default()
            }
        };
        if let Some(dir) = sources
            .data_dir_flag
            .as_ref()
            .or(sources.data_dir_env.as_ref())
        {
            config.data_dir.clone_from(dir);
        }
        Ok(config)
    }

    /// Location of the dataset file for `kind`.
    #[must_use]
    pub fn dataset_path(&self, kind: DatasetKind) -> PathBuf {
        self.data_dir.join(self.files.file_for(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_known_file_names() {
        let config = AppConfig::default();
        assert_eq!(
            config.dataset_path(DatasetKind::Import),
            Path::new(".").join("impor.txt")
        );
        assert_eq!(
            config.files.file_for(DatasetKind::DomesticOutbound),
            Path::new("ujidokel.txt")
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            "data_dir = \"data\"\n[files]\nexport = \"ekspor_2024.txt\"\n",
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.files.export, PathBuf::from("ekspor_2024.txt"));
        assert_eq!(config.files.import, PathBuf::from("impor.txt"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("datadir = \"x\"\n", Path::new("inline")).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn absolute_file_ignores_data_dir() {
        let config = AppConfig::from_toml_str(
            "data_dir = \"data\"\n[files]\nimport = \"/srv/impor.txt\"\n",
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(
            config.dataset_path(DatasetKind::Import),
            PathBuf::from("/srv/impor.txt")
        );
    }
}
