use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use drills_cipher::CipherConfig;
use drills_currency::CurrencyConfig;
use drills_merge::MergeConfig;

/// Per-command defaults, loaded from a TOML file.
///
/// ```toml
/// [merge]
/// bounds = "extend"
///
/// [cipher]
/// shift = 13
///
/// [currency]
/// fraction_digits = 2
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillsConfig {
    pub merge: MergeConfig,
    pub cipher: CipherConfig,
    pub currency: CurrencyConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl DrillsConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
