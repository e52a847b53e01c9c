//! User preferences persisted alongside the record collections.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use fintrack_core::{
    currency::{CurrencyCode, LocaleConfig},
    CoreError,
};

/// Stores user-configurable tracker preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for the record collections.
    pub data_root: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            locale: LocaleConfig::default(),
            data_root: None,
        }
    }
}

impl TrackerConfig {
    /// Resolves the directory holding the record collections.
    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("fintrack")
    }

    /// Loads the config at `path`, falling back to defaults when absent.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(self).map_err(|err| CoreError::Serde(err.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }
}
