//! Operator settings: `~/.config/healing-hub/settings.toml`.
//!
//! Every key is optional. A missing file is the same as an empty one.

use std::path::{Path, PathBuf};

use healing_hub_catalog::NormalizeDefaults;
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub database: DatabaseSettings,
    pub import: ImportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct DatabaseSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ImportSettings {
    pub default_category: Option<String>,
    pub tool_context: Option<String>,
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("healing-hub").join("settings.toml")
}

/// Default database location: `<data dir>/healing-hub/glossary.db`.
pub(crate) fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("healing-hub").join("glossary.db")
}

pub(crate) fn load_settings() -> Result<Settings, CliError> {
    load_settings_from(&settings_path())
}

pub(crate) fn load_settings_from(path: &Path) -> Result<Settings, CliError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents)
        .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
}

impl Settings {
    /// Resolve the database path:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `database.path` in `settings.toml`
    /// 3. [`default_db_path`]
    pub(crate) fn resolve_db_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.database.path.clone())
            .unwrap_or_else(default_db_path)
    }

    /// Normalizer defaults with any configured overrides applied.
    pub(crate) fn normalize_defaults(&self) -> NormalizeDefaults {
        let mut defaults = NormalizeDefaults::default();
        if let Some(category) = healing_hub_core::non_blank(self.import.default_category.as_deref())
        {
            defaults.category = category.to_string();
        }
        if let Some(context) = healing_hub_core::non_blank(self.import.tool_context.as_deref()) {
            defaults.tool_context = context.to_string();
        }
        defaults
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
