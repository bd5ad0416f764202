pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod duplicates;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod reset;
pub(crate) mod stats;
pub(crate) mod update;

use std::path::Path;

use rusqlite::Connection;

use crate::CliError;

/// Open the database, creating it (and its directory) on first use.
pub(crate) fn open_or_create(db_path: &Path) -> Result<Connection, CliError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    healing_hub_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open glossary database: {}", e)))
}

/// Open an existing database, or warn and return `None` when there is none
/// yet. Used by read-only commands so they never create an empty file.
pub(crate) fn open_existing(db_path: &Path) -> Result<Option<Connection>, CliError> {
    if !db_path.exists() {
        log::warn!("No glossary database found at {}", db_path.display());
        log::info!("Run 'healing-hub import <FILE>' to create one.");
        return Ok(None);
    }
    open_or_create(db_path).map(Some)
}
