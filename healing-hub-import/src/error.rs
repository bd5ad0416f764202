use healing_hub_catalog::{FormatError, ValidationError};
use healing_hub_db::OperationError;
use thiserror::Error;

/// Errors that can occur while importing or editing terms.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Input could not be parsed (bad JSON, malformed line, empty input)
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A record parsed but cannot become a valid term
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage rejected a read or write
    #[error("Database error: {0}")]
    Db(#[from] OperationError),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Term not found: #{0}")]
    TermNotFound(i64),
}
