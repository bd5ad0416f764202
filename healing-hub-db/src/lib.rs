//! SQLite persistence layer for the glossary.
//!
//! Provides schema creation, CRUD operations, and query APIs
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, all_slugs, delete_terms, find_term_by_slug, get_term, insert_import_log,
    insert_term, replace_term,
};
pub use queries::{
    CategoryCount, TermQuery, TermStats, list_import_logs, list_terms, term_stats,
};
pub use schema::{SchemaError, open_database, open_memory};
