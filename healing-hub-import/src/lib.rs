//! Bulk import, single-record edits, and duplicate detection for the glossary.
//!
//! This crate owns the write path: turning pasted operator input into
//! persisted terms with unique slugs, editing stored terms, and surfacing
//! case-variant duplicates for manual cleanup.

pub mod bulk;
pub mod dedupe;
pub mod error;
pub mod progress;
pub mod terms;

pub use bulk::{
    ImportOptions, ImportOutcome, ImportResponse, ImportedTerm, assign_slug, import_batch,
    plan_batch,
};
pub use dedupe::{DuplicateGroup, DuplicateMember, delete_terms, find_duplicates, group_duplicates};
pub use error::ImportError;
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use terms::{create_term, update_term};
