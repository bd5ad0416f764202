//! Glossary data model, import format detection, and record normalization.
//!
//! This crate turns pasted operator input into fully populated term drafts
//! without touching storage. Consumers hand the drafts (plus a slug) to
//! `healing-hub-db` for persistence.

pub mod format;
pub mod normalizer;
pub mod types;

pub use format::{DelimitedLine, Delimiter, DetectedBatch, FormatError, detect_format};
pub use normalizer::{
    NormalizeDefaults, UnitRef, ValidationError, fill_definitions, normalize_batch, normalize_json,
    normalize_line, synthesize_definition,
};
pub use types::*;
