//! Bulk import of pasted glossary text.
//!
//! A batch is all-or-nothing: every unit is parsed, normalized, and given a
//! slug before anything is written, and the writes share one transaction.
//! A failure at any stage leaves the database exactly as it was.

use healing_hub_catalog::types::*;
use healing_hub_catalog::{DetectedBatch, NormalizeDefaults, detect_format, normalize_batch};
use healing_hub_core::{SlugRegistry, base_slug_for};
use healing_hub_db::operations;
use rusqlite::Connection;
use serde::Serialize;

use crate::error::ImportError;
use crate::progress::ImportProgress;

/// Options for a bulk import.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Label recorded in the import log (file name, "stdin", ...).
    pub source_name: String,
    pub defaults: NormalizeDefaults,
    /// Parse, validate, and assign slugs without writing anything.
    pub dry_run: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            source_name: "pasted text".to_string(),
            defaults: NormalizeDefaults::default(),
            dry_run: false,
        }
    }
}

/// One record created (or, in a dry run, planned) by an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedTerm {
    /// Storage id; `None` for dry runs.
    pub id: Option<i64>,
    pub term: String,
    pub slug: String,
}

/// Result of a successful import.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub count: usize,
    pub format: &'static str,
    pub dry_run: bool,
    pub terms: Vec<ImportedTerm>,
}

/// The operator-facing result shape: `{"success": true, "count": N}` or
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ImportResponse {
    Success { success: bool, count: usize },
    Failure { error: String },
}

impl ImportResponse {
    pub fn from_result(result: &Result<ImportOutcome, ImportError>) -> Self {
        match result {
            Ok(outcome) => Self::Success {
                success: true,
                count: outcome.count,
            },
            Err(e) => Self::Failure {
                error: e.to_string(),
            },
        }
    }
}

/// Import a batch of pasted text or JSON.
///
/// Existing slugs are loaded once up front; the UNIQUE index on slugs still
/// guards against a concurrent import that commits in between, in which
/// case this batch fails with [`ImportError::Db`] and is rolled back.
pub fn import_batch(
    conn: &Connection,
    raw: &str,
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportOutcome, ImportError> {
    let batch = detect_format(raw)?;
    let format = batch.format_name();
    let total = batch.len();

    if let Some(p) = progress {
        p.on_phase(&format!(
            "Importing {} {} record(s) from {}",
            total, format, options.source_name
        ));
    }

    let registry = SlugRegistry::with_existing(operations::all_slugs(conn)?);
    log::debug!("Loaded {} existing slug(s)", registry.len());

    let planned = plan_batch(batch, registry, &options.defaults)?;

    if options.dry_run {
        let terms: Vec<ImportedTerm> = planned
            .into_iter()
            .map(|t| ImportedTerm {
                id: None,
                term: t.term,
                slug: t.slug,
            })
            .collect();
        if let Some(p) = progress {
            p.on_complete(&format!("Dry run: {} record(s) would be created", terms.len()));
        }
        return Ok(ImportOutcome {
            count: terms.len(),
            format,
            dry_run: true,
            terms,
        });
    }

    let tx = conn.unchecked_transaction()?;
    let mut terms = Vec::with_capacity(planned.len());

    for (i, term) in planned.into_iter().enumerate() {
        let id = operations::insert_term(&tx, &term)?;
        log::debug!("Created term #{} '{}' as {}", id, term.term, term.slug);
        if let Some(p) = progress {
            p.on_record(i + 1, total, &term.term);
        }
        terms.push(ImportedTerm {
            id: Some(id),
            term: term.term,
            slug: term.slug,
        });
    }

    operations::insert_import_log(
        &tx,
        &ImportLog {
            id: 0,
            source_format: format.to_string(),
            source_name: options.source_name.clone(),
            imported_at: chrono::Utc::now().to_rfc3339(),
            records_created: terms.len() as i64,
        },
    )?;
    tx.commit()?;

    if let Some(p) = progress {
        p.on_complete(&format!("Imported {} record(s)", terms.len()));
    }

    Ok(ImportOutcome {
        count: terms.len(),
        format,
        dry_run: false,
        terms,
    })
}

/// Normalize a detected batch and give every record a unique slug.
///
/// Pure apart from the registry it consumes: slugs are claimed in input
/// order, each one recorded before the next is generated.
pub fn plan_batch(
    batch: DetectedBatch,
    registry: SlugRegistry,
    defaults: &NormalizeDefaults,
) -> Result<Vec<NewTerm>, ImportError> {
    let drafts = normalize_batch(batch, defaults)?;

    let (planned, _registry) = drafts.into_iter().fold(
        (Vec::new(), registry),
        |(mut planned, mut registry), draft| {
            let slug = assign_slug(&draft, &mut registry);
            planned.push(NewTerm::from_draft(draft, slug));
            (planned, registry)
        },
    );

    Ok(planned)
}

/// Pick the slug for a draft: its explicit slug if free, otherwise the
/// slugified term; either way suffixed with `-N` on collision.
pub fn assign_slug(draft: &TermDraft, registry: &mut SlugRegistry) -> String {
    match &draft.requested_slug {
        Some(requested) => registry.claim(requested),
        None => registry.claim(&base_slug_for(&draft.term)),
    }
}
