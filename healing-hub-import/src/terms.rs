//! Single-record create and update.

use healing_hub_catalog::types::*;
use healing_hub_catalog::{
    NormalizeDefaults, UnitRef, ValidationError, fill_definitions, normalize_json,
    synthesize_definition,
};
use healing_hub_core::{SlugRegistry, base_slug_for, non_blank};
use healing_hub_db::operations;
use rusqlite::Connection;

use crate::bulk::assign_slug;
use crate::error::ImportError;

/// Create one term from a JSON-shaped record, applying the same
/// normalization and slug rules as a bulk import.
pub fn create_term(
    conn: &Connection,
    item: ImportTerm,
    defaults: &NormalizeDefaults,
) -> Result<TermRecord, ImportError> {
    let draft = normalize_json(item, 1, defaults)?;

    let tx = conn.unchecked_transaction()?;
    let mut registry = SlugRegistry::with_existing(operations::all_slugs(&tx)?);
    let slug = assign_slug(&draft, &mut registry);

    let id = operations::insert_term(&tx, &NewTerm::from_draft(draft, slug))?;
    let created = operations::get_term(&tx, id)?.ok_or(ImportError::TermNotFound(id))?;
    tx.commit()?;

    log::info!("Created term #{}", id);
    Ok(created)
}

/// Apply a patch to a stored term.
///
/// Renaming regenerates the slug from the new name unless the patch also
/// carries an explicit slug. Explicit slugs are kept when free and suffixed
/// when another term already owns them. Setting only one of category or
/// niche updates both. Blank text fields fall back through
/// [`fill_definitions`], the same rule create uses. All writes share one
/// transaction.
pub fn update_term(
    conn: &Connection,
    id: i64,
    patch: TermPatch,
) -> Result<TermRecord, ImportError> {
    let tx = conn.unchecked_transaction()?;
    let existing = operations::get_term(&tx, id)?.ok_or(ImportError::TermNotFound(id))?;

    let mut registry = SlugRegistry::with_existing(operations::all_slugs(&tx)?);
    registry.release(&existing.slug);

    let renamed = match patch.term.as_deref() {
        Some(name) => Some(
            non_blank(Some(name))
                .ok_or(ValidationError::EmptyTerm {
                    unit: UnitRef::Stored(id),
                })?
                .to_string(),
        ),
        None => None,
    };

    let slug = match (non_blank(patch.slug.as_deref()), &renamed) {
        (Some(requested), _) => registry.claim(requested),
        (None, Some(name)) if *name != existing.term => registry.claim(&base_slug_for(name)),
        _ => existing.slug.clone(),
    };

    let (category, niche) = match (
        non_blank(patch.category.as_deref()),
        non_blank(patch.niche.as_deref()),
    ) {
        (Some(c), Some(n)) => (c.to_string(), n.to_string()),
        (Some(c), None) => (c.to_string(), c.to_string()),
        (None, Some(n)) => (n.to_string(), n.to_string()),
        (None, None) => (existing.category.clone(), existing.niche.clone()),
    };

    let short_in = field_update(patch.short_definition.as_deref(), &existing.short_definition);
    let term = renamed.unwrap_or(existing.term);

    // A stored placeholder counts as no definition.
    let stored_placeholder = synthesize_definition(&existing.short_definition);
    let long_in = match patch.definition.as_deref() {
        Some(value) => non_blank(Some(value)),
        None => non_blank(Some(existing.definition.as_str()))
            .filter(|d| *d != stored_placeholder),
    };

    let (short_definition, definition) = fill_definitions(&term, short_in, long_in);

    let updated = NewTerm {
        term,
        slug,
        category,
        niche,
        short_definition,
        definition,
        synonyms: patch
            .synonyms
            .map(|s| {
                s.into_iter()
                    .map(|x| x.trim().to_string())
                    .filter(|x| !x.is_empty())
                    .collect()
            })
            .unwrap_or(existing.synonyms),
        recommended_tools: patch.recommended_tools.unwrap_or(existing.recommended_tools),
    };

    operations::replace_term(&tx, id, &updated)?;
    let stored = operations::get_term(&tx, id)?.ok_or(ImportError::TermNotFound(id))?;
    tx.commit()?;

    log::info!("Updated term #{} ({})", id, updated.slug);
    Ok(stored)
}

/// The effective value of a text field after a patch: untouched keeps the
/// stored value, a blank patch value clears it.
fn field_update<'a>(patched: Option<&'a str>, current: &'a str) -> Option<&'a str> {
    match patched {
        Some(value) => non_blank(Some(value)),
        None => non_blank(Some(current)),
    }
}
