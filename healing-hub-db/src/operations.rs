//! CRUD operations for glossary terms and import tracking.

use healing_hub_catalog::types::*;
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Slug already in use: '{0}'")]
    SlugTaken(String),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

pub(crate) const TERM_COLUMNS: &str = "id, term, slug, category, niche, short_definition, \
     definition, created_at, updated_at";

// ── Term Operations ─────────────────────────────────────────────────────────

/// Insert a new term with its synonyms and tools. Returns the generated ID.
///
/// Fails with [`OperationError::SlugTaken`] if the slug already exists.
pub fn insert_term(conn: &Connection, term: &NewTerm) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO terms (term, slug, category, niche, short_definition, definition)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            term.term,
            term.slug,
            term.category,
            term.niche,
            term.short_definition,
            term.definition,
        ],
    )
    .map_err(|e| slug_conflict(e, &term.slug))?;

    let id = conn.last_insert_rowid();
    insert_children(conn, id, term)?;
    Ok(id)
}

/// Overwrite every field of an existing term.
pub fn replace_term(conn: &Connection, id: i64, term: &NewTerm) -> Result<(), OperationError> {
    let changed = conn
        .execute(
            "UPDATE terms SET term = ?2, slug = ?3, category = ?4, niche = ?5,
                 short_definition = ?6, definition = ?7, updated_at = datetime('now')
             WHERE id = ?1",
            params![
                id,
                term.term,
                term.slug,
                term.category,
                term.niche,
                term.short_definition,
                term.definition,
            ],
        )
        .map_err(|e| slug_conflict(e, &term.slug))?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            entity_type: "term".to_string(),
            id: id.to_string(),
        });
    }

    // Clear and re-insert owned rows
    conn.execute("DELETE FROM term_synonyms WHERE term_id = ?1", params![id])?;
    conn.execute("DELETE FROM term_tools WHERE term_id = ?1", params![id])?;
    insert_children(conn, id, term)?;

    Ok(())
}

/// Delete terms by id. Unknown ids are ignored; returns how many were removed.
///
/// Synonym and tool rows owned by the term go with it. Nothing that merely
/// references the term elsewhere is touched.
pub fn delete_terms(conn: &Connection, ids: &[i64]) -> Result<usize, OperationError> {
    let mut stmt = conn.prepare_cached("DELETE FROM terms WHERE id = ?1")?;
    let mut removed = 0;
    for id in ids {
        removed += stmt.execute(params![id])?;
    }
    Ok(removed)
}

/// Fetch one term by id.
pub fn get_term(conn: &Connection, id: i64) -> Result<Option<TermRecord>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {TERM_COLUMNS} FROM terms WHERE id = ?1"))?;
    let result = stmt.query_row(params![id], row_to_term);
    match result {
        Ok(mut t) => {
            load_children(conn, &mut t)?;
            Ok(Some(t))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Find a term by its slug (exact match).
pub fn find_term_by_slug(
    conn: &Connection,
    slug: &str,
) -> Result<Option<TermRecord>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TERM_COLUMNS} FROM terms WHERE slug = ?1 LIMIT 1"
    ))?;
    let result = stmt.query_row(params![slug], row_to_term);
    match result {
        Ok(mut t) => {
            load_children(conn, &mut t)?;
            Ok(Some(t))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Every slug currently in the table.
pub fn all_slugs(conn: &Connection) -> Result<Vec<String>, OperationError> {
    let mut stmt = conn.prepare("SELECT slug FROM terms")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Insert an import log entry. Returns the generated ID.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_format, source_name, imported_at, records_created)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            log.source_format,
            log.source_name,
            log.imported_at,
            log.records_created,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn insert_children(conn: &Connection, id: i64, term: &NewTerm) -> Result<(), OperationError> {
    let mut synonym_stmt = conn.prepare_cached(
        "INSERT INTO term_synonyms (term_id, position, synonym) VALUES (?1, ?2, ?3)",
    )?;
    for (pos, synonym) in term.synonyms.iter().enumerate() {
        synonym_stmt.execute(params![id, pos as i64, synonym])?;
    }

    let mut tool_stmt = conn.prepare_cached(
        "INSERT INTO term_tools (term_id, position, product_id, context)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    for (pos, tool) in term.recommended_tools.iter().enumerate() {
        tool_stmt.execute(params![id, pos as i64, tool.product_id, tool.context])?;
    }

    Ok(())
}

/// Attach synonyms and tools to a term loaded with [`row_to_term`].
pub(crate) fn load_children(conn: &Connection, term: &mut TermRecord) -> Result<(), OperationError> {
    let mut synonym_stmt = conn.prepare_cached(
        "SELECT synonym FROM term_synonyms WHERE term_id = ?1 ORDER BY position",
    )?;
    term.synonyms = synonym_stmt
        .query_map(params![term.id], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;

    let mut tool_stmt = conn.prepare_cached(
        "SELECT product_id, context FROM term_tools WHERE term_id = ?1 ORDER BY position",
    )?;
    term.recommended_tools = tool_stmt
        .query_map(params![term.id], |row| {
            Ok(RecommendedTool {
                product_id: row.get(0)?,
                context: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(())
}

/// Map a row selected with [`TERM_COLUMNS`]; synonyms and tools start empty.
pub(crate) fn row_to_term(row: &rusqlite::Row<'_>) -> rusqlite::Result<TermRecord> {
    Ok(TermRecord {
        id: row.get(0)?,
        term: row.get(1)?,
        slug: row.get(2)?,
        category: row.get(3)?,
        niche: row.get(4)?,
        short_definition: row.get(5)?,
        definition: row.get(6)?,
        synonyms: Vec::new(),
        recommended_tools: Vec::new(),
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

/// Turn a UNIQUE violation on `terms.slug` into [`OperationError::SlugTaken`].
fn slug_conflict(err: rusqlite::Error, slug: &str) -> OperationError {
    match err {
        rusqlite::Error::SqliteFailure(ref e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            OperationError::SlugTaken(slug.to_string())
        }
        other => other.into(),
    }
}
