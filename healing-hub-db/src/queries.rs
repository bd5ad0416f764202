//! Read queries for the glossary database.
//!
//! Provides filtered listing, statistics, and import history.

use healing_hub_catalog::types::*;
use rusqlite::{Connection, params};

use crate::operations::{OperationError, TERM_COLUMNS, load_children, row_to_term};

// ── Term Listing ────────────────────────────────────────────────────────────

/// Filter for [`list_terms`].
#[derive(Debug, Clone, Default)]
pub struct TermQuery {
    /// Match terms whose category or niche equals this (ASCII case-insensitive).
    pub category: Option<String>,
    pub limit: Option<u32>,
}

/// List terms in creation order, with synonyms and tools attached.
pub fn list_terms(conn: &Connection, query: &TermQuery) -> Result<Vec<TermRecord>, OperationError> {
    let limit = query.limit.map(i64::from).unwrap_or(-1);
    let mut terms = match &query.category {
        Some(category) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {TERM_COLUMNS} FROM terms
                 WHERE LOWER(category) = LOWER(?1) OR LOWER(niche) = LOWER(?1)
                 ORDER BY id LIMIT ?2"
            ))?;
            let rows = stmt.query_map(params![category, limit], row_to_term)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {TERM_COLUMNS} FROM terms ORDER BY id LIMIT ?1"
            ))?;
            let rows = stmt.query_map(params![limit], row_to_term)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
    };

    for term in &mut terms {
        load_children(conn, term)?;
    }
    Ok(terms)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall glossary statistics.
pub fn term_stats(conn: &Connection) -> Result<TermStats, OperationError> {
    let terms: i64 = conn.query_row("SELECT COUNT(*) FROM terms", [], |r| r.get(0))?;
    let synonyms: i64 = conn.query_row("SELECT COUNT(*) FROM term_synonyms", [], |r| r.get(0))?;
    let tool_links: i64 = conn.query_row("SELECT COUNT(*) FROM term_tools", [], |r| r.get(0))?;
    let imports: i64 = conn.query_row("SELECT COUNT(*) FROM import_log", [], |r| r.get(0))?;

    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) FROM terms GROUP BY category ORDER BY COUNT(*) DESC, category",
    )?;
    let categories = stmt
        .query_map([], |row| {
            Ok(CategoryCount {
                category: row.get(0)?,
                terms: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TermStats {
        terms,
        synonyms,
        tool_links,
        imports,
        categories,
    })
}

/// Summary statistics for the glossary.
#[derive(Debug)]
pub struct TermStats {
    pub terms: i64,
    pub synonyms: i64,
    pub tool_links: i64,
    pub imports: i64,
    pub categories: Vec<CategoryCount>,
}

/// Number of terms in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub terms: i64,
}

// ── Import Log Queries ──────────────────────────────────────────────────────

/// List recent import logs, newest first.
pub fn list_import_logs(
    conn: &Connection,
    limit: Option<u32>,
) -> Result<Vec<ImportLog>, OperationError> {
    let limit = limit.unwrap_or(20);
    let mut stmt = conn.prepare(&format!(
        "SELECT id, source_format, source_name, imported_at, records_created
         FROM import_log ORDER BY imported_at DESC, id DESC LIMIT {limit}"
    ))?;
    let rows = stmt.query_map([], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_format: row.get(1)?,
            source_name: row.get(2)?,
            imported_at: row.get(3)?,
            records_created: row.get(4)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
