//! Duplicate detection by case-insensitive term name.
//!
//! Read-only: groups are reported for manual review, and removal goes
//! through [`delete_terms`] with ids the operator picked.

use std::collections::BTreeMap;

use healing_hub_catalog::types::TermRecord;
use healing_hub_db::{TermQuery, operations, queries};
use rusqlite::Connection;
use serde::Serialize;

use crate::error::ImportError;

/// A stored term that shares its name with at least one other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateMember {
    pub id: i64,
    pub term: String,
    pub slug: String,
    pub category: String,
    pub created_at: String,
}

impl From<&TermRecord> for DuplicateMember {
    fn from(t: &TermRecord) -> Self {
        Self {
            id: t.id,
            term: t.term.clone(),
            slug: t.slug.clone(),
            category: t.category.clone(),
            created_at: t.created_at.clone(),
        }
    }
}

/// Terms whose names match ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// Lowercased, trimmed name shared by the members.
    pub name: String,
    pub count: usize,
    pub members: Vec<DuplicateMember>,
}

/// Scan stored terms, optionally limited to one category, for duplicates.
pub fn find_duplicates(
    conn: &Connection,
    category: Option<&str>,
) -> Result<Vec<DuplicateGroup>, ImportError> {
    let query = TermQuery {
        category: category.map(str::to_string),
        limit: None,
    };
    let terms = queries::list_terms(conn, &query)?;
    let groups = group_duplicates(&terms);
    log::debug!(
        "Scanned {} term(s), found {} duplicate group(s)",
        terms.len(),
        groups.len()
    );
    Ok(groups)
}

/// Group terms by lowercased name, keeping only groups with 2+ members.
///
/// Groups come out sorted by name, members by id (creation order), so
/// repeated calls over the same data give the same result.
pub fn group_duplicates(terms: &[TermRecord]) -> Vec<DuplicateGroup> {
    let mut by_name: BTreeMap<String, Vec<&TermRecord>> = BTreeMap::new();
    for term in terms {
        by_name
            .entry(term.term.trim().to_lowercase())
            .or_default()
            .push(term);
    }

    by_name
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(name, mut members)| {
            members.sort_by_key(|t| t.id);
            DuplicateGroup {
                name,
                count: members.len(),
                members: members.into_iter().map(DuplicateMember::from).collect(),
            }
        })
        .collect()
}

/// Delete the given terms in one transaction. Unknown ids are ignored.
///
/// Returns the number of terms removed.
pub fn delete_terms(conn: &Connection, ids: &[i64]) -> Result<usize, ImportError> {
    let tx = conn.unchecked_transaction()?;
    let removed = operations::delete_terms(&tx, ids)?;
    tx.commit()?;
    log::info!("Deleted {} of {} requested term(s)", removed, ids.len());
    Ok(removed)
}
