//! Data model types for the glossary.
//!
//! These types represent persisted terms, the loosely shaped JSON records
//! operators paste in, and the intermediate forms between the two.

use serde::{Deserialize, Deserializer, Serialize};

// ── Defaults ────────────────────────────────────────────────────────────────

/// Category assigned when neither `category` nor `niche` is supplied.
pub const DEFAULT_CATEGORY: &str = "General";

/// Context attached to tools referenced by bare product id.
pub const DEFAULT_TOOL_CONTEXT: &str = "Recommended in glossary";

/// Maximum length of a derived short definition, before the ellipsis.
pub const SHORT_DEFINITION_MAX_CHARS: usize = 150;

/// Heading prepended when a long definition is synthesized.
pub const DEFINITION_HEADING: &str = "## Overview";

// ── Term ────────────────────────────────────────────────────────────────────

/// A weak reference to a product in the tools directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTool {
    /// Accepts an integer or a numeric string, like `recommendedToolIds`.
    #[serde(deserialize_with = "product_id_from_json")]
    pub product_id: i64,
    #[serde(default)]
    pub context: String,
}

fn product_id_from_json<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    crate::normalizer::tool_id_from_value(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid productId: {value}")))
}

/// A glossary term as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRecord {
    pub id: i64,
    pub term: String,
    pub slug: String,
    pub category: String,
    pub niche: String,
    pub short_definition: String,
    pub definition: String,
    pub synonyms: Vec<String>,
    pub recommended_tools: Vec<RecommendedTool>,
    pub created_at: String,
    pub updated_at: String,
}

/// Normalizer output: every field resolved except the final slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermDraft {
    pub term: String,
    /// Slug supplied explicitly by the operator, if any.
    pub requested_slug: Option<String>,
    pub category: String,
    pub niche: String,
    pub short_definition: String,
    pub definition: String,
    pub synonyms: Vec<String>,
    pub recommended_tools: Vec<RecommendedTool>,
}

/// A term ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTerm {
    pub term: String,
    pub slug: String,
    pub category: String,
    pub niche: String,
    pub short_definition: String,
    pub definition: String,
    pub synonyms: Vec<String>,
    pub recommended_tools: Vec<RecommendedTool>,
}

impl NewTerm {
    pub fn from_draft(draft: TermDraft, slug: String) -> Self {
        Self {
            term: draft.term,
            slug,
            category: draft.category,
            niche: draft.niche,
            short_definition: draft.short_definition,
            definition: draft.definition,
            synonyms: draft.synonyms,
            recommended_tools: draft.recommended_tools,
        }
    }
}

impl From<TermRecord> for NewTerm {
    fn from(record: TermRecord) -> Self {
        Self {
            term: record.term,
            slug: record.slug,
            category: record.category,
            niche: record.niche,
            short_definition: record.short_definition,
            definition: record.definition,
            synonyms: record.synonyms,
            recommended_tools: record.recommended_tools,
        }
    }
}

/// Field changes for an existing term. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPatch {
    pub term: Option<String>,
    /// Explicit slug override; suppresses slug regeneration on rename.
    pub slug: Option<String>,
    pub category: Option<String>,
    pub niche: Option<String>,
    pub short_definition: Option<String>,
    pub definition: Option<String>,
    pub synonyms: Option<Vec<String>>,
    pub recommended_tools: Option<Vec<RecommendedTool>>,
}

// ── JSON Import Shape ───────────────────────────────────────────────────────

/// One record from a JSON import. Every key is optional; defaulting rules
/// live in [`crate::normalizer::normalize_json`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTerm {
    #[serde(default, alias = "name")]
    pub term: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub short_definition: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub synonyms: Option<StringList>,
    /// Product ids as numbers or numeric strings. Anything else is dropped.
    #[serde(default)]
    pub recommended_tool_ids: Vec<serde_json::Value>,
    #[serde(default)]
    pub recommended_tools: Vec<RecommendedTool>,
}

/// A list given either as a JSON array or as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Items(Vec<String>),
    Joined(String),
}

impl StringList {
    /// Trimmed, non-empty entries in their original order.
    pub fn into_items(self) -> Vec<String> {
        match self {
            Self::Items(items) => items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Self::Joined(joined) => healing_hub_core::split_list(&joined, ','),
        }
    }
}

// ── Import Tracking ─────────────────────────────────────────────────────────

/// Log entry for one committed import batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLog {
    pub id: i64,
    pub source_format: String,
    pub source_name: String,
    pub imported_at: String,
    pub records_created: i64,
}
