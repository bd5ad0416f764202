//! Map parsed import units onto fully populated term drafts.
//!
//! Every optional field has one explicit fallback rule; blank strings are
//! treated exactly like missing fields.

use std::fmt;

use healing_hub_core::{non_blank, split_list, truncate_with_ellipsis};
use thiserror::Error;

use crate::format::{DelimitedLine, DetectedBatch};
use crate::types::*;

/// Identifies the import unit a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRef {
    /// 1-based line in delimited text.
    Line(usize),
    /// 1-based element in a JSON batch.
    Element(usize),
    /// An already stored term, by id.
    Stored(i64),
}

impl fmt::Display for UnitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(n) => write!(f, "Line {n}"),
            Self::Element(n) => write!(f, "JSON record {n}"),
            Self::Stored(id) => write!(f, "Term #{id}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{unit}: term name is empty")]
    EmptyTerm { unit: UnitRef },
}

/// Values filled in when an import leaves a field out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeDefaults {
    pub category: String,
    pub tool_context: String,
}

impl Default for NormalizeDefaults {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            tool_context: DEFAULT_TOOL_CONTEXT.to_string(),
        }
    }
}

/// Normalize every unit of a detected batch, stopping at the first failure.
pub fn normalize_batch(
    batch: DetectedBatch,
    defaults: &NormalizeDefaults,
) -> Result<Vec<TermDraft>, ValidationError> {
    match batch {
        DetectedBatch::Json(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| normalize_json(item, i + 1, defaults))
            .collect(),
        DetectedBatch::Delimited(lines) => lines
            .iter()
            .map(|line| normalize_line(line, defaults))
            .collect(),
    }
}

/// Normalize one JSON record. `position` is 1-based and only used in errors.
///
/// - `definition` and `shortDefinition` fall back as in [`fill_definitions`].
/// - `recommendedToolIds` become tools with the default context, after any
///   explicit `recommendedTools`.
pub fn normalize_json(
    item: ImportTerm,
    position: usize,
    defaults: &NormalizeDefaults,
) -> Result<TermDraft, ValidationError> {
    let term = non_blank(item.term.as_deref())
        .ok_or(ValidationError::EmptyTerm {
            unit: UnitRef::Element(position),
        })?
        .to_string();

    let (category, niche) = resolve_categories(
        non_blank(item.category.as_deref()),
        non_blank(item.niche.as_deref()),
        defaults,
    );

    let supplied_short = non_blank(item.short_definition.as_deref());
    let supplied_long = non_blank(item.definition.as_deref());

    let (short_definition, definition) = fill_definitions(&term, supplied_short, supplied_long);

    let mut recommended_tools: Vec<RecommendedTool> = Vec::new();
    for tool in item.recommended_tools {
        let context = non_blank(Some(tool.context.as_str()))
            .unwrap_or(defaults.tool_context.as_str())
            .to_string();
        push_tool(&mut recommended_tools, tool.product_id, context);
    }
    for id in item.recommended_tool_ids.iter().filter_map(tool_id_from_value) {
        push_tool(&mut recommended_tools, id, defaults.tool_context.clone());
    }

    Ok(TermDraft {
        term,
        requested_slug: non_blank(item.slug.as_deref()).map(str::to_string),
        category,
        niche,
        short_definition,
        definition,
        synonyms: item.synonyms.map(StringList::into_items).unwrap_or_default(),
        recommended_tools,
    })
}

/// Normalize one delimited line.
///
/// Positions: 0 term, 1 category, 2 short definition, 3 definition,
/// 4 comma-separated synonyms, 5 comma-separated tool ids.
pub fn normalize_line(
    line: &DelimitedLine,
    defaults: &NormalizeDefaults,
) -> Result<TermDraft, ValidationError> {
    let term = line
        .field(0)
        .ok_or(ValidationError::EmptyTerm {
            unit: UnitRef::Line(line.line_number),
        })?
        .to_string();

    let category = line
        .field(1)
        .unwrap_or(defaults.category.as_str())
        .to_string();

    let short = line.field(2);
    let long = line.field(3);
    let short_definition = short.or(long).unwrap_or(term.as_str()).to_string();
    let definition = long.or(short).unwrap_or(term.as_str()).to_string();

    let synonyms = line
        .field(4)
        .map(|s| split_list(s, ','))
        .unwrap_or_default();

    let mut recommended_tools = Vec::new();
    if let Some(ids) = line.field(5) {
        for id in split_list(ids, ',').iter().filter_map(|s| s.parse::<i64>().ok()) {
            push_tool(&mut recommended_tools, id, defaults.tool_context.clone());
        }
    }

    Ok(TermDraft {
        term,
        requested_slug: None,
        niche: category.clone(),
        category,
        short_definition,
        definition,
        synonyms,
        recommended_tools,
    })
}

/// Accept integers and numeric strings as product ids.
pub fn tool_id_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Keep `category` and `niche` in sync: a missing one copies the other,
/// both missing take the default.
fn resolve_categories(
    category: Option<&str>,
    niche: Option<&str>,
    defaults: &NormalizeDefaults,
) -> (String, String) {
    match (category, niche) {
        (Some(c), Some(n)) => (c.to_string(), n.to_string()),
        (Some(c), None) => (c.to_string(), c.to_string()),
        (None, Some(n)) => (n.to_string(), n.to_string()),
        (None, None) => (defaults.category.clone(), defaults.category.clone()),
    }
}

/// Fill in whichever of the short and long definitions is missing.
///
/// Returns `(short_definition, definition)`. Inputs are expected to be
/// already trimmed, with blanks passed as `None`.
/// - no definition: [`DEFINITION_HEADING`] followed by the short definition,
///   or by the term if that is missing too.
/// - no short definition: the supplied definition truncated to
///   [`SHORT_DEFINITION_MAX_CHARS`], or the term when no definition was
///   supplied. A synthesized definition is never used as the source.
pub fn fill_definitions(term: &str, short: Option<&str>, long: Option<&str>) -> (String, String) {
    let definition = match long {
        Some(long) => long.to_string(),
        None => synthesize_definition(short.unwrap_or(term)),
    };
    let short_definition = match (short, long) {
        (Some(short), _) => short.to_string(),
        (None, Some(long)) => truncate_with_ellipsis(long, SHORT_DEFINITION_MAX_CHARS),
        (None, None) => truncate_with_ellipsis(term, SHORT_DEFINITION_MAX_CHARS),
    };
    (short_definition, definition)
}

/// Placeholder long definition: the fixed heading followed by `body`.
pub fn synthesize_definition(body: &str) -> String {
    format!("{DEFINITION_HEADING}\n\n{body}")
}

/// Append a tool unless the same product is already listed.
fn push_tool(tools: &mut Vec<RecommendedTool>, product_id: i64, context: String) {
    if tools.iter().any(|t| t.product_id == product_id) {
        return;
    }
    tools.push(RecommendedTool {
        product_id,
        context,
    });
}
