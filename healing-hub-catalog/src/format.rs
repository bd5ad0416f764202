//! Import format detection.
//!
//! Operators paste either a JSON array of term objects or delimited text,
//! one term per line:
//! ```text
//! Term | Category | Short definition | Definition | synonyms,... | tool ids,...
//! Ginger|Spices|Warming root|Used for nausea relief
//! Prana#Energy#Life force
//! ```
//! The JSON-or-text decision is made once for the whole batch. Each text
//! line picks its own delimiter (`|`, then `#`, then tab), so mixed files
//! are accepted.

use std::fmt;

use thiserror::Error;

use crate::types::ImportTerm;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Nothing to import: input contains no records")]
    Empty,
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Line {line}: expected at least 2 fields separated by {delimiter}")]
    LineFormat { line: usize, delimiter: Delimiter },
}

/// Field separator chosen for one line of delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Pipe,
    Hash,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Pipe => '|',
            Self::Hash => '#',
            Self::Tab => '\t',
        }
    }

    /// Pick the delimiter for a line: pipe, then hash, then tab.
    ///
    /// A line containing none of them is attempted with a pipe, which then
    /// fails the field-count check.
    pub fn for_line(line: &str) -> Self {
        if line.contains('|') {
            Self::Pipe
        } else if line.contains('#') {
            Self::Hash
        } else if line.contains('\t') {
            Self::Tab
        } else {
            Self::Pipe
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipe => write!(f, "'|'"),
            Self::Hash => write!(f, "'#'"),
            Self::Tab => write!(f, "tab"),
        }
    }
}

/// One line of delimited input, already split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedLine {
    /// 1-based position in the raw input, counting blank and header lines.
    pub line_number: usize,
    pub delimiter: Delimiter,
    /// Trimmed fields; blank positions are kept as empty strings.
    pub fields: Vec<String>,
}

impl DelimitedLine {
    /// Field at `index`, or `None` if missing or blank.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// The per-batch import decision.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectedBatch {
    Json(Vec<ImportTerm>),
    Delimited(Vec<DelimitedLine>),
}

impl DetectedBatch {
    pub fn len(&self) -> usize {
        match self {
            Self::Json(items) => items.len(),
            Self::Delimited(lines) => lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short label recorded in the import log.
    pub fn format_name(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Delimited(_) => "delimited",
        }
    }
}

/// Inspect raw pasted text and split it into import units.
///
/// Text that starts with `[` or `{` must be valid JSON; there is no fallback
/// to line parsing. A single JSON object is treated as a one-record batch.
///
/// ```
/// use healing_hub_catalog::format::{detect_format, Delimiter, DetectedBatch};
///
/// let batch = detect_format("Ginger|Spices|Warming root").unwrap();
/// let DetectedBatch::Delimited(lines) = batch else { panic!() };
/// assert_eq!(lines[0].delimiter, Delimiter::Pipe);
/// assert_eq!(lines[0].fields, vec!["Ginger", "Spices", "Warming root"]);
/// ```
pub fn detect_format(raw: &str) -> Result<DetectedBatch, FormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormatError::Empty);
    }

    let batch = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        DetectedBatch::Json(parse_json(trimmed)?)
    } else {
        DetectedBatch::Delimited(parse_delimited(raw)?)
    };

    if batch.is_empty() {
        return Err(FormatError::Empty);
    }
    Ok(batch)
}

fn parse_json(text: &str) -> Result<Vec<ImportTerm>, FormatError> {
    if text.starts_with('[') {
        Ok(serde_json::from_str(text)?)
    } else {
        let single: ImportTerm = serde_json::from_str(text)?;
        Ok(vec![single])
    }
}

fn parse_delimited(raw: &str) -> Result<Vec<DelimitedLine>, FormatError> {
    let mut lines = Vec::new();
    let mut seen_first = false;

    for (idx, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if !seen_first {
            seen_first = true;
            if is_header(line) {
                continue;
            }
        }

        let line_number = idx + 1;
        let delimiter = Delimiter::for_line(line);
        let fields = split_fields(line, delimiter);

        let filled = fields.iter().filter(|f| !f.is_empty()).count();
        if filled < 2 {
            return Err(FormatError::LineFormat {
                line: line_number,
                delimiter,
            });
        }

        lines.push(DelimitedLine {
            line_number,
            delimiter,
            fields,
        });
    }

    Ok(lines)
}

/// A header has the word "term" plus either a pipe or the word "definition".
///
/// Only whole words count, so data such as `Intermittent fasting|Diet` is
/// never taken for a header.
fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    has_word(&lower, &["term", "terms"])
        && (lower.contains('|') || has_word(&lower, &["definition", "definitions"]))
}

fn has_word(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| words.contains(&token))
}

/// Split on `delimiter`, trimming each field but keeping blank positions.
pub fn split_fields(line: &str, delimiter: Delimiter) -> Vec<String> {
    line.split(delimiter.as_char())
        .map(|f| f.trim().to_string())
        .collect()
}
