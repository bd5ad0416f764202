//! URL slug generation and collision resolution.
//!
//! A slug is lowercase ASCII word characters separated by single hyphens:
//! ```text
//! "Crème Brûlée Tea"  ->  "creme-brulee-tea"
//! "REIKI!!"           ->  "reiki"
//! ```
//! When a slug is already taken, numeric suffixes are tried in order
//! (`reiki-1`, `reiki-2`, ...) until a free one is found.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Base slug used when a term has no slug-able characters at all.
pub const FALLBACK_SLUG: &str = "term";

/// Convert free text to a URL-safe slug.
///
/// Lowercases, strips diacritics (NFD + drop combining marks), turns
/// whitespace runs into a hyphen, drops anything that is not `[a-z0-9_-]`,
/// collapses repeated hyphens and trims hyphens from both ends.
///
/// Total and idempotent; empty or symbol-only input yields `""`.
///
/// ```
/// use healing_hub_core::slugify;
///
/// assert_eq!(slugify("Ginger"), "ginger");
/// assert_eq!(slugify("  Third   Eye -- Chakra "), "third-eye-chakra");
/// assert_eq!(slugify("Açaí"), "acai");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mut result = String::with_capacity(folded.len());
    let mut pending_hyphen = false;

    for c in folded.chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            // Hyphens are only emitted between two kept characters, which
            // takes care of collapsing and trimming in one pass.
            if pending_hyphen && !result.is_empty() {
                result.push('-');
            }
            pending_hyphen = false;
            result.push(c);
        }
    }

    result
}

/// The base slug for a term name, falling back to [`FALLBACK_SLUG`] when
/// the name has nothing slug-able in it (e.g. `"!!!"` or a non-Latin script).
pub fn base_slug_for(term: &str) -> String {
    let slug = slugify(term);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Return `base` if it is free, otherwise the first free `base-N` (N >= 1).
pub fn make_unique_slug(base: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(base) {
        return base.to_string();
    }

    let mut n: u64 = 1;
    loop {
        let candidate = format!("{base}-{n}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Running set of taken slugs, threaded through a batch.
///
/// Every slug handed out by [`SlugRegistry::claim`] is recorded before the
/// next one is generated, so one registry never yields the same slug twice.
#[derive(Debug, Clone, Default)]
pub struct SlugRegistry {
    taken: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry with slugs that already exist in storage.
    pub fn with_existing<I>(slugs: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            taken: slugs.into_iter().collect(),
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.taken.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Resolve `base` to a free slug and mark it as taken.
    pub fn claim(&mut self, base: &str) -> String {
        let slug = make_unique_slug(base, &self.taken);
        self.taken.insert(slug.clone());
        slug
    }

    /// Forget a slug, e.g. the record's own slug when renaming it.
    pub fn release(&mut self, slug: &str) -> bool {
        self.taken.remove(slug)
    }
}

impl FromIterator<String> for SlugRegistry {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::with_existing(iter)
    }
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;
