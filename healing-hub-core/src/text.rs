//! Small string helpers used when normalizing imported records.

/// Trim `value`, treating blank strings the same as a missing value.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Cut `s` to at most `max_chars` characters, appending `...` if anything
/// was removed. Counts characters, not bytes.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}

/// Split a delimited list, trimming entries and dropping empty ones.
pub fn split_list(s: &str, separator: char) -> Vec<String> {
    s.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
