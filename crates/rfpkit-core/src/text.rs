//! Whitespace and sentence segmentation shared by the RFP and proposal parsers.

/// Collapses every run of whitespace, newlines included, into one space and
/// trims both ends.
///
/// Only use this before sentence or number scanning. Heading and section
/// scanning depends on the original line structure.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits text into sentences on runs of `.`, `!` and `?`.
///
/// Fragments are trimmed and empty ones dropped. Decimal points split too, so
/// "costs 2.5k" yields two fragments.
pub fn split_sentences(text: &str) -> Vec<String> {
    normalize_whitespace(text)
        .split(is_sentence_terminator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Returns at most `max` characters from the start of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

const fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
