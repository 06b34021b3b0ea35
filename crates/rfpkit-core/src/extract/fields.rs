use crate::text::{split_sentences, truncate_chars};

pub const DEFAULT_TITLE: &str = "New Project";

/// Leading phrases stripped from the first line, checked in order.
pub const TITLE_MARKERS: &[&str] = &[
    "subject:",
    "request for proposal:",
    "we need",
    "need",
    "looking for",
];

const TITLE_MAX_CHARS: usize = 80;
const ELLIPSIS: &str = "...";

pub fn extract_title(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();

    if let Some(rest) = TITLE_MARKERS
        .iter()
        .find_map(|marker| strip_prefix_ignore_case(first_line, marker))
    {
        let rest = rest.trim();
        return if rest.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            rest.to_string()
        };
    }

    if first_line.chars().count() > TITLE_MAX_CHARS {
        let keep = TITLE_MAX_CHARS - ELLIPSIS.len();
        format!("{}{ELLIPSIS}", truncate_chars(first_line, keep))
    } else {
        first_line.to_string()
    }
}

/// The first two sentences, re-joined with a closing period. A single
/// sentence is returned as is.
pub fn extract_summary(text: &str) -> String {
    match split_sentences(text).as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second, ..] => format!("{first}. {second}."),
    }
}

fn strip_prefix_ignore_case<'t>(text: &'t str, prefix: &str) -> Option<&'t str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
