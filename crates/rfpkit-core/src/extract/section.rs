use regex::{Regex, RegexBuilder};

use super::ExtractionResult;

/// Headings that open and close a list section. The body runs from the end of
/// the first `start` occurrence up to the earliest of any `ends` after it.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeadings {
    pub start: &'static str,
    pub ends: &'static [&'static str],
}

pub const KEY_REQUIREMENTS: SectionHeadings = SectionHeadings {
    start: "key requirements",
    ends: &[
        "deliverables",
        "deadline",
        "expected timeline",
        "questions should be directed",
    ],
};

pub const DELIVERABLES: SectionHeadings = SectionHeadings {
    start: "deliverables",
    ends: &[
        "deadline",
        "expected timeline",
        "questions should be directed",
        "contact:",
    ],
};

const MIN_ITEM_CHARS: usize = 3;

pub struct SectionSpec {
    start: Regex,
    ends: Vec<Regex>,
}

impl SectionSpec {
    pub fn new(headings: &SectionHeadings) -> ExtractionResult<Self> {
        let ends = headings
            .ends
            .iter()
            .map(|heading| heading_regex(heading))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            start: heading_regex(headings.start)?,
            ends,
        })
    }

    /// Text between the start heading and the nearest end heading, trimmed.
    pub fn body<'t>(&self, text: &'t str) -> Option<&'t str> {
        let start = self.start.find(text)?.end();
        let rest = &text[start..];

        let end = self
            .ends
            .iter()
            .filter_map(|re| re.find(rest))
            .map(|m| m.start())
            .min()
            .unwrap_or(rest.len());

        Some(rest[..end].trim())
    }

    pub fn items(&self, text: &str) -> Vec<String> {
        self.body(text).map(list_items).unwrap_or_default()
    }
}

fn heading_regex(heading: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(heading))
        .case_insensitive(true)
        .build()
}

/// Splits a section body into list items, dropping bullets, numbering, blank
/// lines and fragments shorter than three characters.
pub fn list_items(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_list_marker)
        .filter(|item| item.chars().count() >= MIN_ITEM_CHARS)
        .map(String::from)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line
        .strip_prefix(['-', '*'])
        .map_or(line, str::trim_start);

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(['.', ')']) {
            return rest.trim_start();
        }
    }

    line
}
