use regex::{Captures, Regex};

use super::ExtractionResult;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const ISO_PATTERN: &str = r"\b(20[0-9]{2})-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])\b";
const DAY_MONTH_YEAR_PATTERN: &str =
    r"\b(0?[1-9]|[12][0-9]|3[01])[-/](0?[1-9]|1[0-2])[-/](20[0-9]{2})\b";
const MONTH_NAME_PATTERN: &str = r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+([0-3]?[0-9])(?:st|nd|rd|th)?[, ]+\s*(20[0-9]{2})\b";

/// Finds a deadline and normalizes it to `YYYY-MM-DD`.
///
/// Formats are tried in order: ISO, then `D/M/YYYY` or `D-M-YYYY`, then
/// "Month D, YYYY". Day-of-month is not checked against the month, so
/// "2026-02-31" comes back unchanged.
pub struct DeadlineExtractor {
    iso: Regex,
    day_month_year: Regex,
    month_name: Regex,
}

impl DeadlineExtractor {
    pub fn new() -> ExtractionResult<Self> {
        Ok(Self {
            iso: Regex::new(ISO_PATTERN)?,
            day_month_year: Regex::new(DAY_MONTH_YEAR_PATTERN)?,
            month_name: Regex::new(MONTH_NAME_PATTERN)?,
        })
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        if let Some(m) = self.iso.find(text) {
            return Some(m.as_str().to_string());
        }

        if let Some(caps) = self.day_month_year.captures(text) {
            return Some(format!(
                "{}-{:0>2}-{:0>2}",
                group(&caps, 3),
                group(&caps, 2),
                group(&caps, 1)
            ));
        }

        self.month_name.captures(text).map(|caps| {
            format!(
                "{}-{:02}-{:0>2}",
                group(&caps, 3),
                month_number(group(&caps, 1)),
                group(&caps, 2)
            )
        })
    }
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn month_number(name: &str) -> usize {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map_or(1, |idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deadline(text: &str) -> Option<String> {
        DeadlineExtractor::new().unwrap().extract(text)
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(deadline("Submit by 2026-04-01 please"), Some("2026-04-01".into()));
    }

    #[test]
    fn test_day_month_year() {
        assert_eq!(deadline("Due 1/4/2026"), Some("2026-04-01".into()));
        assert_eq!(deadline("Due 15-11-2027."), Some("2027-11-15".into()));
    }

    #[test]
    fn test_month_name_with_ordinal() {
        assert_eq!(deadline("by April 1st, 2026"), Some("2026-04-01".into()));
        assert_eq!(deadline("by SEPTEMBER 22nd 2030"), Some("2030-09-22".into()));
        assert_eq!(deadline("by march 3, 2026"), Some("2026-03-03".into()));
    }

    #[test]
    fn test_iso_wins_over_other_formats() {
        let text = "Kickoff April 1st, 2026, submissions close 2026-05-10 or 1/6/2026";
        assert_eq!(deadline(text), Some("2026-05-10".into()));
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(deadline("2026-02-31"), Some("2026-02-31".into()));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        assert_eq!(deadline("1999-04-01"), None);
        assert_eq!(deadline("2026-13-01"), None);
        assert_eq!(deadline("no date at all"), None);
    }
}
