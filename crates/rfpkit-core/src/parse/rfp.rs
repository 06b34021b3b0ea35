use super::TextParser;
use crate::extract::{ExtractionResult, FieldExtractor, DEFAULT_TITLE};
use crate::rfp::{StructuredRfp, FALLBACK_SUMMARY_CHARS};
use crate::text::truncate_chars;

/// Drafts a [`StructuredRfp`] from a buyer's free-text description.
pub struct RfpTextParser;

impl RfpTextParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for RfpTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TextParser for RfpTextParser {
    type Output = StructuredRfp;

    fn name(&self) -> &'static str {
        "rfp"
    }

    fn try_parse(&self, raw: &str) -> ExtractionResult<StructuredRfp> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(StructuredRfp::empty());
        }

        let fields = FieldExtractor::shared()?;

        let mut title = fields.title(text);
        if title.is_empty() {
            title = DEFAULT_TITLE.to_string();
        }

        let mut summary = fields.summary(text);
        if summary.is_empty() {
            summary = truncate_chars(text, FALLBACK_SUMMARY_CHARS).to_string();
        }

        let budget = fields.budget(text);

        let rfp = StructuredRfp {
            title,
            summary,
            budget_amount: budget.amount,
            budget_currency: budget.currency,
            deadline: fields.deadline(text),
            expected_timeline: fields.timeline(text),
            key_requirements: fields.requirements(text),
            deliverables: fields.deliverables(text),
        };

        tracing::debug!(
            requirements = rfp.key_requirements.len(),
            deliverables = rfp.deliverables.len(),
            currency = %rfp.budget_currency,
            "Parsed RFP text"
        );

        Ok(rfp)
    }

    fn fallback(&self, raw: &str) -> StructuredRfp {
        StructuredRfp::degraded(raw)
    }
}

pub fn parse_rfp_text(raw: &str) -> StructuredRfp {
    RfpTextParser.parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Currency;

    const LAPTOPS: &str = "\
We need 20 laptops for our new analysts.
The machines should ship with 16GB RAM. Warranty must cover three years.

Budget: $40,000 total
Deadline: 15/03/2026
Expected timeline: 6 weeks

Key Requirements:
- 16GB RAM
- 512GB SSD

Deliverables:
1. Laptops imaged with our base OS
2. Setup documentation

Questions should be directed to procurement@example.com";

    #[test]
    fn test_parse_full_rfp() {
        let rfp = parse_rfp_text(LAPTOPS);

        assert_eq!(rfp.title, "20 laptops for our new analysts.");
        assert_eq!(
            rfp.summary,
            "We need 20 laptops for our new analysts. The machines should ship with 16GB RAM."
        );
        assert_eq!(rfp.budget_amount, Some(40000.0));
        assert_eq!(rfp.budget_currency, Currency::Usd);
        assert_eq!(rfp.deadline.as_deref(), Some("2026-03-15"));
        assert_eq!(rfp.expected_timeline.as_deref(), Some("6 weeks"));
        assert_eq!(rfp.key_requirements, vec!["16GB RAM", "512GB SSD"]);
        assert_eq!(
            rfp.deliverables,
            vec!["Laptops imaged with our base OS", "Setup documentation"]
        );
    }

    #[test]
    fn test_blank_input_gives_empty_record() {
        assert_eq!(parse_rfp_text(""), StructuredRfp::empty());
        assert_eq!(parse_rfp_text(" \n\t "), StructuredRfp::empty());
    }

    #[test]
    fn test_marker_only_title_defaults() {
        let rfp = parse_rfp_text("Subject:\nNothing else to say");
        assert_eq!(rfp.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_unpunctuated_text_summary() {
        let rfp = parse_rfp_text("office chairs");
        assert_eq!(rfp.title, "office chairs");
        assert_eq!(rfp.summary, "office chairs");
        assert_eq!(rfp.budget_currency, Currency::Unknown);
        assert!(rfp.key_requirements.is_empty());
    }

    #[test]
    fn test_punctuation_only_summary_falls_back_to_text() {
        let rfp = parse_rfp_text("?!.");
        assert_eq!(rfp.summary, "?!.");
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(parse_rfp_text(LAPTOPS), parse_rfp_text(LAPTOPS));
    }
}
