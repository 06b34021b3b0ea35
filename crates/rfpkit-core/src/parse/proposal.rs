use super::TextParser;
use crate::extract::{ExtractionResult, FieldExtractor};
use crate::proposal::ParsedProposal;

/// Pulls summary, price and timeline out of a vendor's reply.
pub struct ProposalTextParser;

impl ProposalTextParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ProposalTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TextParser for ProposalTextParser {
    type Output = ParsedProposal;

    fn name(&self) -> &'static str {
        "proposal"
    }

    fn try_parse(&self, raw: &str) -> ExtractionResult<ParsedProposal> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(ParsedProposal::empty());
        }

        let fields = FieldExtractor::shared()?;
        let price = fields.budget(text);

        let proposal = ParsedProposal {
            summary: fields.summary(text),
            amount: price.amount,
            currency: price.currency,
            timeline: fields.timeline(text),
        };

        tracing::debug!(
            priced = proposal.amount.is_some(),
            currency = %proposal.currency,
            timeline = proposal.timeline.is_some(),
            "Parsed proposal text"
        );

        Ok(proposal)
    }

    fn fallback(&self, raw: &str) -> ParsedProposal {
        ParsedProposal::degraded(raw)
    }
}

pub fn parse_proposal_text(raw: &str) -> ParsedProposal {
    ProposalTextParser.parse(raw)
}
