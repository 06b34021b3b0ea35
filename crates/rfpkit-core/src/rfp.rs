use serde::{Deserialize, Serialize};

use crate::extract::Currency;
use crate::text::truncate_chars;

pub const FALLBACK_TITLE: &str = "Parsed RFP";

/// Characters of raw text used as a summary when nothing better is found.
pub const FALLBACK_SUMMARY_CHARS: usize = 240;

/// Structured draft of an RFP, extracted from its free-text description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredRfp {
    pub title: String,
    pub summary: String,
    pub budget_amount: Option<f64>,
    pub budget_currency: Currency,
    pub deadline: Option<String>,
    pub expected_timeline: Option<String>,
    pub key_requirements: Vec<String>,
    pub deliverables: Vec<String>,
}

impl StructuredRfp {
    /// Result for blank input: every field empty, currency `UNKNOWN`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record substituted when parsing fails internally.
    #[must_use]
    pub fn degraded(raw: &str) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            summary: truncate_chars(raw, FALLBACK_SUMMARY_CHARS).to_string(),
            ..Self::empty()
        }
    }
}

/// The stored RFP fields an invitation email is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfpBrief {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub budget_currency: Option<Currency>,
    #[serde(default)]
    pub deadline: Option<String>,
}

impl RfpBrief {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Builds the brief from an extracted draft. An `UNKNOWN` currency is
    /// left unset.
    #[must_use]
    pub fn from_structured(rfp: &StructuredRfp, description: impl Into<String>) -> Self {
        Self {
            title: rfp.title.clone(),
            description: description.into(),
            budget: rfp.budget_amount,
            budget_currency: rfp
                .budget_currency
                .is_known()
                .then_some(rfp.budget_currency),
            deadline: rfp.deadline.clone(),
        }
    }

    #[must_use]
    pub fn with_budget(mut self, amount: f64, currency: Option<Currency>) -> Self {
        self.budget = Some(amount);
        self.budget_currency = currency;
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}
