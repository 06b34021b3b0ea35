use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::Currency;
use crate::rfp::FALLBACK_SUMMARY_CHARS;
use crate::text::truncate_chars;

/// Fields extracted from one vendor's free-text reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedProposal {
    pub summary: String,
    pub amount: Option<f64>,
    pub currency: Currency,
    pub timeline: Option<String>,
}

impl ParsedProposal {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn degraded(raw: &str) -> Self {
        Self {
            summary: truncate_chars(raw, FALLBACK_SUMMARY_CHARS).to_string(),
            ..Self::empty()
        }
    }
}

/// A proposal as persisted by the caller, with the parse result embedded and
/// price columns lifted out of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProposal {
    pub id: i64,
    pub rfp_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_email: Option<String>,
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub parsed: Option<ParsedProposal>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredProposal {
    /// Lifts `amount` and `currency` out of the parse result into their own
    /// columns, as the proposal store does on insert.
    #[must_use]
    pub fn from_parsed(id: i64, rfp_id: i64, raw_text: impl Into<String>, parsed: ParsedProposal) -> Self {
        Self {
            id,
            rfp_id,
            raw_text: raw_text.into(),
            amount: parsed.amount,
            currency: Some(parsed.currency),
            parsed: Some(parsed),
            ..Self::default()
        }
    }

    /// Blank names and emails are stored as absent.
    #[must_use]
    pub fn with_vendor(mut self, name: Option<String>, email: Option<String>) -> Self {
        self.vendor_name = name.filter(|n| !n.trim().is_empty());
        self.vendor_email = email.filter(|e| !e.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parsed_lifts_price_columns() {
        let parsed = ParsedProposal {
            summary: "We offer it".into(),
            amount: Some(1200.0),
            currency: Currency::Usd,
            timeline: Some("3 weeks".into()),
        };
        let stored = StoredProposal::from_parsed(7, 2, "raw", parsed.clone());

        assert_eq!(stored.amount, Some(1200.0));
        assert_eq!(stored.currency, Some(Currency::Usd));
        assert_eq!(stored.parsed, Some(parsed));
        assert_eq!(stored.rfp_id, 2);
    }

    #[test]
    fn test_with_vendor_drops_blank_values() {
        let stored = StoredProposal::from_parsed(1, 1, "", ParsedProposal::empty())
            .with_vendor(Some("Acme".into()), Some("  ".into()));
        assert_eq!(stored.vendor_name.as_deref(), Some("Acme"));
        assert_eq!(stored.vendor_email, None);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let stored: StoredProposal = serde_json::from_str(
            r#"{"id": 3, "rfpId": 9, "parsed": {"timeline": "2 months"}}"#,
        )
        .unwrap();

        let parsed = stored.parsed.unwrap();
        assert_eq!(parsed.timeline.as_deref(), Some("2 months"));
        assert_eq!(parsed.currency, Currency::Unknown);
        assert_eq!(stored.amount, None);
        assert_eq!(stored.raw_text, "");
    }

    #[test]
    fn test_parsed_proposal_shape() {
        let json = serde_json::to_value(ParsedProposal::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "summary": "",
                "amount": null,
                "currency": "UNKNOWN",
                "timeline": null,
            })
        );
    }
}
