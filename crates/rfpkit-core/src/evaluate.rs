//! Ranks the proposals received for one RFP and recommends a vendor.

use std::cmp::{Ordering, Reverse};
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::Currency;
use crate::proposal::StoredProposal;

const UNKNOWN_VENDOR: &str = "Unknown vendor";
const NOT_AVAILABLE: &str = "N/A";

const WEEKS_PER_MONTH: f64 = 4.0;
const DAYS_PER_WEEK: f64 = 7.0;

static DURATION_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").ok());

/// Evaluation-time projection of a stored proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalView {
    pub id: i64,
    pub vendor_name: Option<String>,
    pub vendor_email: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<Currency>,
    pub timeline: Option<String>,
    pub timeline_weeks: Option<f64>,
    pub summary: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ProposalView {
    #[must_use]
    pub fn from_stored(stored: &StoredProposal) -> Self {
        let parsed = stored.parsed.as_ref();
        let timeline = parsed
            .and_then(|p| p.timeline.clone())
            .filter(|t| !t.is_empty());
        let summary = parsed
            .map(|p| p.summary.clone())
            .filter(|s| !s.is_empty());

        Self {
            id: stored.id,
            vendor_name: stored.vendor_name.clone(),
            vendor_email: stored.vendor_email.clone(),
            amount: stored.amount,
            currency: stored.currency.or_else(|| parsed.map(|p| p.currency)),
            timeline_weeks: timeline.as_deref().and_then(timeline_to_weeks),
            timeline,
            summary,
            created_at: stored.created_at,
        }
    }

    /// One point each for a summary and a timeline.
    #[must_use]
    pub fn completeness(&self) -> u8 {
        u8::from(self.summary.is_some()) + u8::from(self.timeline.is_some())
    }

    fn vendor_label(&self) -> &str {
        self.vendor_name.as_deref().unwrap_or(UNKNOWN_VENDOR)
    }

    fn timeline_label(&self) -> &str {
        self.timeline.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    fn price_label(&self) -> String {
        let currency = self.currency.map(|c| c.as_str()).unwrap_or_default();
        let amount = self.amount.map(|a| a.to_string()).unwrap_or_default();
        format!("{currency} {amount}").trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub vendor_id: i64,
    pub vendor_name: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub rfp_id: i64,
    pub proposals: Vec<ProposalView>,
    pub recommendation: Option<Recommendation>,
}

/// Approximate length of a timeline phrase in weeks, using the first number
/// in it. A month counts as four weeks.
pub fn timeline_to_weeks(timeline: &str) -> Option<f64> {
    let lower = timeline.to_lowercase();
    let number: f64 = DURATION_NUMBER
        .as_ref()?
        .find(&lower)?
        .as_str()
        .parse()
        .ok()?;

    if lower.contains("month") {
        Some(number * WEEKS_PER_MONTH)
    } else if lower.contains("week") {
        Some(number)
    } else if lower.contains("day") {
        Some(number / DAYS_PER_WEEK)
    } else {
        None
    }
}

/// Projects every proposal and recommends one.
///
/// Priced proposals compete on amount, then on timeline length with unknown
/// timelines last. Without any priced proposal the most complete response
/// wins. All ties keep input order.
pub fn evaluate_proposals(rfp_id: i64, proposals: &[StoredProposal]) -> EvaluationResult {
    let views: Vec<ProposalView> = proposals.iter().map(ProposalView::from_stored).collect();

    let recommendation = recommend(&views);
    match &recommendation {
        Some(rec) => tracing::debug!(
            rfp_id,
            proposals = views.len(),
            vendor_id = rec.vendor_id,
            "Recommended proposal"
        ),
        None => tracing::debug!(rfp_id, "No proposals to evaluate"),
    }

    EvaluationResult {
        rfp_id,
        proposals: views,
        recommendation,
    }
}

fn recommend(views: &[ProposalView]) -> Option<Recommendation> {
    let mut priced: Vec<&ProposalView> = views.iter().filter(|v| v.amount.is_some()).collect();

    if priced.is_empty() {
        let best = views.iter().min_by_key(|v| Reverse(v.completeness()))?;
        let reason = format!(
            "No proposal had a clear price. \"{}\" is recommended because it has the most complete response (timeline: {}, summary available: {}).",
            best.vendor_label(),
            best.timeline_label(),
            if best.summary.is_some() { "yes" } else { "no" },
        );
        return Some(recommendation_for(best, reason));
    }

    priced.sort_by(|a, b| compare_offers(a, b));
    let best = priced[0];

    let reason = if priced.len() == 1 {
        format!(
            "Only one proposal with a clear price was found, from \"{}\". They offer {} with timeline \"{}\".",
            best.vendor_label(),
            best.price_label(),
            best.timeline_label(),
        )
    } else {
        format!(
            "\"{}\" is recommended because it offers the best combination of price and timeline. They offer {} with timeline \"{}\".",
            best.vendor_label(),
            best.price_label(),
            best.timeline_label(),
        )
    };

    Some(recommendation_for(best, reason))
}

fn compare_offers(a: &ProposalView, b: &ProposalView) -> Ordering {
    let amount = |v: &ProposalView| v.amount.unwrap_or(f64::INFINITY);
    let weeks = |v: &ProposalView| v.timeline_weeks.unwrap_or(f64::INFINITY);

    amount(a)
        .total_cmp(&amount(b))
        .then_with(|| weeks(a).total_cmp(&weeks(b)))
}

fn recommendation_for(view: &ProposalView, reason: String) -> Recommendation {
    Recommendation {
        vendor_id: view.id,
        vendor_name: view.vendor_name.clone(),
        reason,
    }
}
