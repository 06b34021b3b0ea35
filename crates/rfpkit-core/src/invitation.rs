//! Invitation emails sent to vendors for an RFP.
//!
//! Rendering only. Delivery belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::rfp::RfpBrief;
use crate::vendor::Vendor;

pub const DEFAULT_SENDER: &str = "RFP System <no-reply@example.com>";

const NOT_SPECIFIED: &str = "Not specified";
const INTRO: &str = "You are invited to submit a proposal for the following RFP:";
const CLOSING: &str = "Please reply to this email with your proposal, pricing, and terms.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub vendor_id: i64,
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[must_use]
pub fn render_invitation(brief: &RfpBrief, vendor: &Vendor, from: &str) -> Invitation {
    let budget = budget_line(brief);
    let deadline = brief.deadline.as_deref().unwrap_or(NOT_SPECIFIED);

    let text = format!(
        "{INTRO}\n\nTitle: {title}\n\nDescription:\n{description}\n\n\
         Budget: {budget}\nDeadline: {deadline}\n\n{CLOSING}\n\nVendor: {vendor}\n",
        title = brief.title,
        description = brief.description,
    );

    let html = format!(
        "<p>{INTRO}</p>\n\
         <p><strong>Title:</strong> {title}</p>\n\
         <p><strong>Description:</strong><br/>{description}</p>\n\
         <p><strong>Budget:</strong> {budget}</p>\n\
         <p><strong>Deadline:</strong> {deadline}</p>\n\
         <p>{CLOSING}</p>\n\
         <hr />\n\
         <p>Vendor: {vendor}</p>\n",
        title = escape_html(&brief.title),
        description = escape_html(&brief.description),
        budget = escape_html(&budget),
        deadline = escape_html(deadline),
        vendor = escape_html(&vendor.to_string()),
    );

    Invitation {
        vendor_id: vendor.id,
        to: vendor.email.clone(),
        from: from.to_string(),
        subject: format!("RFP Invitation: {}", brief.title),
        text,
        html,
    }
}

/// One invitation per vendor, in the order given.
pub fn render_invitations(brief: &RfpBrief, vendors: &[Vendor], from: &str) -> Vec<Invitation> {
    let invitations: Vec<Invitation> = vendors
        .iter()
        .map(|vendor| render_invitation(brief, vendor, from))
        .collect();

    tracing::info!(
        title = %brief.title,
        count = invitations.len(),
        "Rendered RFP invitations"
    );

    invitations
}

fn budget_line(brief: &RfpBrief) -> String {
    brief.budget.map_or_else(
        || NOT_SPECIFIED.to_string(),
        |amount| {
            let currency = brief.budget_currency.map(|c| c.as_str()).unwrap_or_default();
            format!("{currency} {amount}").trim().to_string()
        },
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
