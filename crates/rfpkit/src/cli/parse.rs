use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use rfpkit_core::{parse_proposal_text, parse_rfp_text, StoredProposal};

use super::{print_json, read_input};

pub fn run_rfp(file: Option<&Path>, pretty: bool) -> Result<()> {
    let raw = read_input(file)?;
    let rfp = parse_rfp_text(&raw);
    print_json(&rfp, pretty)
}

/// Fields for wrapping a parsed proposal into a stored record.
pub struct RecordArgs {
    pub rfp_id: i64,
    pub id: i64,
    pub vendor_name: Option<String>,
    pub vendor_email: Option<String>,
}

pub fn run_proposal(file: Option<&Path>, record: Option<RecordArgs>, pretty: bool) -> Result<()> {
    let raw = read_input(file)?;
    let parsed = parse_proposal_text(&raw);

    match record {
        None => print_json(&parsed, pretty),
        Some(record) => {
            let stored = StoredProposal::from_parsed(record.id, record.rfp_id, raw, parsed)
                .with_vendor(record.vendor_name, record.vendor_email)
                .with_created_at(Utc::now());
            tracing::info!(
                rfp_id = stored.rfp_id,
                id = stored.id,
                priced = stored.amount.is_some(),
                "Built stored proposal record"
            );
            print_json(&stored, pretty)
        }
    }
}
