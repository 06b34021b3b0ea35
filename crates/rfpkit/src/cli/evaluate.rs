use std::path::Path;

use anyhow::{bail, Context, Result};
use console::style;
use rfpkit_core::{evaluate_proposals, StoredProposal};

use super::{print_json, read_input};

pub fn run(rfp_id: i64, file: Option<&Path>, explain: bool, pretty: bool) -> Result<()> {
    let raw = read_input(file)?;
    let records: Vec<StoredProposal> =
        serde_json::from_str(&raw).context("Expected a JSON array of stored proposals")?;

    let total = records.len();
    let proposals: Vec<StoredProposal> = records
        .into_iter()
        .filter(|p| p.rfp_id == rfp_id)
        .collect();

    if proposals.is_empty() {
        bail!("no proposals found for RFP {rfp_id}");
    }
    tracing::debug!(rfp_id, total, matched = proposals.len(), "Loaded proposals");

    let result = evaluate_proposals(rfp_id, &proposals);

    if explain {
        if let Some(rec) = &result.recommendation {
            eprintln!(
                "{} Recommended: {} (proposal {})",
                style("●").green(),
                style(rec.vendor_name.as_deref().unwrap_or("Unknown vendor")).bold(),
                rec.vendor_id
            );
            eprintln!("  {}", rec.reason);
        }
    }

    print_json(&result, pretty)
}
