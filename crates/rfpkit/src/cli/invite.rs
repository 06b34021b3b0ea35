use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use rfpkit_core::{parse_rfp_text, render_invitations, RfpBrief, Vendor};

use super::{print_json, read_input};

pub fn run(vendors_file: &Path, rfp_file: Option<&Path>, from: &str, pretty: bool) -> Result<()> {
    let vendors = load_vendors(vendors_file)?;

    let description = read_input(rfp_file)?;
    let rfp = parse_rfp_text(&description);
    let brief = RfpBrief::from_structured(&rfp, description.trim());

    let invitations = render_invitations(&brief, &vendors, from);
    if invitations.is_empty() {
        eprintln!("{} No vendors to invite", style("○").dim());
    }

    print_json(&invitations, pretty)
}

fn load_vendors(path: &Path) -> Result<Vec<Vendor>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let vendors: Vec<Vendor> = serde_json::from_str(&raw)
        .with_context(|| format!("Expected a JSON array of vendors in {}", path.display()))?;

    for (idx, vendor) in vendors.iter().enumerate() {
        vendor
            .validate()
            .with_context(|| format!("Vendor #{} in {}", idx + 1, path.display()))?;
    }

    Ok(vendors)
}
