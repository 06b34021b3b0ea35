pub mod evaluate;
pub mod invite;
pub mod parse;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "rfpkit",
    about = "Draft RFPs from free text, parse vendor proposals and pick a vendor",
    version
)]
pub struct Cli {
    /// Config file (defaults to $RFPKIT_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a structured RFP draft from a free-text description
    ParseRfp {
        /// Text file to read ('-' or omitted for stdin)
        file: Option<PathBuf>,
    },
    /// Extract price, currency and timeline from a vendor proposal
    ParseProposal {
        /// Text file to read ('-' or omitted for stdin)
        file: Option<PathBuf>,
        /// Emit a stored proposal record for this RFP id
        #[arg(long = "rfp")]
        rfp_id: Option<i64>,
        /// Proposal id for the stored record
        #[arg(long, default_value_t = 1, requires = "rfp_id")]
        id: i64,
        /// Vendor name for the stored record
        #[arg(long, requires = "rfp_id")]
        vendor_name: Option<String>,
        /// Vendor email for the stored record
        #[arg(long, requires = "rfp_id")]
        vendor_email: Option<String>,
    },
    /// Rank stored proposals for an RFP and recommend a vendor
    Evaluate {
        /// RFP id to evaluate
        #[arg(long = "rfp")]
        rfp_id: i64,
        /// JSON array of stored proposals ('-' or omitted for stdin)
        file: Option<PathBuf>,
        /// Also print the recommendation to stderr
        #[arg(long)]
        explain: bool,
    },
    /// Render invitation emails for an RFP
    Invite {
        /// JSON array of vendors
        #[arg(long)]
        vendors: PathBuf,
        /// RFP description text ('-' or omitted for stdin)
        rfp_file: Option<PathBuf>,
    },
}

/// Reads the whole input from `path`, or from stdin when it is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
