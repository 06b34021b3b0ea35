use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rfpkit::cli::parse::RecordArgs;
use rfpkit::cli::{Cli, Commands};
use rfpkit::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let pretty = config.pretty && !cli.compact;
    dispatch(cli.command, &config, pretty)
}

fn dispatch(command: Commands, config: &Config, pretty: bool) -> Result<()> {
    match command {
        Commands::ParseRfp { file } => rfpkit::cli::parse::run_rfp(file.as_deref(), pretty),
        Commands::ParseProposal {
            file,
            rfp_id,
            id,
            vendor_name,
            vendor_email,
        } => {
            let record = rfp_id.map(|rfp_id| RecordArgs {
                rfp_id,
                id,
                vendor_name,
                vendor_email,
            });
            rfpkit::cli::parse::run_proposal(file.as_deref(), record, pretty)
        }
        Commands::Evaluate {
            rfp_id,
            file,
            explain,
        } => rfpkit::cli::evaluate::run(rfp_id, file.as_deref(), explain, pretty),
        Commands::Invite { vendors, rfp_file } => {
            rfpkit::cli::invite::run(&vendors, rfp_file.as_deref(), &config.mail_from, pretty)
        }
    }
}
