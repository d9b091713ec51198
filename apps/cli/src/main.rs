//! WOS onboarding CLI — client config, n8n table specs, HubSpot schema.
//!
//! Onboards a new client into the WOS outreach pipeline: collects and
//! validates configuration, prints the data-table specs for the n8n setup,
//! and verifies or creates the required HubSpot custom properties.

mod commands;
mod prompt;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
