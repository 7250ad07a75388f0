//! Booli CLI
//!
//! Streams sold properties, listings or areas to stdout.
//! Requires `BOOLI_CALLER_ID` and `BOOLI_PRIVATE_KEY` in the environment.

use anyhow::Context;
use booli::cli::{Cli, Runner};
use booli::BooliClient;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let client = BooliClient::from_env().context("failed to configure Booli client")?;

    let runner = Runner::new(cli);
    let mut stdout = std::io::stdout().lock();
    runner.run(&client, &mut stdout).await?;

    Ok(())
}
