use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod handlers;
mod helpers;
mod router;
mod schemas;
mod session;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
