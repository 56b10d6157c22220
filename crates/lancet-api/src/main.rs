//! Lancet CLI entry point.
//!
//! Binary name: `lancet`
//!
//! Parses CLI arguments, sets up tracing, opens the configured vector store,
//! then dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,lancet=debug",
        _ => "trace",
    };
    lancet_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    lancet_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let state = AppState::init(&cli.store).await?;

    match cli.command {
        Commands::Add { file } => {
            cli::store::add(&state, &file, cli.json, cli.quiet).await?;
        }
        Commands::Query { vector, top_k } => {
            cli::store::query(&state, vector, top_k as usize, cli.json).await?;
        }
        Commands::Config => {
            cli::store::config(&state)?;
        }
    }

    Ok(())
}
