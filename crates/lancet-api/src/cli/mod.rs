//! CLI command definitions for the `lancet` binary.
//!
//! Uses clap derive macros for argument parsing. Store flags given on the
//! command line override the values read from the config file.

pub mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Add embeddings to and query a LanceDB vector store.
#[derive(Parser)]
#[command(name = "lancet", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Store selection flags.
#[derive(Debug, Default, clap::Args)]
pub struct StoreArgs {
    /// TOML config file (default: ~/.lancet/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Database location (directory or LanceDB URI).
    #[arg(long, global = true)]
    pub uri: Option<String>,

    /// Table holding the embeddings.
    #[arg(long, global = true)]
    pub table: Option<String>,

    /// Partitions probed per search.
    #[arg(long, global = true)]
    pub nprobes: Option<usize>,

    /// Re-rank factor applied after the approximate search.
    #[arg(long, global = true)]
    pub refine_factor: Option<u32>,

    /// Clear a refine factor set in the config file.
    #[arg(long, global = true, conflicts_with = "refine_factor")]
    pub no_refine_factor: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add embedding records from a JSON file.
    Add {
        /// JSON array of {id, doc_id, embedding, text} objects.
        file: PathBuf,
    },

    /// Find the records nearest to a vector.
    #[command(alias = "search")]
    Query {
        /// Query vector, comma-separated (e.g. 0.1,-0.4,0.9).
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        vector: Vec<f32>,

        /// Maximum number of results.
        #[arg(short = 'k', long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
        top_k: u32,
    },

    /// Print the resolved store configuration.
    Config,
}
