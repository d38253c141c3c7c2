//! smthash CLI - digests over mixed-type inputs and JSON object normalization.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;

use commands::{canonicalize, hash, normalize};
use output::Format;

/// Environment variable holding the default log filter.
const LOG_ENV: &str = "SMTHASH_LOG";

#[derive(Parser)]
#[command(name = "smthash")]
#[command(about = "Deterministic SHA-256 digests over integers, text, hex and JSON objects")]
struct Cli {
    /// Log filter (e.g. `debug`), overrides SMTHASH_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash tagged inputs in order: int:<n>, text:<s>, hex:<digits>, bytes:<digits>, null
    Hash {
        /// Inputs, concatenated left to right
        inputs: Vec<String>,
        /// Digest text form
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        format: Format,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the normalized hex form of a JSON object
    Normalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Print the SHA-256 of the canonical bytes instead
        #[arg(long)]
        sha256: bool,
    },
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Hash {
            inputs,
            format,
            json,
        } => hash::run(inputs, format, json),
        Commands::Normalize { input } => normalize::run(input),
        Commands::Canonicalize { input, sha256 } => canonicalize::run(input, sha256),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
