//! Log Merge - merge two timestamp-ordered JSONL log files
//!
//! Combines logs from two sources (e.g., two processes, two hosts) into
//! one chronologically ordered stream for downstream analysis. Both inputs
//! must already be sorted ascending by their `timestamp` field
//! (`YYYY-MM-DD HH:MM:SS`); the merge assumes this and does not verify it.
//!
//! ## Usage
//!
//! ```bash
//! log-merge server_a.jsonl server_b.jsonl merged.jsonl
//!
//! # Output defaults to merged.jsonl next to the binary
//! log-merge server_a.jsonl server_b.jsonl
//! ```

use anyhow::Result;
use clap::Parser;
use log_merge::{merge_files, MergeConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "log-merge")]
#[command(about = "Merge two timestamp-ordered JSONL log files", long_about = None)]
struct Cli {
    /// Path to the first input log
    #[arg(value_name = "INPUT_FIRST_LOG")]
    input_a: PathBuf,

    /// Path to the second input log
    #[arg(value_name = "INPUT_SECOND_LOG")]
    input_b: PathBuf,

    /// Path to the merged output (defaults to merged.jsonl next to the binary)
    #[arg(value_name = "OUTPUT_LOG")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Progress goes to stderr; stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config = match cli.output {
        Some(output) => MergeConfig::new(cli.input_a, cli.input_b, output),
        None => MergeConfig::with_default_output(cli.input_a, cli.input_b),
    };

    merge_files(&config)?;

    Ok(())
}
