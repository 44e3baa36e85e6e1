// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Counts words matching each declared pattern and writes a Pattern/Count
/// report. Exactly three paths are required; anything else is a usage error
/// and nothing is processed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to scan (read fully, lowercased before tokenization)
    pub text: PathBuf,

    /// CSV file declaring one pattern per row in its first column
    pub patterns: PathBuf,

    /// Destination for the report CSV (overwritten if it exists)
    pub output: PathBuf,
}
