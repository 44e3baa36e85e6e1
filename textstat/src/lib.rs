// src/lib.rs
pub mod cli;
pub mod core;
pub mod io;
pub mod models;

use anyhow::Result;

pub use cli::Args;
pub use models::{Cell, CountTable};

/// Runs the full pipeline: read the text, load the declared patterns,
/// compile each pattern once, tally matches across all words and write the
/// report.
///
/// Empty inputs are warnings, not errors: an empty text produces all-zero
/// counts, an empty pattern source produces a header-only report. Any I/O
/// failure or malformed pattern row aborts the run before the report is
/// written.
///
/// # Errors
///
/// This function may return an error if:
/// * The text file cannot be read as UTF-8 text
/// * The pattern file cannot be opened or a row cannot be parsed
/// * The output file cannot be created or written
pub fn run(args: Args) -> Result<()> {
    let text = crate::io::read_text(&args.text)?;
    if text.is_empty() {
        eprintln!("WARN: text file {} is empty", args.text.display());
    }

    let declared = crate::io::load_patterns(&args.patterns)?;
    if declared.is_empty() {
        eprintln!("WARN: pattern file {} is empty", args.patterns.display());
    }

    let patterns = crate::core::compile_all(&declared);
    let table = crate::core::count_matches(&text, &patterns);

    crate::io::write_report(&args.output, &table)
}
