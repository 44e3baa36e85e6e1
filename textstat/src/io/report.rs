// src/io/report.rs
use crate::models::CountTable;
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::path::Path;

/// Fixed header pair of the report; part of the output contract.
pub const REPORT_HEADERS: [&str; 2] = ["Pattern", "Count"];

#[derive(Serialize)]
struct Row<'a> {
    pattern: &'a str,
    count: u64,
}

/// Writes the count table as a two-column CSV, overwriting any existing file
/// at `path`.
///
/// The header row is written explicitly, not derived from the first record,
/// so an empty table still produces a header-only file.
///
/// # Errors
///
/// Fails when the destination cannot be created or written; the error names
/// the path. A failure mid-write leaves no usable report behind.
pub fn write_report(path: &Path, table: &CountTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    writer
        .write_record(REPORT_HEADERS)
        .with_context(|| format!("Failed to write header to {}", path.display()))?;

    for (pattern, count) in table.rows() {
        writer
            .serialize(Row { pattern, count })
            .with_context(|| format!("Failed to write row for pattern {pattern:?}"))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;
    Ok(())
}
