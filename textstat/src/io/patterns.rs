// src/io/patterns.rs
use crate::models::Cell;
use anyhow::{Context as _, Result, anyhow};
use std::path::Path;

/// Loads the declared patterns from a CSV source, one pattern per row in the
/// first column. There is no header row. Each cell is classified once as
/// numeric or text (`Cell::parse`) and rendered to its canonical pattern
/// string; duplicates are kept here and collapsed by the matcher.
///
/// # Errors
///
/// Fails when the file cannot be opened, a record cannot be parsed, or a row
/// has no first cell; the error identifies the path or the row number. No
/// partial result is returned.
pub fn load_patterns(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open pattern file: {}", path.display()))?;

    let mut patterns = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| {
            format!("Failed to read row {} of {}", row + 1, path.display())
        })?;
        let cell = record
            .get(0)
            .ok_or_else(|| anyhow!("Row {} of {} has no pattern cell", row + 1, path.display()))?;
        patterns.push(Cell::parse(cell).into_pattern());
    }

    Ok(patterns)
}
