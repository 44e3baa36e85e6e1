// src/io/text.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Reads the whole text source and case-folds it to lowercase so the
/// tokenizer and the patterns see a uniform alphabet.
///
/// # Errors
///
/// Fails when the file is missing or not readable as UTF-8 text; the error
/// names the offending path.
pub fn read_text(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read text file: {}", path.display()))?;
    Ok(raw.to_lowercase())
}
