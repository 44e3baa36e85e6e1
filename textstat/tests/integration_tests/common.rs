// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use textstat::{Args, run};

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// Runs the full pipeline against a text and a pattern CSV written into a
/// fresh temp directory, returning the report file's content.
pub fn run_to_report(text: &str, patterns_csv: &str) -> Result<String> {
    let dir = TempDir::new()?;
    let text_path = create_test_file(dir.path(), "text.txt", text)?;
    let patterns_path = create_test_file(dir.path(), "patterns.csv", patterns_csv)?;
    let output = dir.path().join("report.csv");

    run(Args {
        text: text_path,
        patterns: patterns_path,
        output: output.clone(),
    })?;

    Ok(fs::read_to_string(output)?)
}
