// tests/integration_tests/pipeline_test.rs
use super::common::run_to_report;
use anyhow::Result;

#[test]
fn test_mixed_alphabet_end_to_end() -> Result<()> {
    let report = run_to_report("a1b1 test abba cabab", "a1b1\near\n")?;
    assert_eq!(report, "Pattern,Count\na1b1,1\near,0\n");
    Ok(())
}

#[test]
fn test_case_folding_before_matching() -> Result<()> {
    let report = run_to_report("Bearing EARNEST bare", "ear\n")?;
    assert_eq!(report, "Pattern,Count\near,2\n");
    Ok(())
}

#[test]
fn test_constraint_and_literal_readings_combine() -> Result<()> {
    // "aab" matches a2b1 by constraints; "xa2b1y" matches it literally.
    let report = run_to_report("aab xa2b1y banana", "a2b1\n")?;
    assert_eq!(report, "Pattern,Count\na2b1,2\n");
    Ok(())
}

#[test]
fn test_cyrillic_text_and_patterns() -> Result<()> {
    let report = run_to_report("окно молоко море добро", "о2\nмор\n")?;
    // "окно" and "добро" have exactly two о; only "море" contains "мор".
    assert_eq!(report, "Pattern,Count\nо2,2\nмор,1\n");
    Ok(())
}

#[test]
fn test_identical_runs_produce_identical_reports() -> Result<()> {
    let text = "bearing aab a1b1 42-x";
    let patterns = "a2b1\near\n12\n";
    assert_eq!(run_to_report(text, patterns)?, run_to_report(text, patterns)?);
    Ok(())
}
