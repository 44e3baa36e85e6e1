// src/core/aggregator.rs
use crate::core::matcher::CompiledPattern;
use crate::core::tokenizer::words;
use crate::models::CountTable;

/// Tallies how many words of `text` match each compiled pattern.
///
/// The table starts with one zeroed entry per pattern, in slice order, so
/// patterns that never match still appear with a count of 0. Every word is
/// tested against every pattern; a match increments that pattern's count by
/// exactly 1, regardless of how many interpretations of the pattern the word
/// satisfies. Single pass, single thread, no I/O.
///
/// # Arguments
///
/// * `text` - The full lowercased text to scan
/// * `patterns` - Patterns compiled by `compile_all`, already de-duplicated
///
/// # Returns
///
/// * `CountTable` - One row per pattern, in the patterns' order
#[must_use]
pub fn count_matches(text: &str, patterns: &[CompiledPattern]) -> CountTable {
    let mut table = CountTable::with_patterns(patterns.iter().map(|p| p.text().to_owned()));

    for word in words(text) {
        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.matches(word) {
                table.increment(index);
            }
        }
    }

    table
}
