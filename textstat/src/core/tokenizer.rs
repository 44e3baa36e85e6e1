// src/core/tokenizer.rs
use regex::Regex;
use std::sync::LazyLock;

/// A word is a maximal run of word-alphabet characters: ASCII lowercase,
/// Cyrillic lowercase (without `ё`), decimal digits and the hyphen. The text
/// is case-folded before tokenization, so uppercase never reaches this regex.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[а-яa-z0-9-]+").expect("word regex is valid"));

/// Splits the lowercased text into words, left to right.
///
/// The iterator is lazy and borrows from `text`; calling `words` again on the
/// same text restarts the scan from the beginning. Characters outside the
/// word alphabet act as separators and are dropped, so consecutive separators
/// never produce an empty word. Empty input yields an empty iterator.
#[inline]
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}
