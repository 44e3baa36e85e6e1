// src/core/matcher.rs
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A constraint pair is a lowercase letter (either alphabet) immediately
/// followed by one decimal digit, e.g. `a2` = "exactly two `a`". Digits and
/// hyphens cannot open a pair, so `a1b1` parses as `(a,1)(b,1)`.
static PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[а-яa-z][0-9]").expect("pair regex is valid"));

/// A pattern parsed once, before the word loop.
///
/// Both interpretations of the pattern syntax are precomputed here: the
/// character-constraint pairs extracted from the text, and the raw text
/// itself for the literal-substring reading. Pattern text is never
/// case-folded; only the scanned text is, so an uppercase pattern simply
/// never matches.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    text: String,
    constraints: Vec<(char, u32)>,
}

impl CompiledPattern {
    /// Parses a pattern string, extracting every non-overlapping constraint
    /// pair left to right. Trailing or interleaved characters that do not
    /// form a pair are ignored by this interpretation but stay part of the
    /// literal text.
    #[must_use]
    pub fn compile(text: &str) -> Self {
        let constraints = PAIR
            .find_iter(text)
            .filter_map(|pair| {
                let mut chars = pair.as_str().chars();
                match (chars.next(), chars.next().and_then(|d| d.to_digit(10))) {
                    (Some(c), Some(n)) => Some((c, n)),
                    _ => None,
                }
            })
            .collect();

        Self {
            text: text.to_owned(),
            constraints,
        }
    }

    /// The raw pattern text this was compiled from.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Decides whether `word` satisfies this pattern.
    ///
    /// A word matches if either interpretation succeeds:
    /// - every constraint pair holds (a pattern with no pairs never matches
    ///   this way), or
    /// - the raw pattern text occurs as a contiguous substring of the word.
    ///
    /// Pure function of `(word, pattern)`; a word satisfying both
    /// interpretations still matches exactly once.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.matches_constraints(word) || word.contains(&self.text)
    }

    /// AND across constraint pairs, short-circuiting on the first failure.
    /// A pair `(c, n)` holds iff the word contains exactly `n` occurrences
    /// of `c`.
    fn matches_constraints(&self, word: &str) -> bool {
        if self.constraints.is_empty() {
            return false;
        }
        self.constraints
            .iter()
            .all(|&(c, n)| word.chars().filter(|&w| w == c).count() == n as usize)
    }
}

/// Compiles every declared pattern once, collapsing duplicate pattern
/// strings to their first occurrence so the count table gets exactly one
/// entry per distinct pattern, in source order.
#[must_use]
pub fn compile_all<I, S>(patterns: I) -> Vec<CompiledPattern>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    patterns
        .into_iter()
        .filter(|p| seen.insert(p.as_ref().to_owned()))
        .map(|p| CompiledPattern::compile(p.as_ref()))
        .collect()
}
