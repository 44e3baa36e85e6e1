// src/models/count_table.rs

/// Ordered pattern → match-count table produced by one aggregation run.
///
/// Every declared pattern gets exactly one row, initialized to zero, in the
/// order the patterns were declared (after duplicate collapsing upstream).
/// Counts only ever grow, and only through `increment`.
#[derive(Debug, Default)]
pub struct CountTable {
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    pattern: String,
    count: u64,
}

impl CountTable {
    /// Builds a table with one zeroed row per pattern, preserving order.
    #[must_use]
    pub fn with_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            entries: patterns
                .into_iter()
                .map(|pattern| Entry { pattern, count: 0 })
                .collect(),
        }
    }

    /// Adds 1 to the row at `index`. Out-of-range indices are ignored; the
    /// aggregator only ever passes indices from its own pattern slice.
    #[inline]
    pub fn increment(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.count = entry.count.saturating_add(1);
        }
    }

    /// Rows in declaration order, as `(pattern, count)` pairs.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|entry| (entry.pattern.as_str(), entry.count))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
