// src/models/cell.rs

/// A cell read from the pattern source, classified once at load time.
///
/// CSV cells carry no type tag, so a cell counts as numeric when its text
/// parses as a finite float; the value is truncated toward zero, matching the
/// integer conversion the report consumers expect (`3.7` becomes pattern
/// `3`). Anything else is kept as its literal text, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Numeric(i64),
    Text(String),
}

impl Cell {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Numeric(value as i64),
            _ => Self::Text(raw.to_owned()),
        }
    }

    /// Renders the canonical pattern string for this cell.
    #[must_use]
    pub fn into_pattern(self) -> String {
        match self {
            Self::Numeric(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}
