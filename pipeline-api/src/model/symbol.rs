use serde::{Deserialize, Serialize};
use std::fmt;

/// An instrument identifier, e.g. `"EUR/USD"`.
///
/// Bus topics cannot contain the `/` separator, so topic names use the
/// normalized form from [`Symbol::topic_segment`] (`EUR_USD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The topic-safe form of the symbol: `EUR/USD` -> `EUR_USD`.
    pub fn topic_segment(&self) -> String {
        self.0.replace('/', "_")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_segment_normalizes_separator() {
        assert_eq!(Symbol::from("EUR/USD").topic_segment(), "EUR_USD");
        assert_eq!(Symbol::from("BTCUSD").topic_segment(), "BTCUSD");
    }
}
