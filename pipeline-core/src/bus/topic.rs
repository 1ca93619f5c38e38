//! Topic naming conventions.
//!
//! Instrument-scoped topics embed the normalized symbol (`EUR/USD` ->
//! `EUR_USD`); the order channel is a single shared topic.

use pipeline::model::Symbol;

/// Order intents from the decision engine to the executor.
pub const ORDERS_EXECUTE: &str = "orders:execute";

/// Execution results for any external sink that wants them.
pub const ORDERS_RESULTS: &str = "orders:results";

pub fn ticks(symbol: &Symbol) -> String {
    format!("market:ticks:{}", symbol.topic_segment())
}

pub fn tech(symbol: &Symbol) -> String {
    format!("signals:tech:{}", symbol.topic_segment())
}

pub fn sentiment(symbol: &Symbol) -> String {
    format!("signals:sentiment:{}", symbol.topic_segment())
}

/// A subscription filter: either one exact topic or a `prefix*` pattern
/// (the decision engine subscribes to `signals:*`, covering both signal
/// families).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicFilter {
    Exact(String),
    Prefix(String),
}

impl TopicFilter {
    pub fn exact(topic: impl Into<String>) -> Self {
        TopicFilter::Exact(topic.into())
    }

    /// Parses a Redis-style pattern: a trailing `*` makes a prefix filter,
    /// anything else is an exact match.
    pub fn pattern(pattern: &str) -> Self {
        match pattern.strip_suffix('*') {
            Some(prefix) => TopicFilter::Prefix(prefix.to_string()),
            None => TopicFilter::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, topic: &str) -> bool {
        match self {
            TopicFilter::Exact(t) => t == topic,
            TopicFilter::Prefix(p) => topic.starts_with(p.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instrument_topics_are_normalized() {
        let sym = Symbol::from("EUR/USD");
        assert_eq!(ticks(&sym), "market:ticks:EUR_USD");
        assert_eq!(tech(&sym), "signals:tech:EUR_USD");
        assert_eq!(sentiment(&sym), "signals:sentiment:EUR_USD");
    }

    #[test]
    fn pattern_filters() {
        let all_signals = TopicFilter::pattern("signals:*");
        assert!(all_signals.matches("signals:tech:EUR_USD"));
        assert!(all_signals.matches("signals:sentiment:GBP_USD"));
        assert!(!all_signals.matches("market:ticks:EUR_USD"));

        let orders = TopicFilter::pattern(ORDERS_EXECUTE);
        assert!(orders.matches("orders:execute"));
        assert!(!orders.matches("orders:results"));
    }
}
