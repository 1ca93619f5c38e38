//! Signal payloads emitted by the indicator engine and the sentiment scorer.

use crate::model::{Symbol, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// MACD triple: line, signal line and histogram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Oscillator/trend snapshot for one instrument, emitted once per tick once
/// enough price history exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSignal {
    pub symbol: Symbol,
    pub timestamp: DateTime<Utc>,
    /// The tick price the signal was computed from.
    pub price: f64,
    /// Relative Strength Index, bounded [0, 100].
    pub rsi: f64,
    pub macd: MacdValue,
}

impl TechnicalSignal {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinite("price"));
        }
        if !self.rsi.is_finite() {
            return Err(ValidationError::NonFinite("rsi"));
        }
        Ok(())
    }
}

/// Externally-supplied sentiment score for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSignal {
    pub symbol: Symbol,
    pub timestamp: DateTime<Utc>,
    /// Bounded score: -1.0 (strong sell) .. +1.0 (strong buy).
    pub sentiment_score: f64,
}

impl SentimentSignal {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }
        if !self.sentiment_score.is_finite() || self.sentiment_score.abs() > 1.0 {
            return Err(ValidationError::SentimentOutOfRange(self.sentiment_score));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_range_is_enforced() {
        let mut sig = SentimentSignal {
            symbol: Symbol::from("EUR/USD"),
            timestamp: Utc::now(),
            sentiment_score: 0.5,
        };
        assert!(sig.validate().is_ok());

        sig.sentiment_score = 1.2;
        assert_eq!(
            sig.validate(),
            Err(ValidationError::SentimentOutOfRange(1.2))
        );

        sig.sentiment_score = f64::NAN;
        assert!(sig.validate().is_err());
    }
}
