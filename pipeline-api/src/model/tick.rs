use crate::model::{Symbol, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single price/volume update for one instrument.
///
/// Produced by the market data feed; immutable once published. Ordering is
/// only guaranteed within a single producer connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub symbol: Symbol,
    /// Last traded price (the close used for indicator history).
    pub price: f64,
    pub bid: f64,
    pub ask: f64,
    pub volume: u64,
    pub timestamp: DateTime<Utc>,
}

impl Tick {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinite("price"));
        }
        if !self.bid.is_finite() {
            return Err(ValidationError::NonFinite("bid"));
        }
        if !self.ask.is_finite() {
            return Err(ValidationError::NonFinite("ask"));
        }
        Ok(())
    }
}
