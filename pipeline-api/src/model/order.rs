use crate::model::{Symbol, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("BUY"),
            Side::Sell => f.write_str("SELL"),
        }
    }
}

/// A decision-engine request to open a position.
///
/// Consumed exactly once by the order executor (at-most-once on the bus);
/// there is no transactional coupling with the position update that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub symbol: Symbol,
    pub side: Side,
    /// Fixed fraction of notional per trade, a configuration constant.
    pub size: f64,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
    pub strategy_tag: String,
}

impl OrderIntent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinite("price"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ValidationError::NonPositiveSize(self.size));
        }
        Ok(())
    }
}
