use crate::model::{Side, Symbol, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal artifact of one order: what the exchange (or the simulator)
/// reported back. Forwarded to the persistence sink, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    /// Exchange-assigned id; absent when the order never reached an exchange.
    pub order_id: Option<String>,
    pub symbol: Symbol,
    pub side: Side,
    pub size: f64,
    pub filled_price: f64,
    /// Which adapter produced the result ("alpaca", "oanda", "simulation").
    pub exchange: String,
    pub paper_trading: bool,
    pub timestamp: DateTime<Utc>,
    pub error: Option<String>,
}

impl ExecutionResult {
    /// A synthetic or real fill at `filled_price`.
    pub fn filled(
        order_id: String,
        symbol: Symbol,
        side: Side,
        size: f64,
        filled_price: f64,
        exchange: impl Into<String>,
        paper_trading: bool,
    ) -> Self {
        Self {
            success: true,
            order_id: Some(order_id),
            symbol,
            side,
            size,
            filled_price,
            exchange: exchange.into(),
            paper_trading,
            timestamp: Utc::now(),
            error: None,
        }
    }

    /// A failed execution attempt; the order was not filled.
    pub fn failed(
        symbol: Symbol,
        side: Side,
        size: f64,
        exchange: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            order_id: None,
            symbol,
            side,
            size,
            filled_price: 0.0,
            exchange: exchange.into(),
            paper_trading: false,
            timestamp: Utc::now(),
            error: Some(error.into()),
        }
    }

    pub fn with_paper_trading(mut self, paper: bool) -> Self {
        self.paper_trading = paper;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }
        if !self.filled_price.is_finite() {
            return Err(ValidationError::NonFinite("filled_price"));
        }
        Ok(())
    }
}
