use async_trait::async_trait;
use pipeline::model::{ExecutionResult, OrderIntent};
use thiserror::Error;

pub mod alpaca;
pub mod oanda;
pub mod simulation;

pub use alpaca::AlpacaAdapter;
pub use oanda::OandaAdapter;
pub use simulation::SimulationAdapter;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("exchange rejected order: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Interface for submitting orders to a market (real or simulated).
///
/// Selected once at startup, never per-order. Implementations apply their
/// exchange-specific payload transforms and return the fill; neither tested
/// adapter models slippage, so the filled price echoes the intent price.
#[async_trait]
pub trait ExchangeAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Submit an order. Errors are converted into failed results by the
    /// service layer; adapters never retry on their own.
    async fn submit(&self, intent: &OrderIntent) -> Result<ExecutionResult, AdapterError>;
}
