use crate::exchange::{AlpacaAdapter, ExchangeAdapter, OandaAdapter, SimulationAdapter};
use log::warn;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeKind {
    Alpaca,
    Oanda,
}

impl FromStr for ExchangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alpaca" => Ok(ExchangeKind::Alpaca),
            "oanda" => Ok(ExchangeKind::Oanda),
            other => Err(format!("unsupported exchange: {}", other)),
        }
    }
}

/// Execution-side configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    pub exchange: ExchangeKind,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub paper_trading: bool,
    /// Outbound call deadline; a timed-out submit becomes a failed result.
    pub request_timeout: Duration,
    /// Simulated REST latency of the real adapters.
    pub exchange_latency: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            exchange: ExchangeKind::Alpaca,
            api_key: None,
            api_secret: None,
            paper_trading: true,
            request_timeout: Duration::from_secs(5),
            exchange_latency: Duration::from_millis(100),
        }
    }
}

impl ExecutorConfig {
    pub fn has_credentials(&self) -> bool {
        matches!((&self.api_key, &self.api_secret),
            (Some(k), Some(s)) if !k.is_empty() && !s.is_empty())
    }
}

/// Selects the adapter for the lifetime of the service.
///
/// Missing credentials force simulation mode unconditionally, regardless of
/// the configured exchange.
pub fn build_adapter(cfg: &ExecutorConfig) -> Box<dyn ExchangeAdapter> {
    if !cfg.has_credentials() {
        warn!("exchange credentials not configured, running in SIMULATION mode");
        return Box::new(SimulationAdapter::new());
    }
    match cfg.exchange {
        ExchangeKind::Alpaca => Box::new(AlpacaAdapter::new(cfg.paper_trading, cfg.exchange_latency)),
        ExchangeKind::Oanda => Box::new(OandaAdapter::new(cfg.paper_trading, cfg.exchange_latency)),
    }
}
