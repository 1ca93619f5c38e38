use super::{AdapterError, ExchangeAdapter};
use async_trait::async_trait;
use log::info;
use pipeline::model::{ExecutionResult, OrderIntent, Side, Symbol};
use std::time::Duration;
use uuid::Uuid;

/// Oanda's instrument format keeps an underscore separator:
/// `EUR/USD` -> `EUR_USD`.
pub fn oanda_symbol(symbol: &Symbol) -> String {
    symbol.as_str().replace('/', "_")
}

/// Oanda sizes orders in units (1 lot = 10_000 units) and encodes the side
/// as the sign: sells are negative.
pub fn oanda_units(side: Side, size: f64) -> f64 {
    let units = size * 10_000.0;
    match side {
        Side::Buy => units,
        Side::Sell => -units,
    }
}

pub struct OandaAdapter {
    paper_trading: bool,
    latency: Duration,
}

impl OandaAdapter {
    pub fn new(paper_trading: bool, latency: Duration) -> Self {
        Self {
            paper_trading,
            latency,
        }
    }
}

#[async_trait]
impl ExchangeAdapter for OandaAdapter {
    fn name(&self) -> &'static str {
        "oanda"
    }

    async fn submit(&self, intent: &OrderIntent) -> Result<ExecutionResult, AdapterError> {
        let symbol = oanda_symbol(&intent.symbol);
        let units = oanda_units(intent.side, intent.size);
        info!(
            "[oanda] submitting {} {} units={}",
            intent.side, symbol, units
        );

        // Stands in for the REST round trip.
        tokio::time::sleep(self.latency).await;

        Ok(ExecutionResult::filled(
            format!("oan_{}", Uuid::new_v4().simple()),
            intent.symbol.clone(),
            intent.side,
            intent.size,
            intent.price,
            self.name(),
            self.paper_trading,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_transform_uses_underscore() {
        assert_eq!(oanda_symbol(&Symbol::from("EUR/USD")), "EUR_USD");
    }

    #[test]
    fn sell_units_are_negative() {
        assert_eq!(oanda_units(Side::Buy, 0.01), 100.0);
        assert_eq!(oanda_units(Side::Sell, 0.01), -100.0);
    }
}
