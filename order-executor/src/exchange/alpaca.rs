use super::{AdapterError, ExchangeAdapter};
use async_trait::async_trait;
use log::info;
use pipeline::model::{ExecutionResult, OrderIntent, Symbol};
use std::time::Duration;
use uuid::Uuid;

/// Alpaca expects the bare concatenated pair: `EUR/USD` -> `EURUSD`.
pub fn alpaca_symbol(symbol: &Symbol) -> String {
    symbol.as_str().replace('/', "")
}

pub struct AlpacaAdapter {
    paper_trading: bool,
    latency: Duration,
}

impl AlpacaAdapter {
    pub fn new(paper_trading: bool, latency: Duration) -> Self {
        Self {
            paper_trading,
            latency,
        }
    }
}

#[async_trait]
impl ExchangeAdapter for AlpacaAdapter {
    fn name(&self) -> &'static str {
        "alpaca"
    }

    async fn submit(&self, intent: &OrderIntent) -> Result<ExecutionResult, AdapterError> {
        let symbol = alpaca_symbol(&intent.symbol);
        info!(
            "[alpaca] submitting {} {} size={}",
            intent.side, symbol, intent.size
        );

        // Stands in for the REST round trip.
        tokio::time::sleep(self.latency).await;

        Ok(ExecutionResult::filled(
            format!("alp_{}", Uuid::new_v4().simple()),
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
    fn symbol_transform_strips_separator() {
        assert_eq!(alpaca_symbol(&Symbol::from("EUR/USD")), "EURUSD");
        assert_eq!(alpaca_symbol(&Symbol::from("AAPL")), "AAPL");
    }
}
