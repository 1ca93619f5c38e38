use super::{AdapterError, ExchangeAdapter};
use async_trait::async_trait;
use pipeline::model::{ExecutionResult, OrderIntent};
use uuid::Uuid;

/// Fallback adapter used whenever exchange credentials are absent, and
/// selectable explicitly for testing. Never touches the network: every
/// valid intent fills immediately at the requested price.
#[derive(Default)]
pub struct SimulationAdapter;

impl SimulationAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExchangeAdapter for SimulationAdapter {
    fn name(&self) -> &'static str {
        "simulation"
    }

    async fn submit(&self, intent: &OrderIntent) -> Result<ExecutionResult, AdapterError> {
        Ok(ExecutionResult::filled(
            format!("sim_{}", Uuid::new_v4().simple()),
            intent.symbol.clone(),
            intent.side,
            intent.size,
            intent.price,
            self.name(),
            true,
        ))
    }
}
