use crate::config::{build_adapter, ExecutorConfig};
use crate::exchange::ExchangeAdapter;
use crate::sink::{ExecutionSink, LogSink};
use anyhow::Result;
use log::{info, warn};
use pipeline::model::{ExecutionResult, OrderIntent};
use pipeline_core::bus::{topic, Publisher, SignalBus, Subscriber, TopicFilter};
use std::time::Duration;

/// Wraps the selected adapter with a call deadline and failure conversion.
pub struct ExecutionService {
    adapter: Box<dyn ExchangeAdapter>,
    sink: Box<dyn ExecutionSink>,
    timeout: Duration,
    paper_trading: bool,
}

impl ExecutionService {
    pub fn new(
        adapter: Box<dyn ExchangeAdapter>,
        sink: Box<dyn ExecutionSink>,
        timeout: Duration,
        paper_trading: bool,
    ) -> Self {
        Self {
            adapter,
            sink,
            timeout,
            paper_trading,
        }
    }

    pub fn from_config(cfg: &ExecutorConfig) -> Self {
        Self::new(
            build_adapter(cfg),
            Box::new(LogSink),
            cfg.request_timeout,
            cfg.paper_trading,
        )
    }

    pub fn adapter_name(&self) -> &'static str {
        self.adapter.name()
    }

    /// Submits one intent. Adapter errors and timeouts are captured into a
    /// `success=false` result; nothing is re-raised and nothing is retried.
    pub async fn execute(&self, intent: &OrderIntent) -> ExecutionResult {
        match tokio::time::timeout(self.timeout, self.adapter.submit(intent)).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!("order failed on {}: {}", self.adapter.name(), e);
                self.failure(intent, e.to_string())
            }
            Err(_) => {
                warn!(
                    "order timed out on {} after {:?}",
                    self.adapter.name(),
                    self.timeout
                );
                self.failure(intent, format!("timed out after {:?}", self.timeout))
            }
        }
    }

    /// Forwards a result to the persistence sink.
    pub fn log_result(&self, result: &ExecutionResult) {
        self.sink.record(result);
    }

    fn failure(&self, intent: &OrderIntent, error: String) -> ExecutionResult {
        ExecutionResult::failed(
            intent.symbol.clone(),
            intent.side,
            intent.size,
            self.adapter.name(),
            error,
        )
        .with_paper_trading(self.paper_trading)
    }
}

/// Service loop: intents in from `orders:execute`, results out to the sink
/// and `orders:results`.
pub async fn run(bus: SignalBus, cfg: ExecutorConfig) -> Result<()> {
    let service = ExecutionService::from_config(&cfg);
    let mut intents: Subscriber<OrderIntent> =
        Subscriber::new(&bus, [TopicFilter::exact(topic::ORDERS_EXECUTE)]);
    let results: Publisher<ExecutionResult> = Publisher::new(bus.clone(), topic::ORDERS_RESULTS);

    info!(
        "order executor started: adapter={}, paper_trading={}",
        service.adapter_name(),
        cfg.paper_trading
    );

    while let Some(intent) = intents.recv().await {
        info!("executing {} {}", intent.side, intent.symbol);
        let result = service.execute(&intent).await;
        service.log_result(&result);
        if let Err(e) = results.send(result) {
            warn!("failed to publish execution result: {}", e);
        }
    }

    info!("order executor stopped: bus closed");
    Ok(())
}
