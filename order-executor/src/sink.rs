use log::{info, warn};
use pipeline::model::ExecutionResult;

/// Destination for execution results. Durability is the sink's problem, not
/// the executor's; the default sink just writes the operator log.
pub trait ExecutionSink: Send + Sync {
    fn record(&self, result: &ExecutionResult);
}

pub struct LogSink;

impl ExecutionSink for LogSink {
    fn record(&self, result: &ExecutionResult) {
        match serde_json::to_string(result) {
            Ok(json) => info!("execution result: {}", json),
            Err(e) => warn!("unserializable execution result: {}", e),
        }
    }
}
