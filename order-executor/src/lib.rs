//! # Order Executor
//!
//! Consumes order intents from `orders:execute`, routes them to the
//! configured exchange adapter (or the simulator when no credentials are
//! present), and forwards every execution result to the sink and the
//! `orders:results` topic.
//!
//! The only service with exchange write permissions.

pub mod config;
pub mod exchange;
mod service;
mod sink;

pub use config::{build_adapter, ExchangeKind, ExecutorConfig};
pub use service::{run, ExecutionService};
pub use sink::{ExecutionSink, LogSink};
