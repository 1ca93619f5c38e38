//! # Indicator Engine
//!
//! Converts the raw per-instrument price stream into normalized
//! oscillator/trend signals (RSI, MACD) and publishes them on
//! `signals:tech:<SYM>`.

mod history;
pub mod indicators;
mod service;

pub use history::PriceHistory;
pub use indicators::MacdConfig;
pub use service::{run, IndicatorConfig, IndicatorEngine};
