use crate::history::PriceHistory;
use crate::indicators::{self, MacdConfig};
use anyhow::Result;
use chrono::Utc;
use log::{debug, info, warn};
use pipeline::model::{Symbol, TechnicalSignal, Tick};
use pipeline_core::bus::{topic, SignalBus, Subscriber, TopicFilter};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub macd: MacdConfig,
    pub history_capacity: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd: MacdConfig::default(),
            history_capacity: 1000,
        }
    }
}

/// Per-instrument price buffers plus the indicator math. Pure with respect
/// to the bus: `ingest` returns the signal to publish, if any.
pub struct IndicatorEngine {
    cfg: IndicatorConfig,
    histories: HashMap<Symbol, PriceHistory>,
}

impl IndicatorEngine {
    pub fn new(cfg: IndicatorConfig) -> Self {
        Self {
            cfg,
            histories: HashMap::new(),
        }
    }

    /// Appends the tick's price to its instrument history and computes both
    /// indicators once at least `rsi_period + 1` closes exist. Below that
    /// threshold nothing is emitted (insufficient-data suppression, not a
    /// neutral emission).
    pub fn ingest(&mut self, tick: &Tick) -> Option<TechnicalSignal> {
        let history = self
            .histories
            .entry(tick.symbol.clone())
            .or_insert_with(|| PriceHistory::new(self.cfg.history_capacity));
        history.push(tick.price);

        if history.len() < self.cfg.rsi_period + 1 {
            debug!(
                "{}: warming up ({}/{})",
                tick.symbol,
                history.len(),
                self.cfg.rsi_period + 1
            );
            return None;
        }

        let prices = history.snapshot();
        Some(TechnicalSignal {
            symbol: tick.symbol.clone(),
            timestamp: Utc::now(),
            price: tick.price,
            rsi: indicators::rsi(&prices, self.cfg.rsi_period),
            macd: indicators::macd(&prices, &self.cfg.macd),
        })
    }
}

/// Service loop: ticks for the tracked instruments in, technical signals out.
///
/// Runs until the bus is dropped. A failure while handling one tick is
/// logged and never ends the loop.
pub async fn run(bus: SignalBus, cfg: IndicatorConfig, symbols: Vec<Symbol>) -> Result<()> {
    let filters: Vec<TopicFilter> = symbols
        .iter()
        .map(|s| TopicFilter::exact(topic::ticks(s)))
        .collect();
    let mut ticks: Subscriber<Tick> = Subscriber::new(&bus, filters);
    let mut engine = IndicatorEngine::new(cfg.clone());

    info!(
        "indicator engine started: rsi={}, macd={}/{}/{}, {} instruments",
        cfg.rsi_period,
        cfg.macd.fast,
        cfg.macd.slow,
        cfg.macd.signal,
        symbols.len()
    );

    while let Some(tick) = ticks.recv().await {
        if let Some(signal) = engine.ingest(&tick) {
            let topic = topic::tech(&signal.symbol);
            debug!("{}: RSI={:.2}", topic, signal.rsi);
            if let Err(e) = bus.publish(&topic, &signal.into()) {
                warn!("failed to publish technical signal: {}", e);
            }
        }
    }

    info!("indicator engine stopped: bus closed");
    Ok(())
}
