//! # Sim Feed
//!
//! Synthetic producers standing in for the two external collaborators:
//! the exchange tick feed and the retrieval-backed sentiment scorer.
//!
//! Ticks follow a small random walk around realistic base prices; the
//! sentiment score drifts inside [-1, 1]. Both publish on the same topics
//! the real producers would use, so the rest of the pipeline cannot tell
//! the difference.

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use pipeline::model::{SentimentSignal, Symbol, Tick};
use pipeline_core::bus::{topic, Publisher, SignalBus};
use rand::Rng;
use std::time::Duration;

fn base_price(symbol: &Symbol) -> f64 {
    match symbol.as_str() {
        "EUR/USD" => 1.0850,
        "GBP/USD" => 1.2650,
        "USD/JPY" => 149.50,
        _ => 1.0,
    }
}

fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

/// Random-walk tick producer: one tick per symbol per interval.
pub async fn run_tick_feed(
    bus: SignalBus,
    symbols: Vec<Symbol>,
    interval: Duration,
) -> Result<()> {
    let publishers: Vec<Publisher<Tick>> = symbols
        .iter()
        .map(|s| Publisher::new(bus.clone(), topic::ticks(s)))
        .collect();
    let mut prices: Vec<f64> = symbols.iter().map(base_price).collect();

    info!(
        "tick feed started: {} instruments, one tick per {:?}",
        symbols.len(),
        interval
    );

    loop {
        for (i, symbol) in symbols.iter().enumerate() {
            let tick = {
                let mut rng = rand::thread_rng();
                prices[i] += rng.gen_range(-0.0010..0.0010);
                // A walk can wander negative; prices cannot.
                prices[i] = prices[i].max(0.0001);
                let price = round5(prices[i]);
                Tick {
                    symbol: symbol.clone(),
                    price,
                    bid: round5(price - 0.0002),
                    ask: round5(price + 0.0002),
                    volume: rng.gen_range(100..=1000),
                    timestamp: Utc::now(),
                }
            };
            if let Err(e) = publishers[i].send(tick) {
                warn!("failed to publish tick: {}", e);
            }
        }
        tokio::time::sleep(interval).await;
    }
}

/// Drifting sentiment producer, clamped to the scorer's [-1, 1] contract.
pub async fn run_sentiment_feed(
    bus: SignalBus,
    symbols: Vec<Symbol>,
    interval: Duration,
) -> Result<()> {
    let publishers: Vec<Publisher<SentimentSignal>> = symbols
        .iter()
        .map(|s| Publisher::new(bus.clone(), topic::sentiment(s)))
        .collect();
    let mut scores = vec![0.0f64; symbols.len()];

    info!(
        "sentiment feed started: {} instruments, one score per {:?}",
        symbols.len(),
        interval
    );

    loop {
        for (i, symbol) in symbols.iter().enumerate() {
            let signal = {
                let mut rng = rand::thread_rng();
                scores[i] = (scores[i] + rng.gen_range(-0.2..0.2)).clamp(-1.0, 1.0);
                SentimentSignal {
                    symbol: symbol.clone(),
                    timestamp: Utc::now(),
                    sentiment_score: (scores[i] * 100.0).round() / 100.0,
                }
            };
            if let Err(e) = publishers[i].send(signal) {
                warn!("failed to publish sentiment: {}", e);
            }
        }
        tokio::time::sleep(interval).await;
    }
}
