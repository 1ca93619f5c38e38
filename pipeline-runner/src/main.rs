//! Boots the whole pipeline in one process: signal bus, synthetic feeds and
//! the three services, each as its own cooperative loop. All coordination
//! goes through the bus; the services share nothing else.

mod args;

use anyhow::Result;
use args::Args;
use clap::Parser;
use decision_engine::{DecisionConfig, RuleSet};
use indicator_engine::{IndicatorConfig, MacdConfig};
use log::{error, info, warn};
use order_executor::ExecutorConfig;
use pipeline::model::Symbol;
use pipeline_core::bus::SignalBus;
use std::future::Future;
use std::time::Duration;

fn spawn_service<F>(name: &'static str, fut: F)
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = fut.await {
            error!("{} exited with error: {:#}", name, e);
        }
    });
}

fn load_rules(args: &Args, symbols: &[Symbol]) -> RuleSet {
    match &args.rules_file {
        Some(path) => match RuleSet::load(path) {
            Ok(rules) => {
                info!("decision rules loaded from {}", path.display());
                rules
            }
            Err(e) => {
                warn!("{:#}; falling back to conservative defaults", e);
                RuleSet::conservative(symbols)
            }
        },
        None => {
            warn!("no rule file given, using conservative defaults");
            RuleSet::conservative(symbols)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let symbols: Vec<Symbol> = args
        .symbols
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| Symbol::new(s.as_str()))
        .collect();
    anyhow::ensure!(!symbols.is_empty(), "at least one symbol is required");

    let indicator_cfg = IndicatorConfig {
        rsi_period: args.rsi_period,
        macd: MacdConfig {
            fast: args.macd_fast,
            slow: args.macd_slow,
            signal: args.macd_signal,
        },
        history_capacity: args.history_capacity,
    };
    let decision_cfg = DecisionConfig {
        order_size: args.order_size,
        ..Default::default()
    };
    let executor_cfg = ExecutorConfig {
        exchange: args.exchange.parse().map_err(anyhow::Error::msg)?,
        api_key: std::env::var("EXCHANGE_API_KEY").ok(),
        api_secret: std::env::var("EXCHANGE_API_SECRET").ok(),
        paper_trading: !args.live,
        request_timeout: Duration::from_millis(args.execution_timeout_ms),
        ..Default::default()
    };
    let rules = load_rules(&args, &symbols);

    info!("tracked instruments: {:?}", args.symbols);

    let bus = SignalBus::new();

    spawn_service(
        "indicator-engine",
        indicator_engine::run(bus.clone(), indicator_cfg, symbols.clone()),
    );
    spawn_service(
        "decision-engine",
        decision_engine::run(bus.clone(), rules, decision_cfg),
    );
    spawn_service(
        "order-executor",
        order_executor::run(bus.clone(), executor_cfg),
    );
    spawn_service(
        "tick-feed",
        sim_feed::run_tick_feed(
            bus.clone(),
            symbols.clone(),
            Duration::from_millis(args.tick_interval_ms),
        ),
    );
    spawn_service(
        "sentiment-feed",
        sim_feed::run_sentiment_feed(
            bus.clone(),
            symbols,
            Duration::from_millis(args.sentiment_interval_ms),
        ),
    );

    tokio::signal::ctrl_c().await?;
    info!("shutdown requested");
    Ok(())
}
