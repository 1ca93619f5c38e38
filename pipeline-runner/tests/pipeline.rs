//! End-to-end flow over the bus: ticks in, technical signal out, fused with
//! sentiment into a BUY intent, executed by the simulation adapter.

use chrono::Utc;
use decision_engine::{DecisionConfig, RuleSet};
use indicator_engine::{IndicatorConfig, MacdConfig};
use order_executor::ExecutorConfig;
use pipeline::model::{ExecutionResult, OrderIntent, SentimentSignal, Side, Symbol, Tick};
use pipeline_core::bus::{topic, SignalBus, Subscriber, TopicFilter};
use std::time::Duration;
use tokio::time::timeout;

fn tick(symbol: &Symbol, price: f64) -> Tick {
    Tick {
        symbol: symbol.clone(),
        price,
        bid: price - 0.0002,
        ask: price + 0.0002,
        volume: 500,
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn tick_to_execution_flow() {
    let bus = SignalBus::new();
    let symbol = Symbol::from("EUR/USD");
    let symbols = vec![symbol.clone()];

    let mut intents: Subscriber<OrderIntent> =
        Subscriber::new(&bus, [TopicFilter::exact(topic::ORDERS_EXECUTE)]);
    let mut results: Subscriber<ExecutionResult> =
        Subscriber::new(&bus, [TopicFilter::exact(topic::ORDERS_RESULTS)]);

    let indicator_cfg = IndicatorConfig {
        rsi_period: 3,
        macd: MacdConfig::default(),
        history_capacity: 100,
    };
    tokio::spawn(indicator_engine::run(
        bus.clone(),
        indicator_cfg,
        symbols.clone(),
    ));
    tokio::spawn(decision_engine::run(
        bus.clone(),
        RuleSet::conservative(&symbols),
        DecisionConfig::default(),
    ));
    // Default config carries no credentials: simulation mode.
    tokio::spawn(order_executor::run(bus.clone(), ExecutorConfig::default()));

    // Let the services subscribe before publishing (at-most-once bus:
    // earlier frames would be lost).
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Strictly falling prices: RSI = 0, inside the conservative BUY range.
    for price in [1.0850, 1.0840, 1.0830, 1.0820] {
        bus.publish(&topic::ticks(&symbol), &tick(&symbol, price).into())
            .unwrap();
    }
    bus.publish(
        &topic::sentiment(&symbol),
        &SentimentSignal {
            symbol: symbol.clone(),
            timestamp: Utc::now(),
            sentiment_score: 0.6,
        }
        .into(),
    )
    .unwrap();

    let intent = timeout(Duration::from_secs(5), intents.recv())
        .await
        .expect("no order intent within deadline")
        .unwrap();
    assert_eq!(intent.symbol, symbol);
    assert_eq!(intent.side, Side::Buy);
    assert_eq!(intent.price, 1.0820);
    assert_eq!(intent.size, 0.01);

    let result = timeout(Duration::from_secs(5), results.recv())
        .await
        .expect("no execution result within deadline")
        .unwrap();
    assert!(result.success);
    assert_eq!(result.exchange, "simulation");
    assert_eq!(result.filled_price, intent.price);
    assert!(result.paper_trading);

    // The same conditions again must not fire a second BUY: the engine is
    // already long.
    bus.publish(&topic::ticks(&symbol), &tick(&symbol, 1.0810).into())
        .unwrap();
    bus.publish(
        &topic::sentiment(&symbol),
        &SentimentSignal {
            symbol: symbol.clone(),
            timestamp: Utc::now(),
            sentiment_score: 0.6,
        }
        .into(),
    )
    .unwrap();
    assert!(
        timeout(Duration::from_millis(300), intents.recv())
            .await
            .is_err(),
        "position suppression must hold while long"
    );
}
