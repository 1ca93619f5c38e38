use crate::engine::{DecisionConfig, DecisionEngine};
use crate::rules::RuleSet;
use anyhow::Result;
use log::{debug, info, warn};
use pipeline::model::OrderIntent;
use pipeline_core::bus::{topic, BusMessage, Publisher, SignalBus, TopicFilter};

/// Service loop: subscribes to both signal families (`signals:*`),
/// publishes order intents on `orders:execute`.
///
/// A failure while handling one signal is logged and never ends the loop;
/// other instruments keep being processed.
pub async fn run(bus: SignalBus, rules: RuleSet, cfg: DecisionConfig) -> Result<()> {
    let mut signals = bus.subscribe([TopicFilter::pattern("signals:*")]);
    let orders: Publisher<OrderIntent> = Publisher::new(bus.clone(), topic::ORDERS_EXECUTE);
    let mut engine = DecisionEngine::new(rules, cfg);

    info!("decision engine started");

    while let Some((topic_name, msg)) = signals.recv().await {
        let intent = match msg {
            BusMessage::Technical(signal) => engine.on_technical(signal),
            BusMessage::Sentiment(signal) => engine.on_sentiment(signal),
            other => {
                debug!("ignoring {} frame on {}", other.kind(), topic_name);
                None
            }
        };

        if let Some(intent) = intent {
            info!(
                "order intent: {} {} @ {} (size={})",
                intent.side, intent.symbol, intent.price, intent.size
            );
            if let Err(e) = orders.send(intent) {
                warn!("failed to publish order intent: {}", e);
            }
        }
    }

    info!("decision engine stopped: bus closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pipeline::model::{MacdValue, SentimentSignal, Side, Symbol, TechnicalSignal};
    use pipeline_core::bus::Subscriber;
    use tokio::time::{sleep, timeout, Duration};

    #[tokio::test]
    async fn run_emits_intents_over_the_bus() {
        let bus = SignalBus::new();
        let symbol = Symbol::from("EUR/USD");
        let mut intents: Subscriber<OrderIntent> =
            Subscriber::new(&bus, [TopicFilter::exact(topic::ORDERS_EXECUTE)]);
        tokio::spawn(run(
            bus.clone(),
            RuleSet::conservative(&[symbol.clone()]),
            DecisionConfig::default(),
        ));
        // Let the service subscribe before the signals arrive.
        sleep(Duration::from_millis(50)).await;

        bus.publish(
            &topic::tech(&symbol),
            &TechnicalSignal {
                symbol: symbol.clone(),
                timestamp: Utc::now(),
                price: 1.0850,
                rsi: 25.0,
                macd: MacdValue::default(),
            }
            .into(),
        )
        .unwrap();
        bus.publish(
            &topic::sentiment(&symbol),
            &SentimentSignal {
                symbol: symbol.clone(),
                timestamp: Utc::now(),
                sentiment_score: 0.5,
            }
            .into(),
        )
        .unwrap();

        let intent = timeout(Duration::from_secs(5), intents.recv())
            .await
            .expect("no intent within deadline")
            .unwrap();
        assert_eq!(intent.symbol, symbol);
        assert_eq!(intent.side, Side::Buy);
        assert_eq!(intent.price, 1.0850);
    }
}
