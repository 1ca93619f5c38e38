//! Typed bus endpoints.
//!
//! `Publisher` and `Subscriber` pin a subscription to a single payload type
//! so services that only ever handle one kind of frame (tick consumers,
//! order consumers) never see the raw `BusMessage` enum. Consumers of mixed
//! topics (the decision engine) use [`SignalBus::subscribe`] directly.
//!
//! [`SignalBus::subscribe`]: super::SignalBus::subscribe

use super::envelope::{BusMessage, CodecError};
use super::topic::TopicFilter;
use super::{SignalBus, Subscription};
use log::warn;
use std::marker::PhantomData;

/// A strongly-typed output endpoint bound to one topic.
pub struct Publisher<T> {
    bus: SignalBus,
    topic: String,
    _marker: PhantomData<T>,
}

impl<T> Publisher<T>
where
    T: Into<BusMessage>,
{
    pub fn new(bus: SignalBus, topic: impl Into<String>) -> Self {
        Self {
            bus,
            topic: topic.into(),
            _marker: PhantomData,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Encodes and publishes the value on this endpoint's topic.
    pub fn send(&self, value: T) -> Result<(), CodecError> {
        self.bus.publish(&self.topic, &value.into())
    }
}

/// A strongly-typed input endpoint.
///
/// Frames of any other kind arriving on the subscribed topics are dropped
/// with a warning, the same policy as malformed frames.
pub struct Subscriber<T> {
    inner: Subscription,
    _marker: PhantomData<T>,
}

impl<T> Subscriber<T>
where
    T: TryFrom<BusMessage, Error = CodecError>,
{
    pub fn new(bus: &SignalBus, filters: impl IntoIterator<Item = TopicFilter>) -> Self {
        Self {
            inner: bus.subscribe(filters),
            _marker: PhantomData,
        }
    }

    /// Next payload of type `T`; `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            let (topic, msg) = self.inner.recv().await?;
            match T::try_from(msg) {
                Ok(value) => return Some(value),
                Err(e) => {
                    warn!("dropping frame on {}: {}", topic, e);
                    continue;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::topic;
    use chrono::Utc;
    use pipeline::model::{OrderIntent, Side, Symbol, Tick};

    #[tokio::test]
    async fn typed_endpoints_round_trip() {
        let bus = SignalBus::new();
        let mut sub: Subscriber<OrderIntent> =
            Subscriber::new(&bus, [TopicFilter::exact(topic::ORDERS_EXECUTE)]);
        let publisher: Publisher<OrderIntent> =
            Publisher::new(bus.clone(), topic::ORDERS_EXECUTE);

        let intent = OrderIntent {
            symbol: Symbol::from("EUR/USD"),
            side: Side::Buy,
            size: 0.01,
            price: 1.0850,
            timestamp: Utc::now(),
            strategy_tag: "RSI_SENTIMENT_V1".to_string(),
        };
        publisher.send(intent.clone()).unwrap();

        assert_eq!(sub.recv().await.unwrap(), intent);
    }

    #[tokio::test]
    async fn wrong_kind_frames_are_dropped() {
        let bus = SignalBus::new();
        let mut sub: Subscriber<OrderIntent> =
            Subscriber::new(&bus, [TopicFilter::exact(topic::ORDERS_EXECUTE)]);

        // A tick on the orders topic must not surface as an intent.
        bus.publish(
            topic::ORDERS_EXECUTE,
            &BusMessage::Tick(Tick {
                symbol: Symbol::from("EUR/USD"),
                price: 1.0,
                bid: 1.0,
                ask: 1.0,
                volume: 1,
                timestamp: Utc::now(),
            }),
        )
        .unwrap();

        let intent = OrderIntent {
            symbol: Symbol::from("EUR/USD"),
            side: Side::Sell,
            size: 0.01,
            price: 1.0850,
            timestamp: Utc::now(),
            strategy_tag: "RSI_SENTIMENT_V1".to_string(),
        };
        bus.publish(topic::ORDERS_EXECUTE, &intent.clone().into())
            .unwrap();

        assert_eq!(sub.recv().await.unwrap(), intent);
    }
}
