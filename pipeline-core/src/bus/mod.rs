//! In-process signal bus.
//!
//! A thin wrapper around a tokio broadcast channel: at-most-once delivery,
//! no backlog, fan-out to all currently-subscribed consumers, no ordering
//! across topics. A subscriber that falls behind drops the missed frames
//! and keeps going.

pub mod envelope;
pub mod socket;
pub mod topic;

pub use envelope::{decode, encode, BusMessage, CodecError, WIRE_VERSION};
pub use socket::{Publisher, Subscriber};
pub use topic::TopicFilter;

use log::warn;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Frames a lagging receiver can drop before we start warning loudly.
const BUS_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct BusEvent {
    topic: Arc<str>,
    frame: Arc<[u8]>,
}

/// Handle to the signal bus. Cloning is cheap; all clones publish into and
/// subscribe from the same channel.
#[derive(Clone)]
pub struct SignalBus {
    tx: broadcast::Sender<BusEvent>,
}

impl SignalBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Encodes `msg` and publishes it on `topic`.
    ///
    /// Publishing to a topic nobody listens to is not an error; the frame is
    /// simply dropped, matching at-most-once semantics.
    pub fn publish(&self, topic: &str, msg: &BusMessage) -> Result<(), CodecError> {
        let frame = envelope::encode(msg)?;
        self.publish_raw(topic, frame);
        Ok(())
    }

    /// Publishes pre-encoded bytes. Used by tests to inject arbitrary frames.
    pub fn publish_raw(&self, topic: &str, frame: Vec<u8>) {
        let _ = self.tx.send(BusEvent {
            topic: Arc::from(topic),
            frame: Arc::from(frame.into_boxed_slice()),
        });
    }

    /// Subscribes to every topic matched by any of `filters`.
    ///
    /// Only frames published after this call are observed.
    pub fn subscribe(&self, filters: impl IntoIterator<Item = TopicFilter>) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
            filters: filters.into_iter().collect(),
        }
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

/// One consumer's view of the bus.
pub struct Subscription {
    rx: broadcast::Receiver<BusEvent>,
    filters: Vec<TopicFilter>,
}

impl Subscription {
    /// Next decoded frame matching this subscription's filters.
    ///
    /// Malformed or invalid frames are dropped with a warning, and a lagged
    /// receiver resumes after noting how many frames it lost; neither ends
    /// the stream. Returns `None` only once the bus itself is gone.
    pub async fn recv(&mut self) -> Option<(String, BusMessage)> {
        loop {
            match self.rx.recv().await {
                Ok(event) => {
                    if !self.filters.iter().any(|f| f.matches(&event.topic)) {
                        continue;
                    }
                    match envelope::decode(&event.frame) {
                        Ok(msg) => return Some((event.topic.to_string(), msg)),
                        Err(e) => {
                            warn!("dropping frame on {}: {}", event.topic, e);
                            continue;
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("bus subscriber lagged, {} frames dropped", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
