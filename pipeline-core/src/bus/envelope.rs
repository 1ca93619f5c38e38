//! Wire format for bus frames.
//!
//! Every frame is a JSON object carrying a schema version and an internally
//! tagged payload, e.g.
//!
//! ```json
//! {"v":1,"kind":"sentiment","symbol":"EUR/USD","sentiment_score":0.4,...}
//! ```
//!
//! Decoding rejects unknown versions and payloads that fail field validation;
//! consumers drop rejected frames instead of trusting their shape.

use pipeline::model::{
    ExecutionResult, OrderIntent, SentimentSignal, Tick, TechnicalSignal, ValidationError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current schema version. Bump on any incompatible payload change.
pub const WIRE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported wire version {found}, expected {WIRE_VERSION}")]
    Version { found: u32 },
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid payload: {0}")]
    Invalid(#[from] ValidationError),
    #[error("unexpected `{found}` frame, expected `{expected}`")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}

/// All payload kinds that travel over the bus, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BusMessage {
    Tick(Tick),
    Technical(TechnicalSignal),
    Sentiment(SentimentSignal),
    Order(OrderIntent),
    Execution(ExecutionResult),
}

impl BusMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            BusMessage::Tick(_) => "tick",
            BusMessage::Technical(_) => "technical",
            BusMessage::Sentiment(_) => "sentiment",
            BusMessage::Order(_) => "order",
            BusMessage::Execution(_) => "execution",
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            BusMessage::Tick(t) => t.validate(),
            BusMessage::Technical(s) => s.validate(),
            BusMessage::Sentiment(s) => s.validate(),
            BusMessage::Order(o) => o.validate(),
            BusMessage::Execution(r) => r.validate(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Frame {
    v: u32,
    #[serde(flatten)]
    msg: BusMessage,
}

pub fn encode(msg: &BusMessage) -> Result<Vec<u8>, CodecError> {
    let frame = Frame {
        v: WIRE_VERSION,
        msg: msg.clone(),
    };
    Ok(serde_json::to_vec(&frame)?)
}

/// Decodes and validates one frame. The error distinguishes transport-shape
/// problems (malformed JSON, wrong version) from semantic ones (field
/// validation), but consumers treat both the same way: warn and drop.
pub fn decode(bytes: &[u8]) -> Result<BusMessage, CodecError> {
    let frame: Frame = serde_json::from_slice(bytes)?;
    if frame.v != WIRE_VERSION {
        return Err(CodecError::Version { found: frame.v });
    }
    frame.msg.validate()?;
    Ok(frame.msg)
}

macro_rules! impl_payload {
    ($variant:ident, $ty:ty, $kind:literal) => {
        impl From<$ty> for BusMessage {
            fn from(value: $ty) -> Self {
                BusMessage::$variant(value)
            }
        }

        impl TryFrom<BusMessage> for $ty {
            type Error = CodecError;

            fn try_from(msg: BusMessage) -> Result<Self, Self::Error> {
                match msg {
                    BusMessage::$variant(value) => Ok(value),
                    other => Err(CodecError::UnexpectedKind {
                        expected: $kind,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

impl_payload!(Tick, Tick, "tick");
impl_payload!(Technical, TechnicalSignal, "technical");
impl_payload!(Sentiment, SentimentSignal, "sentiment");
impl_payload!(Order, OrderIntent, "order");
impl_payload!(Execution, ExecutionResult, "execution");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pipeline::model::{MacdValue, Side, Symbol};

    fn sample_messages() -> Vec<BusMessage> {
        let symbol = Symbol::from("EUR/USD");
        let now = Utc::now();
        vec![
            BusMessage::Tick(Tick {
                symbol: symbol.clone(),
                price: 1.0850,
                bid: 1.0848,
                ask: 1.0852,
                volume: 420,
                timestamp: now,
            }),
            BusMessage::Technical(TechnicalSignal {
                symbol: symbol.clone(),
                timestamp: now,
                price: 1.0850,
                rsi: 27.5,
                macd: MacdValue {
                    macd: 0.00012,
                    signal: 0.00012,
                    histogram: 0.0,
                },
            }),
            BusMessage::Sentiment(SentimentSignal {
                symbol: symbol.clone(),
                timestamp: now,
                sentiment_score: -0.4,
            }),
            BusMessage::Order(OrderIntent {
                symbol: symbol.clone(),
                side: Side::Sell,
                size: 0.01,
                price: 1.0850,
                timestamp: now,
                strategy_tag: "RSI_SENTIMENT_V1".to_string(),
            }),
            BusMessage::Execution(ExecutionResult::filled(
                "sim_1".to_string(),
                symbol,
                Side::Sell,
                0.01,
                1.0850,
                "simulation",
                true,
            )),
        ]
    }

    #[test]
    fn round_trip_is_lossless_for_every_kind() {
        for msg in sample_messages() {
            let bytes = encode(&msg).unwrap();
            let back = decode(&bytes).unwrap();
            assert_eq!(back, msg);
        }
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let bytes = encode(&sample_messages()[0]).unwrap();
        let mut value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["v"] = serde_json::json!(99);
        let bytes = serde_json::to_vec(&value).unwrap();

        match decode(&bytes) {
            Err(CodecError::Version { found: 99 }) => {}
            other => panic!("expected version error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            decode(b"{\"v\":1,\"kind\":\"tick\""),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn out_of_range_sentiment_is_rejected() {
        let bytes = serde_json::to_vec(&serde_json::json!({
            "v": 1,
            "kind": "sentiment",
            "symbol": "EUR/USD",
            "timestamp": Utc::now(),
            "sentiment_score": 3.0,
        }))
        .unwrap();
        assert!(matches!(decode(&bytes), Err(CodecError::Invalid(_))));
    }

    #[test]
    fn wrong_kind_extraction_fails() {
        let msg = sample_messages().remove(2);
        let err = Tick::try_from(msg).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnexpectedKind {
                expected: "tick",
                found: "sentiment"
            }
        ));
    }
}
