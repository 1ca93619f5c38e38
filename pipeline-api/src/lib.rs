//! # Pipeline API
//!
//! Shared data model for the trading decision pipeline.
//!
//! Every payload that crosses the signal bus lives here, with identical
//! serialization on both sides of each topic: ticks, technical and sentiment
//! signals, order intents and execution results.

pub mod model;
