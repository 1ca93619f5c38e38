//! # Decision Engine
//!
//! Fuses technical and sentiment signals per instrument, applies a static
//! rule table and emits BUY/SELL order intents. Deterministic: no models,
//! no timers, decisions are triggered only by incoming signals.
//!
//! One engine task owns all instrument state. Running replicas of this
//! service against the same bus would race position state and fire duplicate
//! orders; scale the other services instead.

mod engine;
mod rules;
mod service;
mod state;

pub use engine::{DecisionConfig, DecisionEngine};
pub use rules::{BuyRule, RuleSet, SellRule, SymbolRules};
pub use service::run;
pub use state::InstrumentState;
