//! Per-instrument decision thresholds.
//!
//! Loaded once at startup from a JSON file shaped like
//!
//! ```json
//! {
//!   "EUR/USD": {
//!     "BUY":  { "rsi_min": 0,  "rsi_max": 30,  "sentiment_min": 0.3 },
//!     "SELL": { "rsi_min": 70, "rsi_max": 100, "sentiment_max": -0.3 }
//!   }
//! }
//! ```
//!
//! and read-only afterwards. BUY and SELL RSI ranges are expected to be
//! disjoint; the engine does not validate this (rule author's
//! responsibility).

use anyhow::{Context, Result};
use pipeline::model::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyRule {
    pub rsi_min: f64,
    pub rsi_max: f64,
    pub sentiment_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellRule {
    pub rsi_min: f64,
    pub rsi_max: f64,
    pub sentiment_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRules {
    #[serde(rename = "BUY")]
    pub buy: BuyRule,
    #[serde(rename = "SELL")]
    pub sell: SellRule,
}

impl SymbolRules {
    /// Conservative defaults: buy oversold with positive sentiment, sell
    /// overbought with negative sentiment.
    pub fn conservative() -> Self {
        Self {
            buy: BuyRule {
                rsi_min: 0.0,
                rsi_max: 30.0,
                sentiment_min: 0.3,
            },
            sell: SellRule {
                rsi_min: 70.0,
                rsi_max: 100.0,
                sentiment_max: -0.3,
            },
        }
    }
}

/// Rule table keyed by raw symbol (`"EUR/USD"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(HashMap<String, SymbolRules>);

impl RuleSet {
    /// Conservative defaults for every tracked symbol.
    pub fn conservative(symbols: &[Symbol]) -> Self {
        Self(
            symbols
                .iter()
                .map(|s| (s.as_str().to_string(), SymbolRules::conservative()))
                .collect(),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("cannot open rule file {}", path.display()))?;
        let rules = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("cannot parse rule file {}", path.display()))?;
        Ok(rules)
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&SymbolRules> {
        self.0.get(symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
