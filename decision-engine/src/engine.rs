use crate::rules::RuleSet;
use crate::state::InstrumentState;
use chrono::Utc;
use log::{debug, warn};
use pipeline::model::{OrderIntent, Position, SentimentSignal, Side, Symbol, TechnicalSignal};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DecisionConfig {
    /// Fixed position-sizing: fraction of notional per trade. Not computed
    /// from account equity.
    pub order_size: f64,
    pub strategy_tag: String,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            order_size: 0.01,
            strategy_tag: "RSI_SENTIMENT_V1".to_string(),
        }
    }
}

/// Per-instrument state machine {Flat, Long, Short} driven by the rule
/// table. Pure with respect to the bus: the `on_*` handlers return the
/// intent to publish, if any.
pub struct DecisionEngine {
    rules: RuleSet,
    cfg: DecisionConfig,
    states: HashMap<Symbol, InstrumentState>,
}

impl DecisionEngine {
    pub fn new(rules: RuleSet, cfg: DecisionConfig) -> Self {
        Self {
            rules,
            cfg,
            states: HashMap::new(),
        }
    }

    /// Overwrites the technical slot and re-evaluates the instrument.
    pub fn on_technical(&mut self, signal: TechnicalSignal) -> Option<OrderIntent> {
        let symbol = signal.symbol.clone();
        debug!("{}: technical updated, RSI={:.2}", symbol, signal.rsi);
        self.states.entry(symbol.clone()).or_default().last_technical = Some(signal);
        self.evaluate(&symbol)
    }

    /// Overwrites the sentiment slot and re-evaluates the instrument.
    pub fn on_sentiment(&mut self, signal: SentimentSignal) -> Option<OrderIntent> {
        let symbol = signal.symbol.clone();
        debug!(
            "{}: sentiment updated, score={:.2}",
            symbol, signal.sentiment_score
        );
        self.states.entry(symbol.clone()).or_default().last_sentiment = Some(signal);
        self.evaluate(&symbol)
    }

    /// Applies the rule table to the fused state.
    ///
    /// No decision without both signals or without a rule entry (a
    /// configuration gap, not a fault). BUY is checked before SELL; the two
    /// cannot both fire because their RSI ranges are expected to be
    /// disjoint. A decision repeating the current position direction is
    /// suppressed.
    ///
    /// On a fired decision the position is updated optimistically, before
    /// any execution confirmation exists.
    fn evaluate(&mut self, symbol: &Symbol) -> Option<OrderIntent> {
        let state = self.states.get_mut(symbol)?;
        let (tech, sentiment) = match (&state.last_technical, &state.last_sentiment) {
            (Some(t), Some(s)) => (t, s),
            _ => return None,
        };

        let Some(rules) = self.rules.get(symbol) else {
            warn!("no decision rules configured for {}", symbol);
            return None;
        };

        let rsi = tech.rsi;
        let score = sentiment.sentiment_score;
        // Intents are always priced off the latest technical signal; the
        // sentiment family carries no price.
        let price = tech.price;

        let buy = &rules.buy;
        let sell = &rules.sell;
        let side = if (buy.rsi_min..=buy.rsi_max).contains(&rsi)
            && score >= buy.sentiment_min
            && !state.position.repeats(Side::Buy)
        {
            Side::Buy
        } else if (sell.rsi_min..=sell.rsi_max).contains(&rsi)
            && score <= sell.sentiment_max
            && !state.position.repeats(Side::Sell)
        {
            Side::Sell
        } else {
            return None;
        };

        state.position = Position::opened_by(side);
        state.last_decision = Some(side);

        Some(OrderIntent {
            symbol: symbol.clone(),
            side,
            size: self.cfg.order_size,
            price,
            timestamp: Utc::now(),
            strategy_tag: self.cfg.strategy_tag.clone(),
        })
    }

    pub fn state(&self, symbol: &Symbol) -> Option<&InstrumentState> {
        self.states.get(symbol)
    }
}
