use pipeline::model::{Position, SentimentSignal, Side, TechnicalSignal};

/// Fused view of one instrument, owned by the engine task for the process
/// lifetime.
///
/// Both signal slots are latest-value overwrite: no history, no timestamp
/// reconciliation between the two families. If one side goes quiet its last
/// value keeps being used.
#[derive(Debug, Default)]
pub struct InstrumentState {
    pub last_technical: Option<TechnicalSignal>,
    pub last_sentiment: Option<SentimentSignal>,
    pub position: Position,
    pub last_decision: Option<Side>,
}
