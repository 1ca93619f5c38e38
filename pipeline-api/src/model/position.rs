use crate::model::Side;
use serde::{Deserialize, Serialize};

/// Directional exposure of one instrument.
///
/// Legal transitions: Flat -> Long, Flat -> Short, Long -> Short,
/// Short -> Long. A decision in the same direction as the current position
/// is suppressed by the decision engine (no pyramiding).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    #[default]
    Flat,
    Long,
    Short,
}

impl Position {
    /// The position that results from filling an order on `side`.
    pub fn opened_by(side: Side) -> Self {
        match side {
            Side::Buy => Position::Long,
            Side::Sell => Position::Short,
        }
    }

    /// True when a trade on `side` would only repeat the current exposure.
    pub fn repeats(&self, side: Side) -> bool {
        *self == Position::opened_by(side)
    }
}
