pub mod execution;
pub mod order;
pub mod position;
pub mod signal;
pub mod symbol;
pub mod tick;

pub use execution::ExecutionResult;
pub use order::{OrderIntent, Side};
pub use position::Position;
pub use signal::{MacdValue, SentimentSignal, TechnicalSignal};
pub use symbol::Symbol;
pub use tick::Tick;

use thiserror::Error;

/// Payload-level validation failure.
///
/// Raised when decoding a bus frame whose fields are shaped correctly but
/// semantically unusable (empty symbol, NaN price, out-of-range sentiment).
/// Consuming loops drop such frames instead of processing them.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing instrument symbol")]
    MissingSymbol,
    #[error("field `{0}` is not a finite number")]
    NonFinite(&'static str),
    #[error("sentiment score {0} outside [-1.0, 1.0]")]
    SentimentOutOfRange(f64),
    #[error("order size {0} must be positive")]
    NonPositiveSize(f64),
}
