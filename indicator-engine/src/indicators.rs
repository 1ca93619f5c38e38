//! RSI, EMA and MACD over a price series.
//!
//! All functions degrade instead of failing: too little history yields the
//! documented neutral/zero values, never an error.

use pipeline::model::MacdValue;

/// MACD periods. Defaults are the conventional 12/26/9.
#[derive(Debug, Clone)]
pub struct MacdConfig {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

/// Relative Strength Index over the trailing `period` deltas.
///
/// Returns a neutral 50.0 when fewer than `period + 1` prices exist, and
/// exactly 100.0 when the window has no losses (never divides by zero).
/// Rounded to 2 decimals.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 50.0;
    }

    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let window = &deltas[deltas.len() - period..];

    let avg_gain: f64 = window.iter().filter(|d| **d > 0.0).sum::<f64>() / period as f64;
    let avg_loss: f64 = window.iter().filter(|d| **d < 0.0).map(|d| -d).sum::<f64>() / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    round_to(100.0 - 100.0 / (1.0 + rs), 2)
}

/// Seeded-recurrence EMA over the full series:
/// `ema[0] = p[0]; ema[i] = (p[i] - ema[i-1]) * k + ema[i-1]`, `k = 2/(n+1)`.
pub fn ema(prices: &[f64], period: usize) -> f64 {
    let Some((&first, rest)) = prices.split_first() else {
        return 0.0;
    };
    let k = 2.0 / (period as f64 + 1.0);
    rest.iter().fold(first, |acc, &p| (p - acc) * k + acc)
}

/// MACD line, signal line and histogram.
///
/// The signal line is the EMA of the (length-1, hence degenerate) MACD
/// series, so it always equals the MACD line and the histogram is zero; the
/// fields stay separate because they are independent on the wire. All-zero
/// when history is shorter than the slow period. Rounded to 5 decimals.
pub fn macd(prices: &[f64], cfg: &MacdConfig) -> MacdValue {
    if prices.len() < cfg.slow {
        return MacdValue::default();
    }

    let ema_fast = ema(prices, cfg.fast);
    let ema_slow = ema(prices, cfg.slow);
    let macd_line = ema_fast - ema_slow;
    let signal_line = ema(&[macd_line], cfg.signal);

    MacdValue {
        macd: round_to(macd_line, 5),
        signal: round_to(signal_line, 5),
        histogram: round_to(macd_line - signal_line, 5),
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
