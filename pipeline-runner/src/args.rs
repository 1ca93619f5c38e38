use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Tracked instruments, comma separated
    #[arg(long, default_value = "EUR/USD,GBP/USD,USD/JPY", value_delimiter = ',')]
    pub symbols: Vec<String>,

    /// RSI lookback period
    #[arg(long, default_value_t = 14)]
    pub rsi_period: usize,

    /// MACD fast EMA period
    #[arg(long, default_value_t = 12)]
    pub macd_fast: usize,

    /// MACD slow EMA period
    #[arg(long, default_value_t = 26)]
    pub macd_slow: usize,

    /// MACD signal EMA period
    #[arg(long, default_value_t = 9)]
    pub macd_signal: usize,

    /// Closing prices retained per instrument
    #[arg(long, default_value_t = 1000)]
    pub history_capacity: usize,

    /// Decision rule table (JSON); conservative defaults when absent
    #[arg(long)]
    pub rules_file: Option<PathBuf>,

    /// Position size as a fraction of notional per trade
    #[arg(long, default_value_t = 0.01)]
    pub order_size: f64,

    /// Exchange adapter: alpaca or oanda (credentials required)
    #[arg(long, default_value = "alpaca")]
    pub exchange: String,

    /// Trade against the live exchange instead of the paper endpoint
    #[arg(long)]
    pub live: bool,

    /// Milliseconds between synthetic ticks per instrument
    #[arg(long, default_value_t = 1000)]
    pub tick_interval_ms: u64,

    /// Milliseconds between synthetic sentiment scores per instrument
    #[arg(long, default_value_t = 5000)]
    pub sentiment_interval_ms: u64,

    /// Outbound exchange call deadline in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub execution_timeout_ms: u64,
}
