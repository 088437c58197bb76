// Re-export domain types from paperdesk-core so callers of the engine can
// work from a single import path.
pub use paperdesk_core::{
    Order, OrderDraft, OrderId, OrderStatus, OrderType, Position, Price, Quantity, Session, Side,
    Symbol, Ticker, Timestamp,
};

use rust_decimal_macros::dec;
use std::time::Duration;

/// Engine tuning knobs.
///
/// `Default` matches the reference simulation: a tick every 1.5 s, position
/// drift of up to one price unit per tick, ticker drift of up to 1% per
/// tick, and fresh ticker subscriptions seeded in [50, 550).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Cadence of the simulation tick
    pub tick_interval: Duration,

    /// Max absolute per-tick price move for portfolio positions, in price
    /// units
    pub position_jitter: f64,

    /// Max absolute per-tick relative move for tickers (0.01 = 1%)
    pub ticker_jitter_pct: f64,

    /// Seed price range for fresh ticker subscriptions
    pub ticker_seed_low: f64,
    pub ticker_seed_high: f64,

    /// Portfolio installed on every connect
    pub seed_portfolio: Vec<Position>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1500),
            position_jitter: 1.0,
            ticker_jitter_pct: 0.01,
            ticker_seed_low: 50.0,
            ticker_seed_high: 550.0,
            seed_portfolio: default_seed_portfolio(),
        }
    }
}

/// The fixed demo book every session starts from
pub fn default_seed_portfolio() -> Vec<Position> {
    vec![
        Position::new("AAPL", 100, dec!(150.00), dec!(175.25)),
        Position::new("TSLA", 50, dec!(220.00), dec!(260.50)),
        Position::new("NVDA", 75, dec!(400.00), dec!(475.10)),
    ]
}
