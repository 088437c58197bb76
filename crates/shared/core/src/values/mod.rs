use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Share quantity - signed, positive = long
pub type Quantity = i64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier for a tradeable instrument
pub type Symbol = String;

/// Decimal places for all prices and P&L figures
pub const PRICE_DP: u32 = 2;

/// Round a monetary value to [`PRICE_DP`] places.
///
/// Rounding mode is half-away-from-zero, applied uniformly so derived
/// figures (P&L, percent change) agree with displayed prices.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PRICE_DP, RoundingStrategy::MidpointAwayFromZero)
}
