use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, Symbol, round_money};

/// A subscribed, price-only market-data entry, independent of any held
/// position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Uppercase instrument symbol - the subscription key
    pub symbol: Symbol,

    /// Latest simulated price (never below zero)
    pub price: Price,

    /// Price change of the most recent tick
    pub change: Price,

    /// Percent change of the most recent tick
    pub change_percent: Price,
}

impl Ticker {
    /// Create a freshly subscribed ticker at its seed price, with no
    /// movement recorded yet.
    pub fn seeded(symbol: impl Into<Symbol>, price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            price: round_money(price.max(Decimal::ZERO)),
            change: Decimal::ZERO,
            change_percent: Decimal::ZERO,
        }
    }

    /// Re-mark the ticker at a new price, recording change and percent
    /// change relative to the prior price.
    ///
    /// A prior price of zero makes the ratio undefined; percent change is
    /// defined as 0 in that case.
    pub fn mark(&mut self, new_price: Price) {
        let prior = self.price;
        self.price = round_money(new_price.max(Decimal::ZERO));
        self.change = round_money(self.price - prior);
        self.change_percent = if prior.is_zero() {
            Decimal::ZERO
        } else {
            round_money((self.price - prior) / prior * Decimal::ONE_HUNDRED)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_seeded_ticker_has_no_movement() {
        let ticker = Ticker::seeded("MSFT", dec!(310.404));
        assert_eq!(ticker.price, dec!(310.40));
        assert_eq!(ticker.change, Decimal::ZERO);
        assert_eq!(ticker.change_percent, Decimal::ZERO);
    }

    #[test]
    fn test_mark_records_change_and_percent() {
        let mut ticker = Ticker::seeded("MSFT", dec!(200.00));
        ticker.mark(dec!(201.00));
        assert_eq!(ticker.price, dec!(201.00));
        assert_eq!(ticker.change, dec!(1.00));
        assert_eq!(ticker.change_percent, dec!(0.50));
    }

    #[test]
    fn test_mark_floors_price_at_zero() {
        let mut ticker = Ticker::seeded("PENNY", dec!(0.30));
        ticker.mark(dec!(-0.10));
        assert_eq!(ticker.price, Decimal::ZERO);
        assert_eq!(ticker.change, dec!(-0.30));
        assert_eq!(ticker.change_percent, dec!(-100.00));
    }

    #[test]
    fn test_zero_prior_price_guards_percent() {
        let mut ticker = Ticker::seeded("PENNY", Decimal::ZERO);
        ticker.mark(dec!(0.50));
        assert_eq!(ticker.price, dec!(0.50));
        assert_eq!(ticker.change, dec!(0.50));
        // Undefined ratio falls back to 0, not infinity
        assert_eq!(ticker.change_percent, Decimal::ZERO);
    }
}
