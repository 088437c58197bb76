use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Symbol, round_money};

/// A held security with cost basis, current price, and derived profit/loss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Instrument symbol - unique key within the portfolio
    pub symbol: Symbol,

    /// Signed share count; positive = long, negative = short
    pub quantity: Quantity,

    /// Average entry price (always positive)
    pub average_cost: Price,

    /// Latest simulated market price (never below zero)
    pub current_price: Price,

    /// Derived profit/loss; written only by [`Position::mark`]
    pub pnl: Price,
}

impl Position {
    /// Create a position; the initial pnl is derived immediately so the
    /// struct is internally consistent from the start.
    pub fn new(
        symbol: impl Into<Symbol>,
        quantity: Quantity,
        average_cost: Price,
        current_price: Price,
    ) -> Self {
        let mut position = Self {
            symbol: symbol.into(),
            quantity,
            average_cost,
            current_price: Decimal::ZERO,
            pnl: Decimal::ZERO,
        };
        position.mark(current_price);
        position
    }

    /// Re-mark the position at a new price.
    ///
    /// The price is floored at zero and rounded to cents; pnl is then
    /// recomputed from the stored (rounded) price, so
    /// `pnl == round((current_price - average_cost) * quantity)` holds at
    /// every observation point.
    pub fn mark(&mut self, new_price: Price) {
        self.current_price = round_money(new_price.max(Decimal::ZERO));
        self.pnl =
            round_money((self.current_price - self.average_cost) * Decimal::from(self.quantity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_position_derives_pnl() {
        let pos = Position::new("AAPL", 100, dec!(150.00), dec!(175.25));
        assert_eq!(pos.pnl, dec!(2525.00));
    }

    #[test]
    fn test_mark_recomputes_pnl_from_rounded_price() {
        let mut pos = Position::new("TSLA", 50, dec!(220.00), dec!(260.50));
        pos.mark(dec!(260.509));
        assert_eq!(pos.current_price, dec!(260.51));
        assert_eq!(pos.pnl, dec!(2025.50));
    }

    #[test]
    fn test_mark_floors_price_at_zero() {
        let mut pos = Position::new("NVDA", 75, dec!(400.00), dec!(475.10));
        pos.mark(dec!(-0.40));
        assert_eq!(pos.current_price, Decimal::ZERO);
        assert_eq!(pos.pnl, dec!(-30000.00));
    }

    #[test]
    fn test_short_position_pnl_sign() {
        // Short 10 shares at 100; price falls to 90 -> profit of 100
        let pos = Position::new("GME", -10, dec!(100.00), dec!(90.00));
        assert_eq!(pos.pnl, dec!(100.00));
    }
}
