use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity, Symbol, Timestamp};

/// Unique, session-scoped identifier for an order.
/// Assigned monotonically starting at 1 and never reused.
pub type OrderId = u64;

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Order types supported by the session engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Execute at current market price
    Market,
    /// Execute at the limit price or better
    Limit,
}

/// Order lifecycle status
///
/// The engine only ever assigns `Submitted`; fills and cancels are not
/// simulated, but the terminal states are part of the data model so
/// snapshots describe the full lifecycle vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order has been recorded by the session
    Submitted,
    /// Order has been completely filled
    Filled,
    /// Order has been cancelled
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Filled | OrderStatus::Cancelled)
    }
}

/// Immutable record of an order-placement request and its submission
/// metadata. Never mutated or deleted once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    /// Validated as strictly positive before the order is created
    pub quantity: Quantity,
    pub side: Side,
    pub order_type: OrderType,
    /// Present and positive iff `order_type` is `Limit`
    pub limit_price: Option<Price>,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

/// Caller-supplied order details, before the engine assigns id, status, and
/// timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub symbol: String,
    pub quantity: Quantity,
    pub side: Side,
    pub order_type: OrderType,
    pub limit_price: Option<Price>,
}

impl OrderDraft {
    /// Draft a market order
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            side,
            order_type: OrderType::Market,
            limit_price: None,
        }
    }

    /// Draft a limit order
    pub fn limit(
        symbol: impl Into<String>,
        side: Side,
        quantity: Quantity,
        limit_price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            side,
            order_type: OrderType::Limit,
            limit_price: Some(limit_price),
        }
    }

    /// The symbol as it will be keyed: trimmed and uppercased
    pub fn normalized_symbol(&self) -> Symbol {
        self.symbol.trim().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_submitted_is_not_terminal() {
        assert!(!OrderStatus::Submitted.is_terminal());
        assert!(OrderStatus::Filled.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_draft_constructors() {
        let market = OrderDraft::market("aapl", Side::Buy, 100);
        assert_eq!(market.order_type, OrderType::Market);
        assert_eq!(market.limit_price, None);

        let limit = OrderDraft::limit("tsla", Side::Sell, 25, dec!(250.00));
        assert_eq!(limit.order_type, OrderType::Limit);
        assert_eq!(limit.limit_price, Some(dec!(250.00)));
    }

    #[test]
    fn test_normalized_symbol() {
        let draft = OrderDraft::market("  aapl ", Side::Buy, 1);
        assert_eq!(draft.normalized_symbol(), "AAPL");
    }
}
