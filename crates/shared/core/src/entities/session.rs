use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Order, OrderId, Position, Ticker};
use crate::values::Symbol;

/// Aggregate root for one logical client: connection state, portfolio,
/// ticker subscriptions, and the order log.
///
/// Snapshots of this aggregate are what observers read; all mutation goes
/// through the session engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Top-level lifecycle gate; all collections are empty while false
    pub connected: bool,

    /// Held positions, in seed order
    pub portfolio: Vec<Position>,

    /// Subscribed tickers keyed by uppercase symbol.
    /// An ordered map keeps seeded simulation runs reproducible.
    pub tickers: BTreeMap<Symbol, Ticker>,

    /// Order log, newest first (index 0 is the most recent)
    pub orders: Vec<Order>,

    /// Next id to assign; monotonic, never reused
    pub next_order_id: OrderId,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            connected: false,
            portfolio: Vec::new(),
            tickers: BTreeMap::new(),
            orders: Vec::new(),
            next_order_id: 1,
        }
    }
}

impl Session {
    /// Look up a held position by symbol
    pub fn position(&self, symbol: &str) -> Option<&Position> {
        self.portfolio.iter().find(|p| p.symbol == symbol)
    }

    /// Look up a subscribed ticker by (already normalized) symbol
    pub fn ticker(&self, symbol: &str) -> Option<&Ticker> {
        self.tickers.get(symbol)
    }

    /// Tear down to the disconnected state.
    ///
    /// The order-id counter is deliberately left alone: ids are
    /// session-scoped to the engine's lifetime and never reused, even
    /// across reconnects.
    pub fn clear(&mut self) {
        self.connected = false;
        self.portfolio.clear();
        self.tickers.clear();
        self.orders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{OrderStatus, OrderType, Side};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_session_is_disconnected_and_empty() {
        let session = Session::default();
        assert!(!session.connected);
        assert!(session.portfolio.is_empty());
        assert!(session.tickers.is_empty());
        assert!(session.orders.is_empty());
        assert_eq!(session.next_order_id, 1);
    }

    #[test]
    fn test_clear_preserves_order_id_counter() {
        let mut session = Session::default();
        session.connected = true;
        session.portfolio.push(Position::new("AAPL", 100, dec!(150.00), dec!(175.25)));
        session
            .tickers
            .insert("MSFT".to_string(), Ticker::seeded("MSFT", dec!(300.00)));
        session.orders.push(Order {
            id: 1,
            symbol: "AAPL".to_string(),
            quantity: 10,
            side: Side::Buy,
            order_type: OrderType::Market,
            limit_price: None,
            status: OrderStatus::Submitted,
            created_at: Utc::now(),
        });
        session.next_order_id = 2;

        session.clear();

        assert_eq!(session, Session { next_order_id: 2, ..Session::default() });
    }

    #[test]
    fn test_position_and_ticker_lookup() {
        let mut session = Session::default();
        session.portfolio.push(Position::new("AAPL", 100, dec!(150.00), dec!(175.25)));
        session
            .tickers
            .insert("MSFT".to_string(), Ticker::seeded("MSFT", dec!(300.00)));

        assert!(session.position("AAPL").is_some());
        assert!(session.position("TSLA").is_none());
        assert!(session.ticker("MSFT").is_some());
        assert!(session.ticker("msft").is_none());
    }
}
