//! Paperdesk Core Domain
//!
//! Pure domain types for the paperdesk session simulator.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Order, OrderDraft, OrderId, OrderStatus, OrderType, Position, Session, Side, Ticker,
};
pub use values::{PRICE_DP, Price, Quantity, Symbol, Timestamp, round_money};
