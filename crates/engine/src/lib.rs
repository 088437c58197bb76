//! Paperdesk Session Engine
//!
//! Models one client's simulated trading session: a portfolio of positions,
//! a set of subscribed price tickers, and a log of submitted orders, with a
//! periodic tick that perturbs prices while the session is connected.
//!
//! The engine is the single writer over the [`Session`] aggregate. Callers
//! issue commands (`connect`, `disconnect`, `subscribe_ticker`,
//! `unsubscribe_ticker`, `place_order`); observers read committed snapshots
//! through a watch channel and are notified on every mutation, including
//! each tick.
//!
//! [`Session`]: paperdesk_core::Session

// Application layer
pub mod application;

// Infrastructure layer
pub mod infrastructure;

// Cross-cutting concerns
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use application::SessionEngine;
pub use error::{EngineError, Result};
pub use infrastructure::RandomWalkNoise;
pub use model::{EngineConfig, default_seed_portfolio};
