//! Paperdesk Clock Infrastructure
//!
//! Time sources behind the [`Clock`] port:
//!
//! - [`SystemClock`] - real wall-clock time for normal runs
//! - [`ManualClock`] - frozen time that only moves when explicitly
//!   advanced, for deterministic tests
//!
//! ## Usage
//!
//! ```ignore
//! use paperdesk_clock::{ManualClock, SystemClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::starting_now();
//! clock.advance(Duration::seconds(5));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use paperdesk_ports::Clock;
