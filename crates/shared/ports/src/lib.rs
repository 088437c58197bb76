//! Paperdesk Ports
//!
//! Port definitions (traits) for the paperdesk session simulator.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod noise;

pub use clock::Clock;
pub use noise::PriceNoise;
