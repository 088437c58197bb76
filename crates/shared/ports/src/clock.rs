use paperdesk_core::Timestamp;

/// Port for time abstraction
///
/// Lets the engine stamp orders from different time sources:
/// - Real wall-clock time in production
/// - A manually advanced clock for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
