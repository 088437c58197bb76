/// Port for the simulation's randomness
///
/// The price-perturbation math only ever needs uniform draws, so the port
/// is a single sampling method. Implementations should be seedable so a
/// whole simulation run can be replayed in tests.
pub trait PriceNoise: Send {
    /// Draw a uniform sample from `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Get the source's name/identifier for debugging
    fn name(&self) -> &str {
        "PriceNoise"
    }
}
