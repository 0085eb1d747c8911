//! Randomness source for mock verification results

use std::fmt::Debug;

/// Source of uniform draws in `[0, 1)`
///
/// Implementations must be safe to share between concurrent requests. Draws
/// from different callers need not be ordered or correlated.
pub trait RandomSource: Send + Sync + Debug {
    /// Next uniform value in `[0, 1)`
    fn next_uniform(&self) -> f64;
}
