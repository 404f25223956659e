//! Benchmark configuration.

use const_default::ConstDefault;

/// The number of timed writes and appends performed by default.
pub const DEFAULT_ITERATIONS: i32 = 100_000;

/// Settings for a [`BenchmarkRunner`](crate::BenchmarkRunner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    iterations: i32,
}

impl RunConfig {
    /// Create a configuration performing `iterations` timed operations per
    /// sequence. Negative counts perform no iterations.
    #[inline]
    pub const fn with_iterations(iterations: i32) -> Self {
        Self { iterations }
    }

    #[inline]
    pub const fn iterations(&self) -> i32 {
        self.iterations
    }
}

impl ConstDefault for RunConfig {
    const DEFAULT: Self = Self::with_iterations(DEFAULT_ITERATIONS);
}

impl Default for RunConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
