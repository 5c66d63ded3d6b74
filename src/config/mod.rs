//! Configuration for batch evaluation.

/// Configuration for the `BatchEvaluator`
///
/// Per-row evaluation is a table lookup and a division, so the parallel
/// path only pays off for large batches; the threshold keeps small batches
/// on the sequential path.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Whether to evaluate large batches across the rayon thread pool
    pub parallel: bool,
    /// Minimum number of rows before the parallel path is used
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 4096,
        }
    }
}

impl BatchConfig {
    /// Configuration that always evaluates sequentially
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel: false,
            parallel_threshold: usize::MAX,
        }
    }
}
