//! Trait for trend/seasonal decomposition.

use crate::model::{Decomposition, ForecastPoint};

/// Decomposes a series into a trend and seasonal offsets and projects it
/// forward.
pub trait Decomposer: Send + Sync {
    /// Decompose `values`, where `weeks[i]` is the position of `values[i]`
    /// within the seasonal cycle (1-based).
    fn decompose(&self, values: &[f64], weeks: &[u32]) -> Decomposition;

    /// Project `horizon` points past the last observed index of `decomposition`.
    fn forecast(&self, decomposition: &Decomposition, horizon: usize) -> Vec<ForecastPoint>;
}
