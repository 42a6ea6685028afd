//! Moving average and period-over-period growth.

use epitrend_api::AnalysisOptions;
use epitrend_spi::{EpiError, Result, Smoother};

/// Trailing moving average, inclusive of the current point.
///
/// The first `window - 1` points have no value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailingMovingAverage {
    window: usize,
}

impl TrailingMovingAverage {
    /// Create a moving average over `window` points.
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(EpiError::invalid("window", "must be at least 1"));
        }
        Ok(Self { window })
    }

    /// Create from analysis options.
    pub fn from_options(options: &AnalysisOptions) -> Result<Self> {
        Self::new(options.window)
    }
}

impl Default for TrailingMovingAverage {
    fn default() -> Self {
        Self {
            window: epitrend_api::DEFAULT_WINDOW,
        }
    }
}

impl Smoother for TrailingMovingAverage {
    fn smooth(&self, values: &[f64]) -> Vec<Option<f64>> {
        moving_average(values, self.window)
    }

    fn window(&self) -> usize {
        self.window
    }
}

/// Trailing moving average of `values` over `window` points.
///
/// A zero window yields no values at all.
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    let mut result = vec![None; (window - 1).min(values.len())];
    result.extend(
        values
            .windows(window)
            .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
    );
    result
}

/// Percent change from the previous point.
///
/// The first point is 0, and so is any point whose predecessor is 0.
pub fn growth_rates(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(values.len());
    result.push(0.0);
    result.extend(values.windows(2).map(|w| {
        if w[0] == 0.0 {
            0.0
        } else {
            (w[1] - w[0]) / w[0] * 100.0
        }
    }));
    result
}
