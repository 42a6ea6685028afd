//! Linear trend, weekly seasonal offsets and forecasting.
//!
//! The series is modelled as an ordinary-least-squares line over the integer
//! index `t = 0..n-1` plus one additive offset per week of a repeating cycle.
//! The offset for a week is the mean of `value - overall_mean` over every
//! point that falls on that week, across all years present.

use epitrend_api::AnalysisOptions;
use epitrend_spi::{Decomposer, Decomposition, EpiError, ForecastPoint, LinearTrend, Result};

use crate::stats::mean;

/// Closed-form OLS fit of `values` on their index.
///
/// Degenerate inputs fall back to a flat line: through 0 when empty, through
/// the only point for a single value, and through the mean when the
/// denominator vanishes.
pub fn linear_trend(values: &[f64]) -> LinearTrend {
    match values {
        [] => return LinearTrend::new(0.0, 0.0),
        [only] => return LinearTrend::new(*only, 0.0),
        _ => {}
    }

    let n = values.len() as f64;
    let sum_t: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_tt: f64 = (0..values.len()).map(|i| (i as f64).powi(2)).sum();
    let sum_ty: f64 = values.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    let denominator = n * sum_tt - sum_t * sum_t;
    if denominator == 0.0 {
        return LinearTrend::new(sum_y / n, 0.0);
    }

    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_t) / n;
    LinearTrend::new(intercept, slope)
}

/// Mean residual from the overall mean for each week `1..=period`.
///
/// Weeks with no points get 0. Points whose week lies outside the cycle are
/// ignored.
pub fn seasonal_offsets(values: &[f64], weeks: &[u32], period: usize) -> Vec<f64> {
    let Some(overall) = mean(values) else {
        return vec![0.0; period];
    };

    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (&value, &week) in values.iter().zip(weeks) {
        let Some(slot) = (week as usize).checked_sub(1).filter(|&i| i < period) else {
            continue;
        };
        sums[slot] += value - overall;
        counts[slot] += 1;
    }

    sums.iter()
        .zip(&counts)
        .map(|(&sum, &count)| if count == 0 { 0.0 } else { sum / count as f64 })
        .collect()
}

/// Week following `last_week` by `step` weeks, wrapped into `1..=period`.
pub fn advance_week(last_week: u32, step: usize, period: usize) -> u32 {
    let period = period.max(1);
    ((last_week as usize).saturating_sub(1) + step) as u32 % period as u32 + 1
}

// ============================================================================
// Seasonal Trend Decomposer
// ============================================================================

/// Linear trend plus weekly seasonal offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalTrendDecomposer {
    seasonal_period: usize,
}

impl SeasonalTrendDecomposer {
    /// Create a decomposer for a cycle of `seasonal_period` weeks.
    pub fn new(seasonal_period: usize) -> Result<Self> {
        if seasonal_period == 0 {
            return Err(EpiError::invalid("seasonal_period", "must be at least 1"));
        }
        Ok(Self { seasonal_period })
    }

    /// Create from analysis options.
    pub fn from_options(options: &AnalysisOptions) -> Result<Self> {
        Self::new(options.seasonal_period)
    }

    pub fn seasonal_period(&self) -> usize {
        self.seasonal_period
    }
}

impl Default for SeasonalTrendDecomposer {
    fn default() -> Self {
        Self {
            seasonal_period: epitrend_api::DEFAULT_SEASONAL_PERIOD,
        }
    }
}

impl Decomposer for SeasonalTrendDecomposer {
    fn decompose(&self, values: &[f64], weeks: &[u32]) -> Decomposition {
        Decomposition {
            trend: linear_trend(values),
            seasonal_offsets: seasonal_offsets(values, weeks, self.seasonal_period),
            weeks: weeks.to_vec(),
        }
    }

    fn forecast(&self, decomposition: &Decomposition, horizon: usize) -> Vec<ForecastPoint> {
        let Some(&last_week) = decomposition.weeks.last() else {
            return Vec::new();
        };
        let last_t = decomposition.weeks.len() - 1;
        let period = decomposition.seasonal_period();

        (1..=horizon)
            .map(|k| {
                let t = last_t + k;
                let week = advance_week(last_week, k, period);
                ForecastPoint {
                    t,
                    week,
                    value: decomposition.seasonal_trend_at(t, week),
                }
            })
            .collect()
    }
}
