//! Linear trend and seasonal decomposition model.

use serde::{Deserialize, Serialize};

/// Fitted line `value = intercept + slope * t` over the integer index `t`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearTrend {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Trend value at index `t`.
    pub fn at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

/// Result of decomposing a series into a linear trend plus one additive
/// offset per week of the seasonal cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    pub trend: LinearTrend,
    /// Offset for week `w` is stored at `w - 1`.
    pub seasonal_offsets: Vec<f64>,
    /// Week number assigned to each observed point.
    pub weeks: Vec<u32>,
}

impl Decomposition {
    /// Length of the seasonal cycle.
    pub fn seasonal_period(&self) -> usize {
        self.seasonal_offsets.len()
    }

    /// Seasonal offset for a week number; 0 outside the cycle.
    pub fn offset(&self, week: u32) -> f64 {
        week.checked_sub(1)
            .and_then(|i| self.seasonal_offsets.get(i as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Trend plus seasonal offset at index `t` falling on `week`.
    pub fn seasonal_trend_at(&self, t: usize, week: u32) -> f64 {
        self.trend.at(t as f64) + self.offset(week)
    }

    /// Linear trend evaluated at every observed index.
    pub fn fitted_trend(&self) -> Vec<f64> {
        (0..self.weeks.len()).map(|t| self.trend.at(t as f64)).collect()
    }

    /// Seasonal trend evaluated at every observed index.
    pub fn fitted_seasonal_trend(&self) -> Vec<f64> {
        self.weeks
            .iter()
            .enumerate()
            .map(|(t, &week)| self.seasonal_trend_at(t, week))
            .collect()
    }
}

/// A projected point beyond the observed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Index on the same axis as the observed points.
    pub t: usize,
    pub week: u32,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn decomposition() -> Decomposition {
        Decomposition {
            trend: LinearTrend::new(10.0, 2.0),
            seasonal_offsets: vec![1.0, -1.0, 0.5, 0.0],
            weeks: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_linear_trend_at() {
        let trend = LinearTrend::new(1.0, 1.0);
        assert_eq!(trend.at(0.0), 1.0);
        assert_eq!(trend.at(4.0), 5.0);

        let trend = LinearTrend::new(138.8, 0.1);
        assert_relative_eq!(trend.at(7.0), 139.5, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_out_of_cycle_is_zero() {
        let d = decomposition();
        assert_eq!(d.offset(0), 0.0);
        assert_eq!(d.offset(5), 0.0);
        assert_eq!(d.offset(2), -1.0);
        assert_eq!(d.seasonal_period(), 4);
    }

    #[test]
    fn test_fitted_values() {
        let d = decomposition();
        assert_eq!(d.fitted_trend(), vec![10.0, 12.0, 14.0]);
        assert_eq!(d.fitted_seasonal_trend(), vec![11.0, 11.0, 14.5]);
    }

    #[test]
    fn test_seasonal_trend_at_fractional_offset() {
        let d = Decomposition {
            trend: LinearTrend::new(0.1, 0.2),
            seasonal_offsets: vec![0.3, -0.7],
            weeks: vec![1, 2],
        };
        assert_relative_eq!(d.seasonal_trend_at(1, 1), 0.6, epsilon = 1e-12);
        assert_relative_eq!(d.seasonal_trend_at(3, 2), 0.0, epsilon = 1e-12);
    }
}
