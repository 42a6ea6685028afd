//! Outlier detector implementations.

use epitrend_api::AnalysisOptions;
use epitrend_spi::{EpiError, OutlierDetector, OutlierFences, OutlierReport, Result};

use crate::stats::{mean, percentile, sorted, std_dev};

// ============================================================================
// Fence + Z-Score Detector
// ============================================================================

/// Combined IQR-fence and z-score outlier detector.
///
/// Fences and moments are computed once over the whole input. A point is
/// flagged when it lies outside `[q1 - k*iqr, q3 + k*iqr]` OR its absolute
/// z-score reaches the threshold, so it only has to fail one test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FenceZScoreDetector {
    iqr_multiplier: f64,
    z_threshold: f64,
}

impl FenceZScoreDetector {
    /// Create a detector with the given fence multiplier and z-score threshold.
    pub fn new(iqr_multiplier: f64, z_threshold: f64) -> Result<Self> {
        if !iqr_multiplier.is_finite() || iqr_multiplier < 0.0 {
            return Err(EpiError::invalid("iqr_multiplier", "must be non-negative"));
        }
        if !z_threshold.is_finite() || z_threshold <= 0.0 {
            return Err(EpiError::invalid("z_threshold", "must be positive"));
        }
        Ok(Self {
            iqr_multiplier,
            z_threshold,
        })
    }

    /// Create from analysis options.
    pub fn from_options(options: &AnalysisOptions) -> Result<Self> {
        Self::new(options.iqr_multiplier, options.z_threshold)
    }

    pub fn iqr_multiplier(&self) -> f64 {
        self.iqr_multiplier
    }

    pub fn z_threshold(&self) -> f64 {
        self.z_threshold
    }

    /// Fences and moments for `values`, `None` when empty.
    pub fn fences(&self, values: &[f64]) -> Option<OutlierFences> {
        let sorted = sorted(values);
        let q1 = percentile(&sorted, 0.25)?;
        let q3 = percentile(&sorted, 0.75)?;
        let iqr = q3 - q1;
        Some(OutlierFences {
            q1,
            q3,
            iqr,
            lower: q1 - self.iqr_multiplier * iqr,
            upper: q3 + self.iqr_multiplier * iqr,
            mean: mean(values)?,
            std_dev: std_dev(values)?,
        })
    }
}

impl Default for FenceZScoreDetector {
    fn default() -> Self {
        Self {
            iqr_multiplier: epitrend_api::DEFAULT_IQR_MULTIPLIER,
            z_threshold: epitrend_api::DEFAULT_Z_THRESHOLD,
        }
    }
}

impl OutlierDetector for FenceZScoreDetector {
    fn detect(&self, values: &[f64]) -> OutlierReport {
        let Some(fences) = self.fences(values) else {
            return OutlierReport::empty();
        };

        let z_scores: Vec<f64> = values
            .iter()
            .map(|&x| {
                if fences.std_dev == 0.0 {
                    0.0
                } else {
                    (x - fences.mean) / fences.std_dev
                }
            })
            .collect();
        let is_outlier = values
            .iter()
            .zip(&z_scores)
            .map(|(&x, z)| fences.is_outside(x) || z.abs() >= self.z_threshold)
            .collect();

        OutlierReport::new(Some(fences), z_scores, is_outlier)
    }
}
