//! Summary distribution statistics.

use serde::{Deserialize, Serialize};

use super::round2;

/// Distribution summary over a numeric sample.
///
/// `std_dev` is the population standard deviation. Percentiles use linear
/// interpolation between order statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

impl DistributionStats {
    /// Interquartile range (`p75 - p25`).
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }

    /// Copy rounded to two decimals for display.
    pub fn rounded(&self) -> Self {
        Self {
            min: round2(self.min),
            max: round2(self.max),
            mean: round2(self.mean),
            std_dev: round2(self.std_dev),
            p25: round2(self.p25),
            p50: round2(self.p50),
            p75: round2(self.p75),
        }
    }
}
