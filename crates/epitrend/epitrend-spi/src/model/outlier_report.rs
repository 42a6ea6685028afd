//! Outlier detection result types.

use serde::{Deserialize, Serialize};

/// Fences and moments computed once per detection call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierFences {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// `q1 - k * iqr`
    pub lower: f64,
    /// `q3 + k * iqr`
    pub upper: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl OutlierFences {
    /// Whether `value` lies strictly outside the IQR fences.
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Outlier detection result, one entry per input point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Fences, absent for an empty input.
    pub fences: Option<OutlierFences>,
    /// Unrounded z-score for each point.
    pub z_scores: Vec<f64>,
    /// Boolean mask of flagged points.
    pub is_outlier: Vec<bool>,
}

impl OutlierReport {
    /// Create a new outlier report.
    pub fn new(fences: Option<OutlierFences>, z_scores: Vec<f64>, is_outlier: Vec<bool>) -> Self {
        Self {
            fences,
            z_scores,
            is_outlier,
        }
    }

    /// Report for an empty input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of points covered by the report.
    pub fn len(&self) -> usize {
        self.is_outlier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_outlier.is_empty()
    }

    /// Get indices of flagged points.
    pub fn outlier_indices(&self) -> Vec<usize> {
        self.is_outlier
            .iter()
            .enumerate()
            .filter_map(|(i, &flagged)| if flagged { Some(i) } else { None })
            .collect()
    }

    /// Count of flagged points.
    pub fn outlier_count(&self) -> usize {
        self.is_outlier.iter().filter(|&&x| x).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlier_indices() {
        let report = OutlierReport::new(None, vec![0.0; 4], vec![false, true, false, true]);
        assert_eq!(report.outlier_indices(), vec![1, 3]);
        assert_eq!(report.outlier_count(), 2);
        assert_eq!(report.len(), 4);
    }

    #[test]
    fn test_empty_report() {
        let report = OutlierReport::empty();
        assert!(report.is_empty());
        assert!(report.fences.is_none());
        assert_eq!(report.outlier_count(), 0);
    }

    #[test]
    fn test_fences_are_strict() {
        let fences = OutlierFences {
            q1: 10.0,
            q3: 20.0,
            iqr: 10.0,
            lower: -5.0,
            upper: 35.0,
            mean: 15.0,
            std_dev: 5.0,
        };
        assert!(!fences.is_outside(35.0));
        assert!(fences.is_outside(35.01));
        assert!(fences.is_outside(-5.5));
    }
}
