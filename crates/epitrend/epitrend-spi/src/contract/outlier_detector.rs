//! Outlier detector trait definition.

use crate::model::OutlierReport;

/// Outlier detector trait.
///
/// Implementations compute their statistics once over the whole input and
/// flag each point against them. An empty input yields an empty report.
/// Reports should carry one z-score and one flag per input point; the
/// pipeline leaves missing points unscored and unflagged.
pub trait OutlierDetector: Send + Sync {
    /// Flag outliers in `values`.
    fn detect(&self, values: &[f64]) -> OutlierReport;

    /// Indices of flagged points.
    fn outlier_indices(&self, values: &[f64]) -> Vec<usize> {
        self.detect(values).outlier_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flags everything strictly above a fixed limit.
    struct ThresholdDetector(f64);

    impl OutlierDetector for ThresholdDetector {
        fn detect(&self, values: &[f64]) -> OutlierReport {
            OutlierReport::new(
                None,
                vec![0.0; values.len()],
                values.iter().map(|&v| v > self.0).collect(),
            )
        }
    }

    #[test]
    fn test_default_outlier_indices() {
        let detector = ThresholdDetector(10.0);
        assert_eq!(detector.outlier_indices(&[1.0, 11.0, 5.0, 12.0]), vec![1, 3]);
    }

    #[test]
    fn test_detector_as_trait_object() {
        let detector: Box<dyn OutlierDetector> = Box::new(ThresholdDetector(0.0));
        assert!(detector.detect(&[]).is_empty());
    }
}
