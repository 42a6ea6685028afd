//! Trait for series smoothing.

/// Smooths a series into one optional value per input point.
///
/// `None` marks points without enough history; callers render them as gaps.
/// The output is expected to match the input length; the pipeline treats
/// missing trailing entries as gaps.
pub trait Smoother: Send + Sync {
    fn smooth(&self, values: &[f64]) -> Vec<Option<f64>>;

    /// Number of points that contribute to each smoothed value.
    fn window(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl Smoother for Identity {
        fn smooth(&self, values: &[f64]) -> Vec<Option<f64>> {
            values.iter().copied().map(Some).collect()
        }

        fn window(&self) -> usize {
            1
        }
    }

    #[test]
    fn test_smoother_preserves_length() {
        let out = Identity.smooth(&[1.0, 2.0]);
        assert_eq!(out, vec![Some(1.0), Some(2.0)]);
        assert_eq!(Identity.window(), 1);
    }
}
