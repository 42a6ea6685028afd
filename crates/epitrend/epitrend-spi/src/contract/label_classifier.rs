//! Trait for free-text category classification.

use crate::model::AgeBucket;

/// Maps a free-text label to a canonical bucket.
///
/// Labels that match no rule return `None` and must be excluded from
/// bucketed aggregates rather than guessed into a bucket.
pub trait LabelClassifier: Send + Sync {
    fn classify(&self, label: &str) -> Option<AgeBucket>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysAdults;

    impl LabelClassifier for AlwaysAdults {
        fn classify(&self, _label: &str) -> Option<AgeBucket> {
            Some(AgeBucket::Adults)
        }
    }

    #[test]
    fn test_classifier_as_trait_object() {
        let c: &dyn LabelClassifier = &AlwaysAdults;
        assert_eq!(c.classify("anything"), Some(AgeBucket::Adults));
    }
}
