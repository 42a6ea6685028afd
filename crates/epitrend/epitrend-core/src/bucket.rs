//! Age-group label bucketing.
//!
//! Free-text age-group labels from external datasets are classified into
//! [`AgeBucket`]s by the first matching rule:
//!
//! 1. empty or `"unknown"` → none
//! 2. trailing `"<N>+"` with `N >= 60` → seniors
//! 3. `"<N> years old and above"` with `N >= 60` → seniors
//! 4. `"<low>-<high>"` (or `"<low> to <high>"`) → children if `high <= 11`,
//!    adults if `12 <= low` and `high <= 59`, seniors if `low >= 60`
//! 5. anything else → none
//!
//! Unmatched labels are excluded from bucketed aggregates, never guessed.

use std::sync::LazyLock;

use epitrend_spi::{AgeBucket, CategorySample, DistributionStats, LabelClassifier};
use regex::Regex;

use crate::stats::stats;

const SENIOR_AGE: u32 = 60;
const CHILD_MAX_AGE: u32 = 11;
const ADULT_MIN_AGE: u32 = 12;
const ADULT_MAX_AGE: u32 = 59;

static OPEN_ENDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*\+$").expect("open-ended pattern is valid"));

static AND_ABOVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s+years?\s+old\s+and\s+above")
        .expect("and-above pattern is valid")
});

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:-|–|to)\s*(\d+)").expect("range pattern is valid")
});

fn capture_age(re: &Regex, label: &str) -> Option<u32> {
    re.captures(label).and_then(|caps| caps[1].parse().ok())
}

/// Classify an age-group label.
pub fn bucket(label: &str) -> Option<AgeBucket> {
    let label = label.trim();
    if label.is_empty() || label.eq_ignore_ascii_case("unknown") {
        return None;
    }

    if capture_age(&OPEN_ENDED, label).is_some_and(|n| n >= SENIOR_AGE) {
        return Some(AgeBucket::Seniors);
    }

    if capture_age(&AND_ABOVE, label).is_some_and(|n| n >= SENIOR_AGE) {
        return Some(AgeBucket::Seniors);
    }

    let caps = RANGE.captures(label)?;
    let low: u32 = caps[1].parse().ok()?;
    let high: u32 = caps[2].parse().ok()?;
    if high <= CHILD_MAX_AGE {
        Some(AgeBucket::Children)
    } else if low >= ADULT_MIN_AGE && high <= ADULT_MAX_AGE {
        Some(AgeBucket::Adults)
    } else if low >= SENIOR_AGE {
        Some(AgeBucket::Seniors)
    } else {
        None
    }
}

/// Entry point matching the exported `bucket_label` operation.
pub fn bucket_label(label: &str) -> Option<AgeBucket> {
    bucket(label)
}

/// Rule-based classifier for age-group labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeGroupClassifier;

impl AgeGroupClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl LabelClassifier for AgeGroupClassifier {
    fn classify(&self, label: &str) -> Option<AgeBucket> {
        bucket(label)
    }
}

/// Group `(label, value)` records by age bucket.
pub fn bucket_sample<I, S>(records: I) -> CategorySample
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    bucket_sample_with(&AgeGroupClassifier, records)
}

/// Group `(label, value)` records using a custom classifier.
pub fn bucket_sample_with<C, I, S>(classifier: &C, records: I) -> CategorySample
where
    C: LabelClassifier + ?Sized,
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let mut sample = CategorySample::new();
    for (label, value) in records {
        sample.push(classifier.classify(label.as_ref()), value);
    }
    if sample.excluded() > 0 {
        tracing::debug!(
            excluded = sample.excluded(),
            assigned = sample.assigned(),
            "unrecognized category labels excluded"
        );
    }
    sample
}

/// Distribution statistics per bucket in canonical order.
///
/// Buckets without values report `None`.
pub fn bucket_summaries(sample: &CategorySample) -> Vec<(AgeBucket, Option<DistributionStats>)> {
    AgeBucket::ALL
        .iter()
        .map(|&b| (b, stats(sample.values(b))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(bucket(""), None);
        assert_eq!(bucket("   "), None);
        assert_eq!(bucket("Unknown"), None);
        assert_eq!(bucket(" UNKNOWN "), None);
    }

    #[test]
    fn test_open_ended() {
        assert_eq!(bucket("60+"), Some(AgeBucket::Seniors));
        assert_eq!(bucket("80 +"), Some(AgeBucket::Seniors));
        // Falls through to the remaining rules and matches none of them.
        assert_eq!(bucket("18+"), None);
    }

    #[test]
    fn test_and_above() {
        assert_eq!(bucket("60 years old and above"), Some(AgeBucket::Seniors));
        assert_eq!(bucket("65 Years Old and Above"), Some(AgeBucket::Seniors));
        assert_eq!(bucket("18 years old and above"), None);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(bucket("5 to 11"), Some(AgeBucket::Children));
        assert_eq!(bucket("0-4"), Some(AgeBucket::Children));
        assert_eq!(bucket("12-17"), Some(AgeBucket::Adults));
        assert_eq!(bucket("18 - 59 years"), Some(AgeBucket::Adults));
        assert_eq!(bucket("60-69"), Some(AgeBucket::Seniors));
    }

    #[test]
    fn test_straddling_range_is_unmatched() {
        assert_eq!(bucket("10-20"), None);
        assert_eq!(bucket("50-64"), None);
    }

    #[test]
    fn test_free_text_is_unmatched() {
        assert_eq!(bucket("adults"), None);
        assert_eq!(bucket("all ages"), None);
    }

    #[test]
    fn test_bucket_sample_excludes_unmatched() {
        let sample = bucket_sample(vec![
            ("5 to 11", 10.0),
            ("12-17", 20.0),
            ("60+", 30.0),
            ("unknown", 1000.0),
            ("", 5.0),
        ]);
        assert_eq!(sample.values(AgeBucket::Children), &[10.0]);
        assert_eq!(sample.values(AgeBucket::Adults), &[20.0]);
        assert_eq!(sample.values(AgeBucket::Seniors), &[30.0]);
        assert_eq!(sample.excluded(), 2);
    }

    #[test]
    fn test_bucket_summaries_cover_all_buckets() {
        let sample = bucket_sample(vec![("60+", 4.0), ("70-79", 6.0)]);
        let summaries = bucket_summaries(&sample);
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0], (AgeBucket::Children, None));
        assert!(summaries[1].1.is_none());
        assert_eq!(summaries[2].1.unwrap().mean, 5.0);
    }

    #[test]
    fn test_classifier_trait() {
        let classifier: &dyn LabelClassifier = &AgeGroupClassifier::new();
        assert_eq!(classifier.classify("75+"), Some(AgeBucket::Seniors));
    }
}
