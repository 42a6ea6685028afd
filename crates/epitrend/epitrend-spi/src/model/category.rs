//! Canonical age buckets and bucketed samples.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical age bucket. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBucket {
    /// 0 to 11 years.
    Children,
    /// 12 to 59 years.
    Adults,
    /// 60 years and above.
    Seniors,
}

impl AgeBucket {
    /// All buckets in canonical order.
    pub const ALL: [AgeBucket; 3] = [AgeBucket::Children, AgeBucket::Adults, AgeBucket::Seniors];

    /// Human-readable age range.
    pub fn range_label(&self) -> &'static str {
        match self {
            AgeBucket::Children => "0-11",
            AgeBucket::Adults => "12-59",
            AgeBucket::Seniors => "60+",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeBucket::Children => write!(f, "Children"),
            AgeBucket::Adults => write!(f, "Adults"),
            AgeBucket::Seniors => write!(f, "Seniors"),
        }
    }
}

/// Values grouped by age bucket.
///
/// Records whose label matched no bucket are counted in `excluded` and never
/// contribute to any bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySample {
    buckets: BTreeMap<AgeBucket, Vec<f64>>,
    excluded: usize,
}

impl CategorySample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to `bucket`, or count it as excluded when `bucket` is `None`.
    pub fn push(&mut self, bucket: Option<AgeBucket>, value: f64) {
        match bucket {
            Some(b) => self.buckets.entry(b).or_default().push(value),
            None => self.excluded += 1,
        }
    }

    /// Values assigned to `bucket`, empty if none were.
    pub fn values(&self, bucket: AgeBucket) -> &[f64] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of records that matched no bucket.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Number of records assigned to some bucket.
    pub fn assigned(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Non-empty buckets in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AgeBucket, &[f64])> {
        self.buckets.iter().map(|(b, v)| (*b, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
