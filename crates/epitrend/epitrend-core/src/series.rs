//! Chronologically ordered series of observations.

use std::collections::HashSet;

use epitrend_spi::{Observation, PeriodKey, RecordSummary};

use crate::period::observation_key;

/// An observation paired with its derived chronological key.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub key: PeriodKey,
    pub observation: Observation,
}

/// Observations for one metric, unique by label and sorted by period key.
///
/// Immutable once built; analysis produces new records instead of
/// modifying it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Build a series from observations in source order.
    ///
    /// A repeated label keeps its first occurrence. Points with equal keys
    /// keep their source order.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut seen = HashSet::new();
        let mut points: Vec<SeriesPoint> = Vec::new();
        for observation in observations {
            if !seen.insert(observation.period_label.clone()) {
                tracing::debug!(
                    label = %observation.period_label,
                    "dropping duplicate period label"
                );
                continue;
            }
            points.push(SeriesPoint {
                key: observation_key(&observation),
                observation,
            });
        }
        points.sort_by_key(|p| p.key);
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.points.iter().map(|p| &p.observation)
    }

    /// Period labels in chronological order.
    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(|o| o.period_label.as_str()).collect()
    }

    /// Values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.iter().map(|o| o.value).collect()
    }

    pub fn keys(&self) -> Vec<PeriodKey> {
        self.points.iter().map(|p| p.key).collect()
    }

    /// The last `n` points (all of them if the series is shorter).
    pub fn recent(&self, n: usize) -> Series {
        let start = self.points.len().saturating_sub(n);
        Series {
            points: self.points[start..].to_vec(),
        }
    }

    /// Total, average and count of the values.
    pub fn summary(&self) -> RecordSummary {
        RecordSummary::from_values(&self.values())
    }
}

impl FromIterator<Observation> for Series {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::from_observations(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly() -> Vec<Observation> {
        vec![
            Observation::new("Mar 2022", 30.0),
            Observation::new("Jan 2022", 10.0),
            Observation::new("Feb 2022", 20.0),
        ]
    }

    #[test]
    fn test_sorted_by_key() {
        let series = Series::from_observations(monthly());
        assert_eq!(series.labels(), vec!["Jan 2022", "Feb 2022", "Mar 2022"]);
        assert_eq!(series.values(), vec![10.0, 20.0, 30.0]);
        assert!(series.keys().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_duplicate_labels_keep_first() {
        let mut obs = monthly();
        obs.push(Observation::new("Jan 2022", 999.0));
        let series: Series = obs.into_iter().collect();
        assert_eq!(series.len(), 3);
        assert_eq!(series.values()[0], 10.0);
    }

    #[test]
    fn test_year_grouping_orders_weeks_across_years() {
        let series = Series::from_observations(vec![
            Observation::new("W01", 5.0).with_year(2023),
            Observation::new("W52", 4.0).with_year(2022),
        ]);
        assert_eq!(series.values(), vec![4.0, 5.0]);
    }

    #[test]
    fn test_recent() {
        let series = Series::from_observations(monthly());
        assert_eq!(series.recent(2).labels(), vec!["Feb 2022", "Mar 2022"]);
        assert_eq!(series.recent(10).len(), 3);
        assert!(series.recent(0).is_empty());
    }

    #[test]
    fn test_summary() {
        let summary = Series::from_observations(monthly()).summary();
        assert_eq!(summary.total, 60.0);
        assert_eq!(summary.average, 20.0);
        assert_eq!(summary.record_count, 3);
    }

    #[test]
    fn test_empty() {
        let series = Series::from_observations(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.summary().record_count, 0);
    }
}
