//! Raw input records.

use serde::{Deserialize, Serialize};

use super::RecordSummary;

/// Chronological sort key derived from a period label.
///
/// Unparseable labels map to [`PeriodKey::UNPARSEABLE`] and therefore sort first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PeriodKey(pub i64);

impl PeriodKey {
    /// Key assigned to labels that match no known shape.
    pub const UNPARSEABLE: PeriodKey = PeriodKey(0);

    /// Raw key value.
    pub fn value(self) -> i64 {
        self.0
    }
}

/// A single period-labeled count.
///
/// The API layer delivers these as `{ "period_label": ..., "count": ... }`;
/// `period`/`date` and `count` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Period label, e.g. `"Jan 2022"` or `"2022-W05"`.
    #[serde(alias = "period", alias = "date")]
    pub period_label: String,
    /// Year grouping for week labels, when the source supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Observed count.
    #[serde(alias = "count")]
    pub value: f64,
}

impl Observation {
    /// Create an observation without a year grouping.
    pub fn new(period_label: impl Into<String>, value: f64) -> Self {
        Self {
            period_label: period_label.into(),
            year: None,
            value,
        }
    }

    /// Attach the year grouping used to order week labels.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Records for one metric as delivered by the data API, optionally wrapped
/// with a precomputed summary that is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesEnvelope {
    pub records: Vec<Observation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<RecordSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_key_ordering() {
        assert!(PeriodKey::UNPARSEABLE < PeriodKey(1));
        assert!(PeriodKey(24265) < PeriodKey(24266));
        assert_eq!(PeriodKey::default(), PeriodKey::UNPARSEABLE);
    }

    #[test]
    fn test_observation_accepts_count_alias() {
        let obs: Observation =
            serde_json::from_str(r#"{"period_label": "Jan 2022", "count": 12}"#).unwrap();
        assert_eq!(obs, Observation::new("Jan 2022", 12.0));
    }

    #[test]
    fn test_observation_with_year() {
        let obs = Observation::new("W05", 3.0).with_year(2022);
        assert_eq!(obs.year, Some(2022));
    }

    #[test]
    fn test_envelope_summary_is_optional() {
        let env: SeriesEnvelope =
            serde_json::from_str(r#"{"records": [{"period": "2022-W01", "value": 1}]}"#).unwrap();
        assert_eq!(env.records.len(), 1);
        assert!(env.summary.is_none());
    }
}
