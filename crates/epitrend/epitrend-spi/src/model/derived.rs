//! Pipeline output records.

use serde::{Deserialize, Serialize};

use super::{LinearTrend, OutlierFences, RecordSummary};

/// One output row per observed period, plus forecast extension rows.
///
/// Every number is rounded to two decimals. Forecast rows carry no `value`
/// and no `moving_avg`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    pub period_label: String,
    pub value: Option<f64>,
    pub moving_avg: Option<f64>,
    pub growth_pct: Option<f64>,
    pub z_score: Option<f64>,
    pub iqr_lower: Option<f64>,
    pub iqr_upper: Option<f64>,
    pub is_outlier: bool,
    pub trend: Option<f64>,
    pub seasonal_trend: Option<f64>,
    pub is_forecast: bool,
}

/// Full result of analysing one series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedSeries {
    /// Observed rows in chronological order followed by forecast rows.
    pub records: Vec<DerivedRecord>,
    /// Unrounded fitted trend.
    pub trend: LinearTrend,
    /// Unrounded seasonal offset per week, week `w` at index `w - 1`.
    pub seasonal_offsets: Vec<f64>,
    /// Outlier fences, absent for an empty series.
    pub fences: Option<OutlierFences>,
    /// Number of observed (non-forecast) rows.
    pub observed_len: usize,
    /// Summary passed through from the input envelope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<RecordSummary>,
}

impl DerivedSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows backed by an observation.
    pub fn observed(&self) -> &[DerivedRecord] {
        &self.records[..self.split()]
    }

    /// Forecast extension rows.
    pub fn forecast(&self) -> &[DerivedRecord] {
        &self.records[self.split()..]
    }

    // `observed_len` may come from an untrusted document.
    fn split(&self) -> usize {
        self.observed_len.min(self.records.len())
    }

    /// Count of flagged observed rows.
    pub fn outlier_count(&self) -> usize {
        self.observed().iter().filter(|r| r.is_outlier).count()
    }

    /// Labels of flagged observed rows, in chronological order.
    pub fn outlier_labels(&self) -> Vec<&str> {
        self.observed()
            .iter()
            .filter(|r| r.is_outlier)
            .map(|r| r.period_label.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, outlier: bool, forecast: bool) -> DerivedRecord {
        DerivedRecord {
            period_label: label.to_string(),
            value: if forecast { None } else { Some(1.0) },
            is_outlier: outlier,
            is_forecast: forecast,
            ..Default::default()
        }
    }

    #[test]
    fn test_observed_and_forecast_split() {
        let series = DerivedSeries {
            records: vec![
                record("W01", false, false),
                record("W02", true, false),
                record("F1", false, true),
            ],
            observed_len: 2,
            ..Default::default()
        };
        assert_eq!(series.observed().len(), 2);
        assert_eq!(series.forecast().len(), 1);
        assert_eq!(series.outlier_count(), 1);
        assert_eq!(series.outlier_labels(), vec!["W02"]);
    }

    #[test]
    fn test_observed_len_past_records_is_clamped() {
        let series: DerivedSeries = serde_json::from_str(
            r#"{
                "records": [{
                    "period_label": "W01", "value": 1.0, "moving_avg": null,
                    "growth_pct": 0.0, "z_score": 0.0, "iqr_lower": null,
                    "iqr_upper": null, "is_outlier": true, "trend": null,
                    "seasonal_trend": null, "is_forecast": false
                }],
                "trend": {"intercept": 0.0, "slope": 0.0},
                "seasonal_offsets": [],
                "fences": null,
                "observed_len": 5
            }"#,
        )
        .unwrap();
        assert_eq!(series.observed().len(), 1);
        assert!(series.forecast().is_empty());
        assert_eq!(series.outlier_labels(), vec!["W01"]);
    }

    #[test]
    fn test_serializes_absent_fields_as_null() {
        let json = serde_json::to_value(record("F1", false, true)).unwrap();
        assert!(json["value"].is_null());
        assert!(json["moving_avg"].is_null());
        assert_eq!(json["is_forecast"], serde_json::Value::Bool(true));
    }
}
