//! Record-level aggregates shown next to the charts.

use serde::{Deserialize, Serialize};

/// Total, average and count for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub total: f64,
    pub average: f64,
    pub record_count: usize,
}

impl RecordSummary {
    /// Summarize raw counts. An empty input yields all zeros.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let total: f64 = values.iter().sum();
        Self {
            total,
            average: total / values.len() as f64,
            record_count: values.len(),
        }
    }
}

/// Summed value for one group (e.g. a region).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub group: String,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values() {
        let s = RecordSummary::from_values(&[10.0, 20.0, 30.0]);
        assert_eq!(s.total, 60.0);
        assert_eq!(s.average, 20.0);
        assert_eq!(s.record_count, 3);
    }

    #[test]
    fn test_from_values_empty() {
        assert_eq!(RecordSummary::from_values(&[]), RecordSummary::default());
    }
}
