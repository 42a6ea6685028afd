//! Data models for epitrend.
//!
//! This module contains the data structures passed between pipeline stages
//! and handed back to callers.

mod category;
mod decomposition;
mod derived;
mod distribution;
mod observation;
mod outlier_report;
mod summary;
mod utils;

pub use category::{AgeBucket, CategorySample};
pub use decomposition::{Decomposition, ForecastPoint, LinearTrend};
pub use derived::{DerivedRecord, DerivedSeries};
pub use distribution::DistributionStats;
pub use observation::{Observation, PeriodKey, SeriesEnvelope};
pub use outlier_report::{OutlierFences, OutlierReport};
pub use summary::{GroupTotal, RecordSummary};
pub use utils::{round2, round_to};
