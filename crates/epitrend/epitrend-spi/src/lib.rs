//! Epitrend Service Provider Interface
//!
//! Defines the contracts, error type and data model shared by every stage of
//! the epitrend analytics engine.
//!
//! - [`OutlierDetector`], [`Smoother`], [`Decomposer`], [`LabelClassifier`]:
//!   seams between pipeline stages
//! - [`EpiError`]: the single error type, with the [`Result`] alias
//! - [`model`]: observations, derived records and summary types

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, LabelClassifier, OutlierDetector, Smoother};
pub use error::{EpiError, Result};
pub use model::{
    round2, AgeBucket, CategorySample, Decomposition, DerivedRecord, DerivedSeries,
    DistributionStats, ForecastPoint, GroupTotal, LinearTrend, Observation, OutlierFences,
    OutlierReport, PeriodKey, RecordSummary, SeriesEnvelope,
};
