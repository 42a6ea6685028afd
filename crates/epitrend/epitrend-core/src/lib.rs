//! Epitrend Core
//!
//! Implementations of the epitrend analytics engine:
//!
//! - [`period`]: chronological keys for period labels
//! - [`series`]: ordered, de-duplicated series
//! - [`stats`]: percentiles, variance, summary statistics
//! - [`smoothing`]: moving average and growth rates
//! - [`outlier`]: IQR-fence plus z-score outlier detection
//! - [`trend`]: linear trend, seasonal offsets, forecasting
//! - [`bucket`]: age-group label classification
//! - [`aggregate`]: group totals
//! - [`pipeline`], [`batch`]: end-to-end series analysis
//!
//! Everything here is a pure function of its inputs; nothing is cached
//! between calls.

pub mod aggregate;
pub mod batch;
pub mod bucket;
pub mod outlier;
pub mod period;
pub mod pipeline;
pub mod series;
pub mod smoothing;
pub mod stats;
pub mod trend;

// Re-export SPI traits for implementations
pub use epitrend_spi::{
    Decomposer, EpiError, LabelClassifier, OutlierDetector, Result, Smoother,
};

// Re-export main types and operations
pub use aggregate::group_totals;
pub use batch::analyze_many;
pub use bucket::{bucket, bucket_label, bucket_sample, bucket_summaries, AgeGroupClassifier};
pub use outlier::FenceZScoreDetector;
pub use period::{order_key, order_key_in_year, sort_series};
pub use pipeline::{analyze_envelope, analyze_series, SeriesAnalyzer};
pub use series::{Series, SeriesPoint};
pub use smoothing::{growth_rates, moving_average, TrailingMovingAverage};
pub use stats::{percentile, stats, summarize};
pub use trend::{linear_trend, seasonal_offsets, SeasonalTrendDecomposer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bucket::{bucket_label, AgeGroupClassifier};
    pub use crate::outlier::FenceZScoreDetector;
    pub use crate::pipeline::{analyze_series, SeriesAnalyzer};
    pub use crate::series::Series;
    pub use crate::smoothing::TrailingMovingAverage;
    pub use crate::stats::summarize;
    pub use crate::trend::SeasonalTrendDecomposer;
    pub use epitrend_api::AnalysisOptions;
    pub use epitrend_spi::{
        AgeBucket, Decomposer, DerivedRecord, DerivedSeries, DistributionStats, EpiError,
        LabelClassifier, Observation, OutlierDetector, Result, Smoother,
    };
}
