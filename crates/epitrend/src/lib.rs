//! # epitrend
//!
//! Time-series analytics for epidemiological dashboards.
//!
//! Turns period-labeled counts into smoothed trends, growth rates, outlier
//! flags, seasonal forecasts and distribution statistics.
//!
//! ## Example
//!
//! ```rust
//! use epitrend::{analyze_series, AnalysisOptions, Observation};
//!
//! let observations: Vec<Observation> = [100.0, 110.0, 90.0, 500.0, 95.0, 105.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| Observation::new(format!("2022-W{:02}", i + 1), v))
//!     .collect();
//!
//! let derived = analyze_series(observations, &AnalysisOptions::default()).unwrap();
//! assert_eq!(derived.outlier_labels(), vec!["2022-W04"]);
//! assert_eq!(derived.forecast().len(), 8);
//! ```

pub use epitrend_facade::*;
