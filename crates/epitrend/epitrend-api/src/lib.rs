//! Epitrend API
//!
//! Analysis options, their builder, and parsing of the JSON documents the
//! data API delivers.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use epitrend_spi::{
    AgeBucket, CategorySample, DerivedRecord, DerivedSeries, DistributionStats, EpiError,
    GroupTotal, LinearTrend, Observation, OutlierFences, PeriodKey, RecordSummary, Result,
    SeriesEnvelope,
};

/// Default moving-average width.
pub const DEFAULT_WINDOW: usize = 4;
/// Default absolute z-score at which a point is flagged.
pub const DEFAULT_Z_THRESHOLD: f64 = 2.0;
/// Default IQR fence multiplier.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;
/// Default number of forecast points.
pub const DEFAULT_FORECAST_HORIZON: usize = 8;
/// Default seasonal cycle length, in weeks.
pub const DEFAULT_SEASONAL_PERIOD: usize = 52;

// ============================================================================
// Analysis Options
// ============================================================================

/// Options for `analyze_series`.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Moving-average width (default: 4).
    pub window: usize,
    /// Absolute z-score at which a point is flagged (default: 2.0).
    pub z_threshold: f64,
    /// IQR fence multiplier (default: 1.5).
    pub iqr_multiplier: f64,
    /// Number of forecast points appended after the series (default: 8).
    pub forecast_horizon: usize,
    /// Seasonal cycle length in weeks (default: 52).
    pub seasonal_period: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            z_threshold: DEFAULT_Z_THRESHOLD,
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            forecast_horizon: DEFAULT_FORECAST_HORIZON,
            seasonal_period: DEFAULT_SEASONAL_PERIOD,
        }
    }
}

impl AnalysisOptions {
    /// Start a builder from the defaults.
    pub fn builder() -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::new()
    }

    /// Parse options from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| EpiError::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check every option is usable.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(EpiError::invalid("window", "must be at least 1"));
        }
        if !self.z_threshold.is_finite() || self.z_threshold <= 0.0 {
            return Err(EpiError::invalid("z_threshold", "must be positive"));
        }
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier < 0.0 {
            return Err(EpiError::invalid("iqr_multiplier", "must be non-negative"));
        }
        if self.seasonal_period == 0 {
            return Err(EpiError::invalid("seasonal_period", "must be at least 1"));
        }
        Ok(())
    }
}

/// Builder for AnalysisOptions.
#[derive(Debug, Default)]
pub struct AnalysisOptionsBuilder {
    window: Option<usize>,
    z_threshold: Option<f64>,
    iqr_multiplier: Option<f64>,
    forecast_horizon: Option<usize>,
    seasonal_period: Option<usize>,
}

impl AnalysisOptionsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the moving-average width.
    pub fn window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    /// Set the z-score threshold.
    pub fn z_threshold(mut self, threshold: f64) -> Self {
        self.z_threshold = Some(threshold);
        self
    }

    /// Set the IQR fence multiplier.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Set the forecast horizon.
    pub fn forecast_horizon(mut self, horizon: usize) -> Self {
        self.forecast_horizon = Some(horizon);
        self
    }

    /// Set the seasonal cycle length.
    pub fn seasonal_period(mut self, period: usize) -> Self {
        self.seasonal_period = Some(period);
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<AnalysisOptions> {
        let defaults = AnalysisOptions::default();
        let options = AnalysisOptions {
            window: self.window.unwrap_or(defaults.window),
            z_threshold: self.z_threshold.unwrap_or(defaults.z_threshold),
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
            forecast_horizon: self.forecast_horizon.unwrap_or(defaults.forecast_horizon),
            seasonal_period: self.seasonal_period.unwrap_or(defaults.seasonal_period),
        };
        options.validate()?;
        Ok(options)
    }
}

// ============================================================================
// Input Documents
// ============================================================================

/// Parse a series envelope `{ "records": [...], "summary": {...} }`.
pub fn parse_envelope(json: &str) -> Result<SeriesEnvelope> {
    serde_json::from_str(json).map_err(|e| EpiError::Parse(e.to_string()))
}

/// Parse a bare record list `[{ "period_label": ..., "count": ... }, ...]`.
pub fn parse_records(json: &str) -> Result<Vec<Observation>> {
    serde_json::from_str(json).map_err(|e| EpiError::Parse(e.to_string()))
}
