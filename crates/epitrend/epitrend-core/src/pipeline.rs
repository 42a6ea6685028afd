//! Series analysis pipeline.
//!
//! Sort → smooth and grow → flag outliers → decompose and forecast. Every
//! stage works on unrounded values; rounding to two decimals happens only
//! when the output records are assembled.

use epitrend_api::AnalysisOptions;
use epitrend_spi::{
    round2, Decomposer, DerivedRecord, DerivedSeries, ForecastPoint, Observation, OutlierDetector,
    Result, SeriesEnvelope, Smoother,
};
use tracing::{debug, instrument};

use crate::outlier::FenceZScoreDetector;
use crate::period::week_positions;
use crate::series::Series;
use crate::smoothing::{growth_rates, TrailingMovingAverage};
use crate::trend::SeasonalTrendDecomposer;

/// Runs the full analysis over a series with a fixed set of stages.
///
/// Stateless between calls and safe to share across threads.
pub struct SeriesAnalyzer {
    options: AnalysisOptions,
    smoother: Box<dyn Smoother>,
    detector: Box<dyn OutlierDetector>,
    decomposer: Box<dyn Decomposer>,
}

impl SeriesAnalyzer {
    /// Build the default stages from validated options.
    pub fn new(options: AnalysisOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            smoother: Box::new(TrailingMovingAverage::from_options(&options)?),
            detector: Box::new(FenceZScoreDetector::from_options(&options)?),
            decomposer: Box::new(SeasonalTrendDecomposer::from_options(&options)?),
        })
    }

    /// Replace the smoothing stage.
    pub fn with_smoother(mut self, smoother: impl Smoother + 'static) -> Self {
        self.smoother = Box::new(smoother);
        self
    }

    /// Replace the outlier detection stage.
    pub fn with_detector(mut self, detector: impl OutlierDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Replace the decomposition stage.
    pub fn with_decomposer(mut self, decomposer: impl Decomposer + 'static) -> Self {
        self.decomposer = Box::new(decomposer);
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze an already ordered series.
    ///
    /// Points a replaced stage leaves out get no moving average, no z-score
    /// and are not flagged.
    #[instrument(level = "debug", skip_all, fields(points = series.len()))]
    pub fn analyze(&self, series: &Series) -> DerivedSeries {
        let labels = series.labels();
        let values = series.values();

        let moving_avg = self.smoother.smooth(&values);
        let growth = growth_rates(&values);
        let report = self.detector.detect(&values);
        let weeks = week_positions(&labels, self.options.seasonal_period);
        let decomposition = self.decomposer.decompose(&values, &weeks);
        let trend = decomposition.fitted_trend();
        let seasonal_trend = decomposition.fitted_seasonal_trend();
        let fences = report.fences;

        let mut records: Vec<DerivedRecord> = (0..values.len())
            .map(|i| DerivedRecord {
                period_label: labels[i].to_string(),
                value: Some(values[i]),
                moving_avg: moving_avg.get(i).copied().flatten().map(round2),
                growth_pct: Some(round2(growth[i])),
                z_score: report.z_scores.get(i).copied().map(round2),
                iqr_lower: fences.map(|f| round2(f.lower)),
                iqr_upper: fences.map(|f| round2(f.upper)),
                is_outlier: report.is_outlier.get(i).copied().unwrap_or(false),
                trend: Some(round2(trend[i])),
                seasonal_trend: Some(round2(seasonal_trend[i])),
                is_forecast: false,
            })
            .collect();

        let forecast = self
            .decomposer
            .forecast(&decomposition, self.options.forecast_horizon);
        records.extend(forecast.iter().enumerate().map(|(k, point)| {
            forecast_record(k + 1, point, decomposition.trend.at(point.t as f64))
        }));

        debug!(
            outliers = report.outlier_count(),
            slope = decomposition.trend.slope,
            forecast = forecast.len(),
            "series analyzed"
        );

        DerivedSeries {
            records,
            trend: decomposition.trend,
            seasonal_offsets: decomposition.seasonal_offsets,
            fences,
            observed_len: values.len(),
            summary: None,
        }
    }

    /// Sort raw observations into a series and analyze it.
    pub fn analyze_observations<I>(&self, observations: I) -> DerivedSeries
    where
        I: IntoIterator<Item = Observation>,
    {
        self.analyze(&Series::from_observations(observations))
    }
}

fn forecast_record(step: usize, point: &ForecastPoint, trend: f64) -> DerivedRecord {
    DerivedRecord {
        period_label: format!("Forecast +{} (W{:02})", step, point.week),
        value: None,
        moving_avg: None,
        growth_pct: None,
        z_score: None,
        iqr_lower: None,
        iqr_upper: None,
        is_outlier: false,
        trend: Some(round2(trend)),
        seasonal_trend: Some(round2(point.value)),
        is_forecast: true,
    }
}

/// Analyze raw observations with the given options.
///
/// Fails only when the options are invalid.
pub fn analyze_series<I>(observations: I, options: &AnalysisOptions) -> Result<DerivedSeries>
where
    I: IntoIterator<Item = Observation>,
{
    Ok(SeriesAnalyzer::new(*options)?.analyze_observations(observations))
}

/// Analyze an API envelope, passing its summary through unchanged.
pub fn analyze_envelope(envelope: SeriesEnvelope, options: &AnalysisOptions) -> Result<DerivedSeries> {
    let mut derived = analyze_series(envelope.records, options)?;
    derived.summary = envelope.summary;
    Ok(derived)
}
