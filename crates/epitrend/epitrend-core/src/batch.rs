//! Parallel analysis of independent series.
//!
//! Each metric (infections, deaths, ICU, hospitalizations) is analyzed on the
//! rayon pool. Inputs are disjoint, so no coordination is needed and results
//! come back in input order.

use epitrend_api::AnalysisOptions;
use epitrend_spi::{DerivedSeries, Observation, Result};
use rayon::prelude::*;
use tracing::debug;

use crate::pipeline::SeriesAnalyzer;

/// Analyze several named series concurrently with shared options.
pub fn analyze_many<K>(
    inputs: Vec<(K, Vec<Observation>)>,
    options: &AnalysisOptions,
) -> Result<Vec<(K, DerivedSeries)>>
where
    K: Send,
{
    let analyzer = SeriesAnalyzer::new(*options)?;
    debug!(series = inputs.len(), "analyzing series in parallel");

    Ok(inputs
        .into_par_iter()
        .map(|(name, observations)| (name, analyzer.analyze_observations(observations)))
        .collect())
}
