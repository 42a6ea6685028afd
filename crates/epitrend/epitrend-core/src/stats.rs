//! Distribution statistics.
//!
//! Percentiles interpolate linearly between order statistics at index
//! `(n - 1) * p`. Variance and standard deviation are population moments
//! (divide by `n`). Empty inputs return `None` instead of NaN.

use epitrend_spi::DistributionStats;

/// Drop NaN and infinite values.
pub fn clean(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|x| x.is_finite()).collect()
}

/// Ascending copy of `values`.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Unweighted arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance.
pub fn variance(values: &[f64]) -> Option<f64> {
    let first = *values.first()?;
    // Constant samples are exactly zero, not a rounding residue of the mean.
    if values.iter().all(|&x| x == first) {
        return Some(0.0);
    }
    let mean = mean(values)?;
    Some(values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Percentile `p` (in `[0, 1]`) of an ascending slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let index = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = index - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Summary statistics over the finite values of `values`.
pub fn stats(values: &[f64]) -> Option<DistributionStats> {
    let values = sorted(&clean(values));
    let (&min, &max) = (values.first()?, values.last()?);
    Some(DistributionStats {
        min,
        max,
        mean: mean(&values)?,
        std_dev: std_dev(&values)?,
        p25: percentile(&values, 0.25)?,
        p50: percentile(&values, 0.50)?,
        p75: percentile(&values, 0.75)?,
    })
}

/// Entry point for callers that only want summary numbers.
pub fn summarize(values: &[f64]) -> Option<DistributionStats> {
    stats(values)
}
