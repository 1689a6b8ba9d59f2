//! Descriptive statistics over the county count column.

use anyhow::Result;

use ppr_model::{CountyCounts, RegistryError, SummaryStats};

/// Compute mean, median, and sample standard deviation of the per-county
/// counts.
///
/// # Errors
///
/// Returns [`RegistryError::InsufficientData`] for an empty table; mean
/// and median are undefined over zero groups and must not be silently
/// reported as zero.
pub fn summarize(counts: &CountyCounts) -> Result<SummaryStats> {
    if counts.is_empty() {
        return Err(RegistryError::InsufficientData(
            "no county groups to summarize".to_string(),
        )
        .into());
    }
    let values = counts.counts();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Ok(SummaryStats {
        mean,
        median: median_of(&values),
        std_dev: sample_std_dev(&values, mean),
    })
}

fn median_of(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Sample convention (n-1 denominator); undefined below two observations.
fn sample_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let sum_sq: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}
