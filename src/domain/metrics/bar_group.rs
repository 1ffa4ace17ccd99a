use super::series::MetricSeries;
use crate::domain::errors::ChartError;
use tracing::warn;

/// The pair of bars drawn at one category slot.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub slot: usize,
    pub metric: String,
    pub baseline: f64,
    pub tuned: f64,
}

impl BarGroup {
    /// Category centre on the x axis (slots are sequential integers).
    pub fn center(&self) -> f64 {
        self.slot as f64
    }

    /// Centre of the baseline bar, shifted left by half a bar width.
    pub fn baseline_x(&self, bar_width: f64) -> f64 {
        self.center() - bar_width / 2.0
    }

    /// Centre of the tuned bar, shifted right by half a bar width.
    pub fn tuned_x(&self, bar_width: f64) -> f64 {
        self.center() + bar_width / 2.0
    }
}

/// Pair two series positionally into bar groups.
///
/// The category axis follows `baseline`'s metric order. Series naming
/// different metrics (same count) still pair up, with a warning.
pub fn pair_series(
    baseline: &MetricSeries,
    tuned: &MetricSeries,
) -> Result<Vec<BarGroup>, ChartError> {
    baseline.validate()?;
    tuned.validate()?;

    if baseline.len() != tuned.len() {
        return Err(ChartError::SeriesLengthMismatch {
            left: baseline.name.clone(),
            left_len: baseline.len(),
            right: tuned.name.clone(),
            right_len: tuned.len(),
        });
    }

    if !baseline.is_aligned_with(tuned) {
        warn!(
            "Series '{}' and '{}' name different metrics; pairing by position using '{}' order",
            baseline.name, tuned.name, baseline.name
        );
    }

    Ok(baseline
        .iter()
        .zip(tuned.values())
        .enumerate()
        .map(|(slot, ((metric, b), t))| BarGroup {
            slot,
            metric: metric.to_string(),
            baseline: b,
            tuned: t,
        })
        .collect())
}
