use crate::domain::metrics::MetricSeries;

pub const DIFFUSION: &str = "Diffusion D (m^2/s)";
pub const CONFINEMENT: &str = "Confinement tau_E (s)";
pub const Q_PROXY: &str = "Q Proxy";

/// UN-EX metrics before parameter tuning.
pub fn baseline_series() -> MetricSeries {
    MetricSeries::from_pairs(
        "Baseline",
        &[(DIFFUSION, 5.81), (CONFINEMENT, 1.73), (Q_PROXY, 1.73)],
    )
}

/// UN-EX metrics after parameter tuning.
pub fn tuned_series() -> MetricSeries {
    MetricSeries::from_pairs(
        "Tuned",
        &[(DIFFUSION, 4.01), (CONFINEMENT, 2.50), (Q_PROXY, 2.50)],
    )
}
