use super::domain::{Metric, MetricTable, Profile};

/// Signed per-metric contribution relative to the baseline profile.
///
/// Positive values push the score up, negative values pull it down. The
/// decomposition is exact for the weighted sum; bias and clamping are not
/// attributed to any metric.
pub type Attribution = MetricTable<f64>;

pub fn attribute(profile: &Profile) -> Attribution {
    MetricTable::from_fn(|metric| (profile.value(metric) - metric.baseline()) * metric.weight())
}

/// Weighted sum of the baselines, the reference point attributions are
/// measured from.
pub fn baseline_score() -> f64 {
    Metric::ordered()
        .iter()
        .map(|metric| metric.baseline() * metric.weight())
        .sum()
}

impl Attribution {
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }
}
