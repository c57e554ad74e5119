use super::attribution::Attribution;
use super::domain::Metric;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Points added to a metric when estimating marginal return.
const IMPROVEMENT_STEP: f64 = 10.0;

/// Builds the recommendation list from the attribution breakdown.
///
/// Deficits come first (most negative first), then the highest marginal
/// return target, then the dominant driver. The list is truncated afterwards,
/// so five or more deficits crowd out the last two entries.
pub(crate) fn generate_recommendations(attribution: &Attribution) -> Vec<String> {
    let mut recommendations = deficit_observations(attribution);

    let target = highest_marginal_return();
    recommendations.push(format!(
        "Prioritize {} ({}): a {IMPROVEMENT_STEP:.0}-point gain is expected to add {:.2} points, the highest return of any metric",
        target.label(),
        target.key(),
        marginal_gain(target)
    ));

    let driver = dominant_driver(attribution);
    recommendations.push(format!(
        "{} ({}) is currently the most significant driver of profile variance ({:+.2} points against baseline)",
        driver.label(),
        driver.key(),
        attribution.get(driver)
    ));

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn deficit_observations(attribution: &Attribution) -> Vec<String> {
    let mut deficits: Vec<(Metric, f64)> = attribution
        .iter()
        .filter(|(_, value)| *value < 0.0)
        .collect();
    // stable: equal deficits keep canonical order
    deficits.sort_by(|a, b| a.1.total_cmp(&b.1));

    deficits
        .into_iter()
        .map(|(metric, value)| {
            format!(
                "{} ({}) is below its historical baseline, detracting {:.2} points from the predicted score",
                metric.label(),
                metric.key(),
                value.abs()
            )
        })
        .collect()
}

fn marginal_gain(metric: Metric) -> f64 {
    IMPROVEMENT_STEP * metric.weight()
}

fn highest_marginal_return() -> Metric {
    first_max_by(Metric::ordered().into_iter().map(|m| (m, marginal_gain(m))))
}

fn dominant_driver(attribution: &Attribution) -> Metric {
    first_max_by(attribution.iter().map(|(metric, value)| (metric, value.abs())))
}

/// Metric with the largest key; ties go to the earliest in canonical order.
fn first_max_by(candidates: impl Iterator<Item = (Metric, f64)>) -> Metric {
    let mut best: Option<(Metric, f64)> = None;
    for (metric, key) in candidates {
        match best {
            Some((_, current)) if key.total_cmp(&current).is_le() => {}
            _ => best = Some((metric, key)),
        }
    }
    best.map_or(Metric::Tlr, |(metric, _)| metric)
}
