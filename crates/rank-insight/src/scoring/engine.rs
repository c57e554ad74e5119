use super::attribution::{attribute, Attribution};
use super::domain::Profile;
use super::rank::RankInterval;
use super::recommendations::generate_recommendations;
use serde::Serialize;

/// Systematic offset added to the weighted sum before clamping.
pub const SCORE_BIAS: f64 = 2.5;
pub const SCORE_FLOOR: f64 = 0.0;
pub const SCORE_CEILING: f64 = 100.0;

/// Stateless scorer over the fixed weights and baselines.
///
/// `compute` is total: any numeric profile produces a defined result, and
/// identical profiles produce identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer;

impl Scorer {
    pub const fn new() -> Self {
        Self
    }

    pub fn compute(&self, profile: &Profile) -> ScoreResult {
        let predicted_score = composite_score(profile);
        let rank = RankInterval::from_score(predicted_score);
        let attribution = attribute(profile);
        let recommendations = generate_recommendations(&attribution);

        ScoreResult {
            predicted_score,
            rank_range_min: rank.min,
            rank_range_max: rank.max,
            shap_values: attribution,
            recommendations,
            rank,
        }
    }
}

/// Convenience wrapper around [`Scorer::compute`].
pub fn compute(profile: &Profile) -> ScoreResult {
    Scorer.compute(profile)
}

/// Sum of `value * weight` over the five metrics, without bias or clamping.
pub fn weighted_sum(profile: &Profile) -> f64 {
    profile
        .values()
        .map(|(metric, value)| value * metric.weight())
        .sum()
}

/// Weighted sum plus bias, clamped to `[0, 100]`.
pub fn composite_score(profile: &Profile) -> f64 {
    (weighted_sum(profile) + SCORE_BIAS).clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// Scoring output. Serializes to the prediction endpoint's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub predicted_score: f64,
    pub rank_range_min: u64,
    pub rank_range_max: u64,
    /// Per-metric attribution keyed by wire key.
    pub shap_values: Attribution,
    pub recommendations: Vec<String>,
    #[serde(skip)]
    pub rank: RankInterval,
}

impl ScoreResult {
    pub const fn estimated_rank(&self) -> u64 {
        self.rank.estimated
    }
}
