//! Institutional rank-band scoring.
//!
//! A five-metric [`Profile`] is folded into a biased weighted composite, the
//! composite is projected onto a reference population as a [`RankInterval`],
//! and the profile's deviation from baseline is attributed back to each
//! metric to drive the recommendation text.

mod attribution;
pub mod domain;
mod engine;
mod rank;
mod recommendations;
pub mod router;

#[cfg(test)]
mod tests;

pub use attribution::{attribute, baseline_score, Attribution};
pub use domain::{Metric, MetricTable, Profile, ProfileError, RangePolicy};
pub use engine::{
    composite_score, compute, weighted_sum, ScoreResult, Scorer, SCORE_BIAS, SCORE_CEILING,
    SCORE_FLOOR,
};
pub use rank::{RankInterval, MAX_EXPECTED_SCORE, MIN_EXPECTED_SCORE, TOTAL_SAMPLES};
pub use recommendations::MAX_RECOMMENDATIONS;
pub use router::scoring_router;
