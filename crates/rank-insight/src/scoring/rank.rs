use serde::Serialize;

/// Practical score floor observed across the reference population.
pub const MIN_EXPECTED_SCORE: f64 = 20.0;
/// Practical score ceiling observed across the reference population.
pub const MAX_EXPECTED_SCORE: f64 = 95.0;
/// Reference population size the rank position is projected onto.
pub const TOTAL_SAMPLES: f64 = 1000.0;

const MIN_MARGIN: u64 = 5;
const MARGIN_RATIO: f64 = 0.12;

/// Symmetric band around an estimated rank position. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankInterval {
    pub estimated: u64,
    pub margin: u64,
    pub min: u64,
    pub max: u64,
}

impl RankInterval {
    /// Projects a composite score onto the reference population.
    ///
    /// The normalized position is not clamped, so scores above 95 collapse to
    /// rank 1 and scores below 20 land past the population size. Only the
    /// lower edge of the band is floored; the upper edge is left open.
    pub fn from_score(score: f64) -> Self {
        let normalized =
            (score - MIN_EXPECTED_SCORE) / (MAX_EXPECTED_SCORE - MIN_EXPECTED_SCORE);
        let estimated = (TOTAL_SAMPLES * (1.0 - normalized)).round().max(1.0) as u64;
        let margin = ((estimated as f64 * MARGIN_RATIO).floor() as u64).max(MIN_MARGIN);

        Self {
            estimated,
            margin,
            min: estimated.saturating_sub(margin).max(1),
            max: estimated.saturating_add(margin),
        }
    }

    pub const fn contains(&self, rank: u64) -> bool {
        self.min <= rank && rank <= self.max
    }

    pub const fn width(&self) -> u64 {
        self.max - self.min
    }
}
