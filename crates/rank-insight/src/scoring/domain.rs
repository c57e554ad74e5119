use serde::{Deserialize, Serialize};

/// The five ranking parameters, declared in canonical order.
///
/// Canonical order is load-bearing: every tie-break in the recommendation
/// passes resolves to the metric declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "TLR")]
    Tlr,
    #[serde(rename = "RPC")]
    Rpc,
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "OI")]
    Oi,
    #[serde(rename = "PR")]
    Pr,
}

impl Metric {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [Self::Tlr, Self::Rpc, Self::Go, Self::Oi, Self::Pr]
    }

    /// Wire key used in requests and in the attribution mapping.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tlr => "TLR",
            Self::Rpc => "RPC",
            Self::Go => "GO",
            Self::Oi => "OI",
            Self::Pr => "PR",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tlr => "Teaching, Learning & Resources",
            Self::Rpc => "Research & Professional Practice",
            Self::Go => "Graduation Outcomes",
            Self::Oi => "Outreach & Inclusivity",
            Self::Pr => "Perception",
        }
    }

    /// Composite weight. The five weights sum to 1.0.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Tlr => 0.35,
            Self::Rpc => 0.30,
            Self::Go => 0.15,
            Self::Oi => 0.10,
            Self::Pr => 0.10,
        }
    }

    /// Midpoint of the metric's assumed historical range. Attribution only.
    pub const fn baseline(self) -> f64 {
        match self {
            Self::Tlr => 55.0,
            Self::Rpc => 47.5,
            Self::Go => 60.0,
            Self::Oi => 52.5,
            Self::Pr => 50.0,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Tlr => 0,
            Self::Rpc => 1,
            Self::Go => 2,
            Self::Oi => 3,
            Self::Pr => 4,
        }
    }
}

/// Five-metric institutional profile. Values are nominally in `[0, 100]` but
/// the scorer accepts anything; range handling belongs to the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "TLR")]
    pub tlr: f64,
    #[serde(rename = "RPC")]
    pub rpc: f64,
    #[serde(rename = "GO")]
    pub go: f64,
    #[serde(rename = "OI")]
    pub oi: f64,
    #[serde(rename = "PR")]
    pub pr: f64,
}

impl Profile {
    pub const fn new(tlr: f64, rpc: f64, go: f64, oi: f64, pr: f64) -> Self {
        Self {
            tlr,
            rpc,
            go,
            oi,
            pr,
        }
    }

    /// Profile with every metric set to `value`.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value, value)
    }

    pub const fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Tlr => self.tlr,
            Metric::Rpc => self.rpc,
            Metric::Go => self.go,
            Metric::Oi => self.oi,
            Metric::Pr => self.pr,
        }
    }

    /// Metric values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ordered()
            .into_iter()
            .map(move |metric| (metric, self.value(metric)))
    }

    /// Applies the boundary policy. Non-finite values are refused under every
    /// policy; out-of-range values only under [`RangePolicy::Reject`].
    pub fn check(&self, policy: RangePolicy) -> Result<(), ProfileError> {
        for (metric, value) in self.values() {
            if !value.is_finite() {
                return Err(ProfileError::NonFinite { metric });
            }
            if policy == RangePolicy::Reject && !(METRIC_FLOOR..=METRIC_CEILING).contains(&value) {
                return Err(ProfileError::OutOfRange { metric, value });
            }
        }
        Ok(())
    }
}

pub const METRIC_FLOOR: f64 = 0.0;
pub const METRIC_CEILING: f64 = 100.0;

/// How the boundary treats metric values outside `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Pass values through; they propagate linearly into the score.
    #[default]
    Accept,
    Reject,
}

impl RangePolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "accept" | "permissive" => Some(Self::Accept),
            "reject" | "strict" => Some(Self::Reject),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("{} must be a finite number", .metric.key())]
    NonFinite { metric: Metric },
    #[error("{} must lie within [0, 100] (found {value})", .metric.key())]
    OutOfRange { metric: Metric, value: f64 },
}

/// Fixed-size per-metric table indexed in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricTable<T> {
    entries: [T; Metric::COUNT],
}

impl<T: Copy> MetricTable<T> {
    pub fn from_fn(mut f: impl FnMut(Metric) -> T) -> Self {
        Self {
            entries: Metric::ordered().map(&mut f),
        }
    }

    pub fn get(&self, metric: Metric) -> T {
        self.entries[metric.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, T)> + '_ {
        Metric::ordered()
            .into_iter()
            .zip(self.entries.iter().copied())
    }
}

impl<T: Copy + Serialize> Serialize for MetricTable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Metric::COUNT))?;
        for (metric, value) in self.iter() {
            map.serialize_entry(metric.key(), &value)?;
        }
        map.end()
    }
}
