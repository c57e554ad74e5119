use clap::Args;
use rank_insight::error::AppError;
use rank_insight::scoring::{Profile, RangePolicy, ScoreResult, Scorer};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Teaching, Learning & Resources (0-100)
    #[arg(long)]
    pub(crate) tlr: f64,
    /// Research & Professional Practice (0-100)
    #[arg(long)]
    pub(crate) rpc: f64,
    /// Graduation Outcomes (0-100)
    #[arg(long)]
    pub(crate) go: f64,
    /// Outreach & Inclusivity (0-100)
    #[arg(long)]
    pub(crate) oi: f64,
    /// Perception (0-100)
    #[arg(long)]
    pub(crate) pr: f64,
    /// Reject metrics outside 0-100 instead of scoring them as given
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the prediction endpoint's JSON payload instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    fn profile(&self) -> Profile {
        Profile::new(self.tlr, self.rpc, self.go, self.oi, self.pr)
    }

    fn policy(&self) -> RangePolicy {
        if self.strict {
            RangePolicy::Reject
        } else {
            RangePolicy::Accept
        }
    }
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let result = score_profile(&args)?;

    if args.json {
        let payload = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
        println!("{payload}");
    } else {
        print!("{}", render_score_report(&args.profile(), &result));
    }

    Ok(())
}

fn score_profile(args: &ScoreArgs) -> Result<ScoreResult, AppError> {
    let profile = args.profile();
    profile.check(args.policy())?;
    Ok(Scorer::new().compute(&profile))
}

pub(crate) fn render_score_report(profile: &Profile, result: &ScoreResult) -> String {
    let mut out = String::new();
    out.push_str("Rank insight report\n");
    out.push_str(&format!("Predicted score: {:.2}\n", result.predicted_score));
    out.push_str(&format!(
        "Estimated rank: {} (band {} - {})\n",
        result.estimated_rank(),
        result.rank_range_min,
        result.rank_range_max
    ));

    out.push_str("\nMetric contributions\n");
    for (metric, value) in profile.values() {
        out.push_str(&format!(
            "- {} ({}): {:.2} -> {:+.2}\n",
            metric.label(),
            metric.key(),
            value,
            result.shap_values.get(metric)
        ));
    }

    out.push_str("\nRecommendations\n");
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, recommendation));
    }

    out
}
