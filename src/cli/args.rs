use clap::Args;

use movierec_core::config::RecommendConfig;
use movierec_core::recommend::CohortParams;

use super::parse::{parse_fraction, parse_threshold};

/// Cohort scoring overrides shared by `similar` and `recommend`
#[derive(Args, Debug, Clone, Default)]
pub struct CohortArgs {
    /// Ratings strictly above this count as high
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Minimum share of the cohort a candidate must exceed
    #[arg(long, value_parser = parse_fraction)]
    pub min_fraction: Option<f64>,

    /// Number of recommendations to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Keep the queried movie in its own recommendations (left out by default;
    /// when kept it usually ranks first)
    #[arg(long)]
    pub include_target: bool,
}

impl CohortArgs {
    /// Layer these flags over the configured defaults
    pub fn resolve(&self, config: &RecommendConfig) -> CohortParams {
        let base = config.cohort_params();
        CohortParams {
            high_rating_threshold: self.threshold.unwrap_or(base.high_rating_threshold),
            min_cohort_fraction: self.min_fraction.unwrap_or(base.min_cohort_fraction),
            top_n: self.limit.unwrap_or(base.top_n),
            include_target: self.include_target || base.include_target,
        }
    }
}
