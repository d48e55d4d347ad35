//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::index::DEFAULT_TOP_K;
use crate::recommend::{
    CohortParams, DEFAULT_HIGH_RATING_THRESHOLD, DEFAULT_MIN_COHORT_FRACTION, DEFAULT_TOP_N,
};

/// Top-level configuration (`movierec.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Title search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Cohort scoring settings
    #[serde(default)]
    pub recommend: RecommendConfig,

    /// Dataset file layout
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Configuration for title search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of title matches to return (default 5)
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

/// Configuration for cohort scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Ratings strictly above this are "high" (default 4.0)
    #[serde(default = "default_high_rating_threshold")]
    pub high_rating_threshold: f64,

    /// Minimum cohort share a candidate must exceed (default 0.10)
    #[serde(default = "default_min_cohort_fraction")]
    pub min_cohort_fraction: f64,

    /// Number of recommendations to return (default 10)
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Keep the queried movie in its own recommendations (default false)
    #[serde(default)]
    pub include_target: bool,
}

/// Dataset file names, relative to the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_movies_file")]
    pub movies_file: String,

    #[serde(default = "default_ratings_file")]
    pub ratings_file: String,

    /// Title index cache directory
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
}

impl RecommendConfig {
    pub fn cohort_params(&self) -> CohortParams {
        CohortParams {
            high_rating_threshold: self.high_rating_threshold,
            min_cohort_fraction: self.min_cohort_fraction,
            top_n: self.top_n,
            include_target: self.include_target,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            high_rating_threshold: default_high_rating_threshold(),
            min_cohort_fraction: default_min_cohort_fraction(),
            top_n: default_top_n(),
            include_target: false,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            movies_file: default_movies_file(),
            ratings_file: default_ratings_file(),
            cache_dir: default_cache_dir(),
        }
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_high_rating_threshold() -> f64 {
    DEFAULT_HIGH_RATING_THRESHOLD
}

fn default_min_cohort_fraction() -> f64 {
    DEFAULT_MIN_COHORT_FRACTION
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_movies_file() -> String {
    "movies.csv".to_string()
}

fn default_ratings_file() -> String {
    "ratings.csv".to_string()
}

fn default_cache_dir() -> String {
    ".movierec".to_string()
}
