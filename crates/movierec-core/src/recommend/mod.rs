//! Cohort scoring: "users who loved this also loved"
//!
//! For a target movie, the similar cohort is every user who rated it above
//! the high-rating threshold. Each movie those users also rated highly gets
//!
//! - `similar`: share of the cohort that rated it highly,
//! - `all`: share of the reference population (everyone who rated any kept
//!   candidate highly) that rated it highly,
//! - `score = similar / all`,
//!
//! so movies the cohort likes far more than people in general rank first.

mod view;

pub use view::RatingsView;

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_invalid;
use crate::error::Result;
use crate::model::{Movie, Rating};

pub const DEFAULT_HIGH_RATING_THRESHOLD: f64 = 4.0;
pub const DEFAULT_MIN_COHORT_FRACTION: f64 = 0.10;
pub const DEFAULT_TOP_N: usize = 10;

/// Tunables for [`find_similar_movies`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CohortParams {
    /// Ratings strictly above this count as "high"
    pub high_rating_threshold: f64,
    /// Candidates need a cohort share strictly above this
    pub min_cohort_fraction: f64,
    pub top_n: usize,
    /// Keep the target movie itself in the ranking
    pub include_target: bool,
}

impl Default for CohortParams {
    fn default() -> Self {
        CohortParams {
            high_rating_threshold: DEFAULT_HIGH_RATING_THRESHOLD,
            min_cohort_fraction: DEFAULT_MIN_COHORT_FRACTION,
            top_n: DEFAULT_TOP_N,
            include_target: false,
        }
    }
}

impl CohortParams {
    pub fn validate(&self) -> Result<()> {
        if !self.high_rating_threshold.is_finite() {
            bail_invalid!("high rating threshold", self.high_rating_threshold);
        }
        if !(0.0..1.0).contains(&self.min_cohort_fraction) {
            bail_invalid!(
                "minimum cohort fraction (expected 0 <= f < 1)",
                self.min_cohort_fraction
            );
        }
        Ok(())
    }
}

/// One row of the score table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub similar: f64,
    pub all: f64,
    pub score: f64,
}

/// Candidate movie id to its scores; transient, rebuilt per query
pub type ScoreTable = BTreeMap<u32, ScoreEntry>;

/// A ranked recommendation joined with movie metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub movie_id: u32,
    pub title: String,
    pub genres: String,
    pub similar: f64,
    pub all: f64,
    pub score: f64,
}

impl RatingsView {
    /// Score every candidate the cohort of `target` rated highly.
    ///
    /// Returns an empty table when nobody rated `target` above the threshold,
    /// including when `target` has no ratings at all.
    #[tracing::instrument(skip(self), fields(threshold = self.threshold()))]
    pub fn score_table(&self, target: u32, min_cohort_fraction: f64) -> ScoreTable {
        let cohort = match self.fans_of(target) {
            Some(cohort) if !cohort.is_empty() => cohort,
            _ => {
                debug!("empty_cohort");
                return ScoreTable::new();
            }
        };
        let cohort_size = cohort.len() as f64;

        let mut cohort_counts: HashMap<u32, usize> = HashMap::new();
        for user in cohort {
            for &movie in self.liked_by(*user).into_iter().flatten() {
                *cohort_counts.entry(movie).or_insert(0) += 1;
            }
        }

        let kept: Vec<(u32, f64)> = cohort_counts
            .into_iter()
            .map(|(movie, count)| (movie, count as f64 / cohort_size))
            .filter(|&(_, similar)| similar > min_cohort_fraction)
            .collect();

        let mut reference: HashSet<u32> = HashSet::new();
        for (movie, _) in &kept {
            reference.extend(self.fans_of(*movie).into_iter().flatten().copied());
        }
        let reference_size = reference.len() as f64;

        debug!(
            cohort = cohort.len(),
            candidates = kept.len(),
            reference = reference.len(),
            "cohort_scored"
        );

        kept.into_iter()
            .map(|(movie, similar)| {
                let fans = self.fans_of(movie).map_or(0, |f| f.len()) as f64;
                let all = fans / reference_size;
                (
                    movie,
                    ScoreEntry {
                        similar,
                        all,
                        score: similar / all,
                    },
                )
            })
            .collect()
    }

    /// Rank the score table of `target` and join it with movie metadata.
    ///
    /// `params.high_rating_threshold` must match the threshold this view was
    /// built with.
    pub fn find_similar(
        &self,
        target: u32,
        movies: &[Movie],
        params: &CohortParams,
    ) -> Result<Vec<Recommendation>> {
        params.validate()?;
        if params.high_rating_threshold != self.threshold() {
            bail_invalid!(
                "high rating threshold for this ratings view",
                params.high_rating_threshold
            );
        }

        let table = self.score_table(target, params.min_cohort_fraction);
        Ok(rank(table, target, movies, params))
    }
}

/// Movies related to `target` through the ratings of its high-rating cohort.
///
/// Builds a [`RatingsView`] for the call; build one directly to answer many
/// queries over the same ratings.
pub fn find_similar_movies(
    target: u32,
    movies: &[Movie],
    ratings: &[Rating],
    params: &CohortParams,
) -> Result<Vec<Recommendation>> {
    params.validate()?;
    RatingsView::new(ratings, params.high_rating_threshold).find_similar(target, movies, params)
}

/// Order by score (highest first, then lowest id), cut to `top_n`, attach
/// titles. Candidates without a movie record are dropped after the cut.
fn rank(
    table: ScoreTable,
    target: u32,
    movies: &[Movie],
    params: &CohortParams,
) -> Vec<Recommendation> {
    let mut ranked: Vec<(u32, ScoreEntry)> = table
        .into_iter()
        .filter(|(movie, _)| params.include_target || *movie != target)
        .collect();

    ranked.sort_by(|a, b| b.1.score.total_cmp(&a.1.score).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(params.top_n);

    let by_id: HashMap<u32, &Movie> = movies.iter().map(|m| (m.id, m)).collect();

    ranked
        .into_iter()
        .filter_map(|(movie_id, entry)| {
            by_id.get(&movie_id).map(|movie| Recommendation {
                movie_id,
                title: movie.title.clone(),
                genres: movie.genres.clone(),
                similar: entry.similar,
                all: entry.all,
                score: entry.score,
            })
        })
        .collect()
}
