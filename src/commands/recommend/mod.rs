//! `movierec similar` and `movierec recommend` commands
//!
//! - `similar <movie-id>` scores the cohort of a known movie id
//! - `recommend <title>` searches the title first and scores the best match

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::session::Session;
use movierec_core::dataset::Dataset;
use movierec_core::error::{RecError, Result};
use movierec_core::model::Movie;
use movierec_core::recommend::{CohortParams, RatingsView, Recommendation};

use self::format::{output_human, output_json, output_records};

/// The movie recommendations are computed for, and how it was found
pub struct Anchor<'a> {
    pub movie: &'a Movie,
    /// Search query and match similarity, when found by title
    pub matched: Option<(&'a str, f64)>,
}

/// Execute the similar command
pub fn execute_similar(
    cli: &Cli,
    session: &Session,
    movie_id: u32,
    params: &CohortParams,
) -> Result<()> {
    let dataset = session.dataset()?;

    // The core treats an unknown id like an empty cohort; the CLI tells them apart
    let movie = dataset
        .movie(movie_id)
        .ok_or_else(|| RecError::not_found("movie", movie_id))?;

    let recs = score(&dataset, movie.id, params)?;
    emit(
        cli,
        &Anchor {
            movie,
            matched: None,
        },
        &recs,
    )
}

/// Execute the recommend command
pub fn execute_recommend(
    cli: &Cli,
    session: &Session,
    title: &str,
    params: &CohortParams,
) -> Result<()> {
    let dataset = session.dataset()?;
    let index = session.title_index(&dataset)?;

    let best = index
        .search(title, 1)?
        .into_iter()
        .next()
        .filter(|hit| hit.similarity > 0.0)
        .ok_or_else(|| RecError::not_found("movie matching", title))?;

    debug!(movie_id = best.movie_id, similarity = best.similarity, "best_match");

    let movie = dataset
        .movie(best.movie_id)
        .ok_or_else(|| RecError::not_found("movie", best.movie_id))?;

    let recs = score(&dataset, movie.id, params)?;
    emit(
        cli,
        &Anchor {
            movie,
            matched: Some((title, best.similarity)),
        },
        &recs,
    )
}

fn score(dataset: &Dataset, movie_id: u32, params: &CohortParams) -> Result<Vec<Recommendation>> {
    let start = Instant::now();
    params.validate()?;

    let view = RatingsView::new(dataset.ratings(), params.high_rating_threshold);
    let recs = view.find_similar(movie_id, dataset.movies(), params)?;

    debug!(movie_id, result_count = recs.len(), elapsed = ?start.elapsed(), "score");
    Ok(recs)
}

fn emit(cli: &Cli, anchor: &Anchor<'_>, recs: &[Recommendation]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => output_json(anchor, recs)?,
        OutputFormat::Human => output_human(cli, anchor, recs),
        OutputFormat::Records => output_records(anchor, recs),
    }
    Ok(())
}
