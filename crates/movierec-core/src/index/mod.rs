//! Title index: TF-IDF features over cleaned movie titles
//!
//! One feature row per movie, row `i` aligned with movie `i` of the collection
//! the index was built from. The index is immutable once built; a changed
//! movie collection needs a fresh [`TitleIndex::build`] (see
//! [`cache::load_or_build`] for fingerprint-checked reuse).

pub mod cache;
mod vectorizer;

pub use vectorizer::{TfidfVectorizer, DEFAULT_NGRAM_MAX};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{RecError, Result};
use crate::model::{clean_title, Movie};
use crate::similarity::{cosine_similarity, SparseVector};

/// Default number of title matches returned by a search
pub const DEFAULT_TOP_K: usize = 5;

/// A search hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleMatch {
    pub movie_id: u32,
    pub title: String,
    pub clean_title: String,
    pub genres: String,
    /// Cosine similarity to the query, in [0, 1]
    pub similarity: f64,
    /// Position of the movie in the indexed collection
    pub row: usize,
}

/// Fitted title index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleIndex {
    fingerprint: String,
    movies: Vec<Movie>,
    vectorizer: TfidfVectorizer,
    rows: Vec<SparseVector>,
}

impl TitleIndex {
    /// Fit the term-weighting model over every movie's cleaned title.
    ///
    /// An empty collection produces a zero-row index whose searches return
    /// nothing.
    #[tracing::instrument(skip(movies), fields(movies = movies.len()))]
    pub fn build(movies: &[Movie]) -> Self {
        let titles: Vec<&str> = movies.iter().map(|m| m.clean_title.as_str()).collect();
        let vectorizer = TfidfVectorizer::fit(&titles, DEFAULT_NGRAM_MAX);
        let rows = titles.iter().map(|t| vectorizer.transform(t)).collect();

        debug!(
            vocabulary = vectorizer.vocabulary_size(),
            "title_index_built"
        );

        TitleIndex {
            fingerprint: fingerprint_movies(movies),
            movies: movies.to_vec(),
            vectorizer,
            rows,
        }
    }

    /// Rank movies by title similarity to `query`.
    ///
    /// Returns at most `top_k` matches, highest similarity first, ties kept
    /// in collection order. A query with nothing left after cleaning is
    /// rejected; a query whose terms are all unknown scores every movie 0.
    #[tracing::instrument(skip(self), fields(rows = self.rows.len()))]
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<TitleMatch>> {
        let cleaned = clean_title(query);
        if cleaned.trim().is_empty() {
            return Err(RecError::invalid_query(
                query,
                "no searchable characters (letters, digits) after cleaning",
            ));
        }

        if self.rows.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let query_vec = self.vectorizer.transform(&cleaned);

        let mut scored: Vec<(usize, f64)> = self
            .rows
            .iter()
            .enumerate()
            .map(|(row, vec)| (row, cosine_similarity(&query_vec, vec)))
            .collect();

        // Stable sort keeps collection order among equal scores
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_k);

        debug!(
            query = %cleaned,
            best = scored.first().map(|(_, s)| *s).unwrap_or(0.0),
            "title_search"
        );

        Ok(scored
            .into_iter()
            .map(|(row, similarity)| {
                let movie = &self.movies[row];
                TitleMatch {
                    movie_id: movie.id,
                    title: movie.title.clone(),
                    clean_title: movie.clean_title.clone(),
                    genres: movie.genres.clone(),
                    similarity,
                    row,
                }
            })
            .collect())
    }

    /// Number of feature rows (always equal to the indexed movie count)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fingerprint of the movie collection this index was built from
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Whether this index was built from exactly `movies`
    pub fn matches(&self, movies: &[Movie]) -> bool {
        self.rows.len() == movies.len() && self.fingerprint == fingerprint_movies(movies)
    }

    /// Check the invariants `search` indexes by: one movie per row, and every
    /// feature index inside the fitted vocabulary.
    pub fn is_consistent(&self) -> bool {
        let features = self.vectorizer.vocabulary_size();
        self.movies.len() == self.rows.len()
            && self.vectorizer.is_consistent()
            && self
                .rows
                .iter()
                .all(|row| row.entries().iter().all(|&(idx, _)| idx < features))
    }
}

/// SHA-256 over every movie's id, title and genres, in collection order
pub fn fingerprint_movies(movies: &[Movie]) -> String {
    let mut hasher = Sha256::new();
    for movie in movies {
        hasher.update(movie.id.to_le_bytes());
        hasher.update(movie.title.as_bytes());
        hasher.update([0u8]);
        hasher.update(movie.genres.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(hasher.finalize())
}
