//! MovieLens dataset loading
//!
//! Reads `movies.csv` (`movieId,title,genres`) and `ratings.csv`
//! (`userId,movieId,rating[,timestamp]`) from a data directory. Columns are
//! matched by header name; extra columns are ignored.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::DatasetConfig;
use crate::error::{RecError, Result};
use crate::model::{Movie, Rating};
use crate::trace_time;

#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[serde(rename = "movieId")]
    movie_id: u32,
    title: String,
    #[serde(default)]
    genres: String,
}

#[derive(Debug, Deserialize)]
struct RatingRecord {
    #[serde(rename = "userId")]
    user_id: u32,
    #[serde(rename = "movieId")]
    movie_id: u32,
    rating: f64,
}

/// Summary counts for a loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub movies: usize,
    pub ratings: usize,
    pub users: usize,
    pub rated_movies: usize,
}

/// Movies and ratings loaded into memory
#[derive(Debug, Clone)]
pub struct Dataset {
    dir: PathBuf,
    movies: Vec<Movie>,
    ratings: Vec<Rating>,
    by_id: HashMap<u32, usize>,
}

impl Dataset {
    /// Assemble a dataset from collections already in memory
    pub fn from_parts(dir: impl Into<PathBuf>, movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        let by_id = movies
            .iter()
            .enumerate()
            .map(|(idx, m)| (m.id, idx))
            .collect();
        Dataset {
            dir: dir.into(),
            movies,
            ratings,
            by_id,
        }
    }

    /// Load both CSV files from `dir`
    #[tracing::instrument(skip(config), fields(dir = %dir.display()))]
    pub fn load(dir: &Path, config: &DatasetConfig) -> Result<Self> {
        let movies = load_movies(dir, config)?;
        let ratings = load_ratings(dir, config)?;

        info!(
            movies = movies.len(),
            ratings = ratings.len(),
            "dataset_loaded"
        );

        Ok(Self::from_parts(dir, movies, ratings))
    }

    /// Load only the movie table, for commands that never touch ratings
    pub fn load_movies_only(dir: &Path, config: &DatasetConfig) -> Result<Self> {
        let movies = load_movies(dir, config)?;
        Ok(Self::from_parts(dir, movies, Vec::new()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Metadata for a movie id
    pub fn movie(&self, id: u32) -> Option<&Movie> {
        self.by_id.get(&id).map(|&idx| &self.movies[idx])
    }

    pub fn stats(&self) -> DatasetStats {
        let users: HashSet<u32> = self.ratings.iter().map(|r| r.user_id).collect();
        let rated: HashSet<u32> = self.ratings.iter().map(|r| r.movie_id).collect();
        DatasetStats {
            movies: self.movies.len(),
            ratings: self.ratings.len(),
            users: users.len(),
            rated_movies: rated.len(),
        }
    }
}

fn require_file(dir: &Path, name: &str) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(RecError::data_unavailable(dir, "data directory does not exist"));
    }
    let path = dir.join(name);
    if !path.is_file() {
        return Err(RecError::data_unavailable(&path, "file not found"));
    }
    Ok(path)
}

fn load_movies(dir: &Path, config: &DatasetConfig) -> Result<Vec<Movie>> {
    let start = Instant::now();
    let path = require_file(dir, &config.movies_file)?;

    let mut reader = csv::Reader::from_path(&path).map_err(|e| RecError::csv(&path, e))?;
    let mut movies = Vec::new();
    for record in reader.deserialize::<MovieRecord>() {
        let record = record.map_err(|e| RecError::csv(&path, e))?;
        movies.push(Movie::new(record.movie_id, record.title, record.genres));
    }

    trace_time!(start, "load_movies", count = movies.len());
    Ok(movies)
}

fn load_ratings(dir: &Path, config: &DatasetConfig) -> Result<Vec<Rating>> {
    let start = Instant::now();
    let path = require_file(dir, &config.ratings_file)?;

    let mut reader = csv::Reader::from_path(&path).map_err(|e| RecError::csv(&path, e))?;
    let mut ratings = Vec::new();
    for record in reader.deserialize::<RatingRecord>() {
        let record = record.map_err(|e| RecError::csv(&path, e))?;
        ratings.push(Rating::new(record.user_id, record.movie_id, record.rating));
    }

    trace_time!(start, "load_ratings", count = ratings.len());
    Ok(ratings)
}
