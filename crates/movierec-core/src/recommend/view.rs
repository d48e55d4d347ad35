use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::model::Rating;

/// High ratings grouped both ways for one threshold.
///
/// Only ratings strictly above the threshold are kept. Duplicate
/// `(user, movie)` pairs collapse, so every count taken from the view is a
/// count of distinct users.
#[derive(Debug, Clone)]
pub struct RatingsView {
    threshold: f64,
    users_by_movie: HashMap<u32, HashSet<u32>>,
    movies_by_user: HashMap<u32, HashSet<u32>>,
}

impl RatingsView {
    #[tracing::instrument(skip(ratings), fields(ratings = ratings.len()))]
    pub fn new(ratings: &[Rating], threshold: f64) -> Self {
        let mut users_by_movie: HashMap<u32, HashSet<u32>> = HashMap::new();
        let mut movies_by_user: HashMap<u32, HashSet<u32>> = HashMap::new();

        for rating in ratings.iter().filter(|r| r.rating > threshold) {
            users_by_movie
                .entry(rating.movie_id)
                .or_default()
                .insert(rating.user_id);
            movies_by_user
                .entry(rating.user_id)
                .or_default()
                .insert(rating.movie_id);
        }

        debug!(
            movies = users_by_movie.len(),
            users = movies_by_user.len(),
            "ratings_view_built"
        );

        RatingsView {
            threshold,
            users_by_movie,
            movies_by_user,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Distinct users who rated `movie_id` above the threshold
    pub fn fans_of(&self, movie_id: u32) -> Option<&HashSet<u32>> {
        self.users_by_movie.get(&movie_id)
    }

    /// Movies `user_id` rated above the threshold
    pub fn liked_by(&self, user_id: u32) -> Option<&HashSet<u32>> {
        self.movies_by_user.get(&user_id)
    }

    /// Number of distinct users with at least one high rating
    pub fn user_count(&self) -> usize {
        self.movies_by_user.len()
    }
}
