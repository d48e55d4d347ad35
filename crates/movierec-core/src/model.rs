//! Movie and rating records

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Anything outside ASCII letters, digits and the plain space
static UNSEARCHABLE: OnceLock<Regex> = OnceLock::new();

fn unsearchable() -> &'static Regex {
    UNSEARCHABLE.get_or_init(|| Regex::new("[^a-zA-Z0-9 ]").expect("static pattern is valid"))
}

/// Strip every character outside `[A-Za-z0-9 ]`, preserving case.
///
/// Used both when indexing titles and when cleaning search queries, so the
/// two always agree. Idempotent.
pub fn clean_title(title: &str) -> String {
    unsearchable().replace_all(title, "").into_owned()
}

/// A movie with its search-ready title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub clean_title: String,
    pub genres: String,
}

impl Movie {
    /// Build a movie, deriving `clean_title` from `title`
    pub fn new(id: u32, title: impl Into<String>, genres: impl Into<String>) -> Self {
        let title = title.into();
        let clean_title = clean_title(&title);
        Movie {
            id,
            title,
            clean_title,
            genres: genres.into(),
        }
    }
}

/// One user's rating of one movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    pub rating: f64,
}

impl Rating {
    pub fn new(user_id: u32, movie_id: u32, rating: f64) -> Self {
        Rating {
            user_id,
            movie_id,
            rating,
        }
    }
}
