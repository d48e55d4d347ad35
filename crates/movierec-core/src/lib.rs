//! movierec core library
//!
//! Title search over MovieLens titles (TF-IDF, cosine similarity) and
//! cohort-based scoring of related movies from user ratings.

pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod model;
pub mod recommend;
pub mod records;
pub mod similarity;
pub mod text;
