//! CLI commands for movierec

pub mod config;
pub mod dispatch;
pub mod index;
pub mod recommend;
pub mod search;
pub mod session;
pub mod stats;
