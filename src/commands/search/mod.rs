//! `movierec search` command - rank movie titles against a query

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::session::Session;
use movierec_core::error::Result;

use self::format::{output_human, output_json, output_records};

/// Execute the search command
pub fn execute(cli: &Cli, session: &Session, query: &str, top_k: usize) -> Result<()> {
    let start = Instant::now();

    let dataset = session.movies()?;
    let index = session.title_index(&dataset)?;
    let results = index.search(query, top_k)?;

    debug!(query, top_k, result_count = results.len(), elapsed = ?start.elapsed(), "search");

    match cli.format {
        OutputFormat::Json => output_json(&results)?,
        OutputFormat::Human => output_human(cli, &results, query),
        OutputFormat::Records => output_records(&results, query),
    }

    Ok(())
}
