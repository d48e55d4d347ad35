//! Records output formatting for search command

use movierec_core::index::TitleMatch;
use movierec_core::records::{escape_quotes, fixed};

/// Output in records format
pub fn output_records(results: &[TitleMatch], query: &str) {
    println!(
        "H movierec=1 records=1 mode=search query=\"{}\" results={}",
        escape_quotes(query),
        results.len()
    );

    for result in results {
        println!(
            "M {} similarity={} \"{}\" genres=\"{}\"",
            result.movie_id,
            fixed(result.similarity),
            escape_quotes(&result.title),
            escape_quotes(&result.genres)
        );
    }
}
