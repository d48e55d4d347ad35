//! Human-readable output formatting for search command

use crate::cli::Cli;
use movierec_core::index::TitleMatch;

/// Output in human-readable format
pub fn output_human(cli: &Cli, results: &[TitleMatch], query: &str) {
    if results.is_empty() {
        if !cli.quiet {
            println!("No movies found for '{}'", query);
        }
        return;
    }

    for result in results {
        println!(
            "{:>7}  {:.3}  {}",
            result.movie_id, result.similarity, result.title
        );
        if cli.verbose {
            println!("         {}", result.genres);
        }
    }
}
