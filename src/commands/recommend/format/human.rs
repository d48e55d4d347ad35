//! Human-readable output formatting for recommendations

use crate::cli::Cli;
use crate::commands::recommend::Anchor;
use movierec_core::recommend::Recommendation;

/// Output in human-readable format
pub fn output_human(cli: &Cli, anchor: &Anchor<'_>, recs: &[Recommendation]) {
    if !cli.quiet {
        if let Some((query, similarity)) = anchor.matched {
            println!(
                "Best match for '{}': {} ({:.3})",
                query, anchor.movie.title, similarity
            );
        }
    }

    if recs.is_empty() {
        if !cli.quiet {
            println!("No recommendations for '{}'", anchor.movie.title);
        }
        return;
    }

    if !cli.quiet {
        println!(
            "Recommendations for {} [{}]:",
            anchor.movie.title, anchor.movie.id
        );
    }

    for (rank, rec) in recs.iter().enumerate() {
        println!("{:>3}. {:>7.2}  {}", rank + 1, rec.score, rec.title);
        if cli.verbose {
            println!(
                "              {} (similar {:.3}, all {:.3})",
                rec.genres, rec.similar, rec.all
            );
        }
    }
}
