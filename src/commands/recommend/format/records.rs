//! Records output formatting for recommendations

use crate::commands::recommend::Anchor;
use movierec_core::records::{escape_quotes, fixed};
use movierec_core::recommend::Recommendation;

/// Output in records format
pub fn output_records(anchor: &Anchor<'_>, recs: &[Recommendation]) {
    match anchor.matched {
        Some((query, similarity)) => {
            println!(
                "H movierec=1 records=1 mode=recommend query=\"{}\" results={}",
                escape_quotes(query),
                recs.len()
            );
            println!(
                "M {} similarity={} \"{}\" genres=\"{}\"",
                anchor.movie.id,
                fixed(similarity),
                escape_quotes(&anchor.movie.title),
                escape_quotes(&anchor.movie.genres)
            );
        }
        None => {
            println!(
                "H movierec=1 records=1 mode=similar movie={} results={}",
                anchor.movie.id,
                recs.len()
            );
        }
    }

    for rec in recs {
        println!(
            "R {} score={} similar={} all={} \"{}\" genres=\"{}\"",
            rec.movie_id,
            fixed(rec.score),
            fixed(rec.similar),
            fixed(rec.all),
            escape_quotes(&rec.title),
            escape_quotes(&rec.genres)
        );
    }
}
