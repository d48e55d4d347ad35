//! JSON output formatting for recommendations

use crate::commands::recommend::Anchor;
use movierec_core::error::Result;
use movierec_core::recommend::Recommendation;

/// Output in JSON format
pub fn output_json(anchor: &Anchor<'_>, recs: &[Recommendation]) -> Result<()> {
    let mut output = serde_json::json!({
        "movie": {
            "id": anchor.movie.id,
            "title": anchor.movie.title,
            "genres": anchor.movie.genres,
        },
        "recommendations": recs
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.movie_id,
                    "title": r.title,
                    "genres": r.genres,
                    "score": r.score,
                    "similar": r.similar,
                    "all": r.all,
                })
            })
            .collect::<Vec<_>>(),
    });

    if let Some((query, similarity)) = anchor.matched {
        if let Some(obj_mut) = output.as_object_mut() {
            obj_mut.insert(
                "match".to_string(),
                serde_json::json!({ "query": query, "similarity": similarity }),
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
