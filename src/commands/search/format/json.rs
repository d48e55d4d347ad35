//! JSON output formatting for search command

use movierec_core::error::Result;
use movierec_core::index::TitleMatch;

/// Output in JSON format
pub fn output_json(results: &[TitleMatch]) -> Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.movie_id,
                "title": r.title,
                "clean_title": r.clean_title,
                "genres": r.genres,
                "similarity": r.similarity,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
