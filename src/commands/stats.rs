//! `movierec stats` command - dataset counts

use crate::cli::{Cli, OutputFormat};
use crate::commands::session::Session;
use movierec_core::error::Result;
use movierec_core::records::escape_quotes;

/// Execute the stats command
pub fn execute(cli: &Cli, session: &Session) -> Result<()> {
    let dataset = session.dataset()?;
    let stats = dataset.stats();

    match cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::to_value(stats)?;
            if let Some(obj_mut) = output.as_object_mut() {
                obj_mut.insert(
                    "data_dir".to_string(),
                    serde_json::json!(dataset.dir().display().to_string()),
                );
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Data:         {}", dataset.dir().display());
            println!("Movies:       {}", stats.movies);
            println!("Ratings:      {}", stats.ratings);
            println!("Users:        {}", stats.users);
            println!("Rated movies: {}", stats.rated_movies);
        }
        OutputFormat::Records => {
            println!(
                "H movierec=1 records=1 mode=stats data_dir=\"{}\" movies={} ratings={} users={} rated_movies={}",
                escape_quotes(&dataset.dir().display().to_string()),
                stats.movies,
                stats.ratings,
                stats.users,
                stats.rated_movies
            );
        }
    }

    Ok(())
}
