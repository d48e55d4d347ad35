//! `movierec index` command - build the title index cache

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::session::Session;
use movierec_core::bail_usage;
use movierec_core::error::Result;
use movierec_core::index::cache::INDEX_FILE;
use movierec_core::index::TitleIndex;
use movierec_core::records::escape_quotes;

/// Execute the index command
pub fn execute(cli: &Cli, session: &Session, rebuild: bool) -> Result<()> {
    if cli.no_cache {
        bail_usage!("`index` writes the cache and cannot run with --no-cache");
    }

    let start = Instant::now();
    let dataset = session.movies()?;
    let cache_dir = session.cache_dir();

    let current = if rebuild {
        None
    } else {
        // An unreadable cache is rebuilt
        TitleIndex::load(&cache_dir)
            .ok()
            .flatten()
            .filter(|index| index.matches(dataset.movies()))
    };

    let (index, status) = match current {
        Some(index) => (index, "current"),
        None => {
            let index = TitleIndex::build(dataset.movies());
            index.save(&cache_dir)?;
            (index, "built")
        }
    };

    debug!(status, rows = index.len(), elapsed = ?start.elapsed(), "index");

    let path = cache_dir.join(INDEX_FILE);
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": status,
                "rows": index.len(),
                "vocabulary": index.vocabulary_size(),
                "fingerprint": index.fingerprint(),
                "path": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                let verb = if status == "built" { "Indexed" } else { "Up to date:" };
                println!(
                    "{} {} titles ({} terms) in {}",
                    verb,
                    index.len(),
                    index.vocabulary_size(),
                    path.display()
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "H movierec=1 records=1 mode=index status={} rows={} vocabulary={} path=\"{}\"",
                status,
                index.len(),
                index.vocabulary_size(),
                escape_quotes(&path.display().to_string())
            );
        }
    }

    Ok(())
}
