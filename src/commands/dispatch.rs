//! Command dispatch logic for movierec
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::session::Session;
use movierec_core::bail_usage;
use movierec_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let command = match &cli.command {
        Some(command) => command,
        None => bail_usage!("no command given (try `movierec --help`)"),
    };

    let session = Session::open(cli)?;
    debug!(elapsed = ?start.elapsed(), "resolve_session");

    let result = match command {
        Commands::Search { query, limit } => {
            let top_k = limit.unwrap_or(session.config().search.top_k);
            commands::search::execute(cli, &session, query, top_k)
        }

        Commands::Similar { movie_id, cohort } => {
            let params = cohort.resolve(&session.config().recommend);
            commands::recommend::execute_similar(cli, &session, *movie_id, &params)
        }

        Commands::Recommend { title, cohort } => {
            let params = cohort.resolve(&session.config().recommend);
            commands::recommend::execute_recommend(cli, &session, title, &params)
        }

        Commands::Index { rebuild } => commands::index::execute(cli, &session, *rebuild),

        Commands::Stats => commands::stats::execute(cli, &session),

        Commands::Config => commands::config::execute(cli, &session),
    };

    debug!(elapsed = ?start.elapsed(), "command_done");
    result
}
