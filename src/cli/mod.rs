//! CLI argument parsing for movierec
//!
//! Uses clap for argument parsing.
//! Supports global flags: --data-dir, --config, --format, --quiet, --verbose

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::CohortArgs;
pub use output::OutputFormat;

/// movierec - find movies by title and recommend what their fans also loved
#[derive(Parser, Debug)]
#[command(name = "movierec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding movies.csv and ratings.csv
    #[arg(long, global = true, env = "MOVIEREC_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (default: <data-dir>/movierec.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = output::format_parser())]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "movierec_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Neither read nor write the title index cache
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search movie titles
    Search {
        /// Title to look for
        query: String,

        /// Number of matches to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Recommend movies related to a movie id
    ///
    /// The movie itself is left out of its own recommendations unless
    /// --include-target is given.
    Similar {
        /// MovieLens movie id
        movie_id: u32,

        #[command(flatten)]
        cohort: CohortArgs,
    },

    /// Search a title and recommend movies related to the best match
    ///
    /// The matched movie is left out of its own recommendations unless
    /// --include-target is given.
    Recommend {
        /// Title to look for
        title: String,

        #[command(flatten)]
        cohort: CohortArgs,
    },

    /// Build the title index cache
    Index {
        /// Rebuild even when the cache is current
        #[arg(long)]
        rebuild: bool,
    },

    /// Show dataset counts
    Stats,

    /// Print the effective configuration
    Config,
}
