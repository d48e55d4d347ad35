//! Resolved data directory and configuration shared by every command

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};

use crate::cli::Cli;
use movierec_core::config::{Config, DEFAULT_DATA_DIR};
use movierec_core::dataset::Dataset;
use movierec_core::error::Result;
use movierec_core::index::cache::{self, IndexSource};
use movierec_core::index::TitleIndex;
use movierec_core::trace_time;

pub struct Session {
    data_dir: PathBuf,
    config: Config,
    use_cache: bool,
}

impl Session {
    pub fn open(cli: &Cli) -> Result<Self> {
        let data_dir = cli
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let config = Config::resolve(cli.config.as_deref(), &data_dir)?;

        debug!(data_dir = %data_dir.display(), "session_open");

        Ok(Session {
            data_dir,
            config,
            use_cache: !cli.no_cache,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.config.cache_dir(&self.data_dir)
    }

    /// Movies and ratings
    pub fn dataset(&self) -> Result<Dataset> {
        Dataset::load(&self.data_dir, &self.config.dataset)
    }

    /// Movies only
    pub fn movies(&self) -> Result<Dataset> {
        Dataset::load_movies_only(&self.data_dir, &self.config.dataset)
    }

    /// Title index for `dataset`, reusing and refreshing the cache unless
    /// caching is disabled. A failed cache write only warns.
    pub fn title_index(&self, dataset: &Dataset) -> Result<TitleIndex> {
        let start = Instant::now();

        if !self.use_cache {
            return Ok(TitleIndex::build(dataset.movies()));
        }

        let cache_dir = self.cache_dir();
        let (index, source) = cache::load_or_build(&cache_dir, dataset.movies())?;
        if source == IndexSource::Built {
            if let Err(e) = index.save(&cache_dir) {
                warn!(error = %e, "index_cache_write_failed");
            }
        }

        trace_time!(start, "title_index", rows = index.len());
        Ok(index)
    }
}
