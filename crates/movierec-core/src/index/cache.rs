//! On-disk cache for a fitted [`TitleIndex`]
//!
//! The cache file records a format version and the fingerprint of the movie
//! collection it was built from. A version or fingerprint mismatch means the
//! cache is stale and the index is rebuilt.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::TitleIndex;
use crate::error::{RecError, Result};
use crate::model::Movie;

pub const INDEX_VERSION: u32 = 2;
pub const INDEX_FILE: &str = "title_index.json";

#[derive(Debug, Serialize, Deserialize)]
struct CachedIndex {
    version: u32,
    index: TitleIndex,
}

/// Where an index handed out by [`load_or_build`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSource {
    Cache,
    Built,
}

impl TitleIndex {
    /// Write the index to `cache_dir`, creating the directory if needed
    pub fn save(&self, cache_dir: &Path) -> Result<()> {
        fs::create_dir_all(cache_dir)
            .map_err(|e| RecError::io_operation("create cache directory", cache_dir.display(), e))?;

        let path = cache_dir.join(INDEX_FILE);
        let cached = CachedIndex {
            version: INDEX_VERSION,
            index: self.clone(),
        };
        let content = serde_json::to_string(&cached)?;
        fs::write(&path, content)
            .map_err(|e| RecError::io_operation("write index cache", path.display(), e))?;

        info!(path = %path.display(), rows = self.len(), "title_index_saved");
        Ok(())
    }

    /// Read a cached index; `None` if absent, written by another version, or
    /// internally inconsistent
    pub fn load(cache_dir: &Path) -> Result<Option<Self>> {
        let path = cache_dir.join(INDEX_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let cached: CachedIndex = serde_json::from_str(&content)?;

        if cached.version != INDEX_VERSION {
            debug!(
                found = cached.version,
                expected = INDEX_VERSION,
                "index_cache_version_mismatch"
            );
            return Ok(None);
        }

        if !cached.index.is_consistent() {
            debug!(path = %path.display(), "index_cache_inconsistent");
            return Ok(None);
        }

        Ok(Some(cached.index))
    }
}

/// Reuse the cached index when it was built from exactly `movies`, otherwise
/// build a fresh one. The fresh index is not written back; callers decide.
pub fn load_or_build(cache_dir: &Path, movies: &[Movie]) -> Result<(TitleIndex, IndexSource)> {
    // An unreadable cache is treated as stale rather than fatal
    let cached = match TitleIndex::load(cache_dir) {
        Ok(cached) => cached,
        Err(e) => {
            debug!(error = %e, "index_cache_unreadable");
            None
        }
    };

    if let Some(index) = cached {
        if index.matches(movies) {
            debug!(fingerprint = index.fingerprint(), "index_cache_hit");
            return Ok((index, IndexSource::Cache));
        }
        debug!("index_cache_stale");
    }

    Ok((TitleIndex::build(movies), IndexSource::Built))
}
