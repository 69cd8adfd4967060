//! License body cache.
//!
//! Fetched license bodies are kept on disk under `~/.lcns`, one file per
//! license key, named `<key>-<unix seconds>`. Freshness is checked when an
//! entry is read; only writes remove files.

pub mod entry;
pub mod store;
pub mod ttl;

pub use entry::{entries_for_key, CacheEntry, SEPARATOR};
pub use store::CacheStore;
pub use ttl::{default_ttl, format_duration, parse_ttl};

use std::path::PathBuf;
use thiserror::Error;

/// Name of the cache directory inside the home directory.
pub const CACHE_DIR_NAME: &str = ".lcns";

/// Get the default cache directory.
///
/// Returns `None` when no home directory can be determined, in which case
/// the caller runs without a cache.
pub fn default_cache_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CACHE_DIR_NAME))
}

/// Reasons a cache read or write did not succeed.
///
/// Every variant is recoverable: a failed read falls back to the catalog
/// and a failed write leaves the run uncached.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No entry exists for the key.
    #[error("no cache entry for {key} in {}", dir.display())]
    NotFound { key: String, dir: PathBuf },

    /// The entry's file name does not end in a Unix timestamp, or the
    /// timestamp lies in the future.
    #[error("invalid cache file name: {}", path.display())]
    InvalidEntry { path: PathBuf },

    /// The entry is older than the cache TTL.
    #[error("cache entry for {key} is too old ({} > {})", format_duration(*age), format_duration(*ttl))]
    Expired {
        key: String,
        age: chrono::Duration,
        ttl: chrono::Duration,
    },

    /// Filesystem failure while reading or writing an entry.
    #[error("cache IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
