//! Cache storage implementation.

use chrono::{DateTime, Duration, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::entry::{entries_for_key, parse_created_at, select_entry, suffix_for_key, CacheEntry};
use super::ttl::default_ttl;
use super::CacheError;

/// Storage for cached license bodies.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Root directory for cache.
    root: PathBuf,
    /// Maximum age of an entry that is still served.
    ttl: Duration,
}

impl CacheStore {
    /// Create a new cache store with the default TTL.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ttl: default_ttl(),
        }
    }

    /// Use a different TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store `body` as the only entry for `key`.
    pub fn put(&self, key: &str, body: &str) -> Result<CacheEntry, CacheError> {
        self.put_at(key, body, Utc::now())
    }

    /// Store `body` for `key` stamped with `now`.
    pub fn put_at(
        &self,
        key: &str,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<CacheEntry, CacheError> {
        self.ensure_dir()?;

        // Delete old entries before creating the new one
        self.clean(key);

        let created_at = now.timestamp();
        let path = self.root.join(CacheEntry::file_name(key, created_at));
        debug!("Cache filename: {}", path.display());

        fs::write(&path, body).map_err(|source| CacheError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(CacheEntry {
            key: key.to_string(),
            created_at,
            path,
        })
    }

    /// Read the cached body for `key`.
    pub fn get(&self, key: &str) -> Result<String, CacheError> {
        self.get_at(key, Utc::now())
    }

    /// Read the cached body for `key`, judging freshness at `now`.
    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Result<String, CacheError> {
        let names = self.file_names()?;
        let candidates = entries_for_key(key, names.iter().map(String::as_str));

        let Some(first) = candidates.first() else {
            return Err(CacheError::NotFound {
                key: key.to_string(),
                dir: self.root.clone(),
            });
        };

        if candidates.len() > 1 {
            warn!(
                "Found {} cache entries for {}, using the newest",
                candidates.len(),
                key
            );
        }

        let Some((name, created_at)) = select_entry(key, &candidates) else {
            return Err(CacheError::InvalidEntry {
                path: self.root.join(first),
            });
        };

        let entry = CacheEntry {
            key: key.to_string(),
            created_at,
            path: self.root.join(name),
        };
        if let Some(created) = entry.created_time() {
            debug!("Cache was created at {}", created);
        }

        let age = entry.age_at(now);
        if age < Duration::zero() {
            debug!("Cache entry {} is newer than the clock", entry.path.display());
            return Err(CacheError::InvalidEntry { path: entry.path });
        }
        if age > self.ttl {
            return Err(CacheError::Expired {
                key: key.to_string(),
                age,
                ttl: self.ttl,
            });
        }

        fs::read_to_string(&entry.path).map_err(|source| CacheError::Io {
            path: entry.path.clone(),
            source,
        })
    }

    /// List the entries stored for `key`, in directory order.
    pub fn entries(&self, key: &str) -> Result<Vec<CacheEntry>, CacheError> {
        let names = self.file_names()?;
        Ok(entries_for_key(key, names.iter().map(String::as_str))
            .into_iter()
            .map(|name| CacheEntry {
                key: key.to_string(),
                created_at: suffix_for_key(key, name)
                    .and_then(parse_created_at)
                    .unwrap_or_default(),
                path: self.root.join(name),
            })
            .collect())
    }

    /// Remove every entry for `key`.
    ///
    /// Failures are logged and otherwise ignored. Returns the number of
    /// entries that are gone afterwards.
    pub fn clean(&self, key: &str) -> usize {
        let entries = match self.entries(key) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Failed to list cache entries: {}", e);
                return 0;
            }
        };

        let mut removed = 0;
        for entry in entries {
            debug!("Delete old cache file: {}", entry.path.display());
            match fs::remove_file(&entry.path) {
                Ok(()) => removed += 1,
                // Somebody else got there first
                Err(e) if e.kind() == io::ErrorKind::NotFound => removed += 1,
                Err(e) => debug!(
                    "Failed to delete old cache file {}: {}",
                    entry.path.display(),
                    e
                ),
            }
        }
        removed
    }

    /// Ensure the cache directory exists.
    fn ensure_dir(&self) -> Result<(), CacheError> {
        if self.root.is_dir() {
            return Ok(());
        }
        create_cache_dir(&self.root).map_err(|source| CacheError::Io {
            path: self.root.clone(),
            source,
        })
    }

    /// File names in the cache root. A missing root has no entries.
    fn file_names(&self) -> Result<Vec<String>, CacheError> {
        let read_dir = match fs::read_dir(&self.root) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(CacheError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut names = Vec::new();
        for dir_entry in read_dir.flatten() {
            if !dir_entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            if let Ok(name) = dir_entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}

#[cfg(unix)]
fn create_cache_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_cache_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
