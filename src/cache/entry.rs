//! Cache entry naming and selection.
//!
//! Entries are plain files named `<key>-<unix seconds>`. Everything here
//! works on file names only, so matching and selection can be tested
//! without touching the filesystem.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::path::PathBuf;

/// Separator between the license key and the timestamp in a file name.
pub const SEPARATOR: char = '-';

/// A cached license body on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// License key the entry belongs to.
    pub key: String,
    /// Unix timestamp (seconds) recorded in the file name.
    pub created_at: i64,
    /// Path to the cached body.
    pub path: PathBuf,
}

impl CacheEntry {
    /// Build the file name for `key` created at `created_at`.
    pub fn file_name(key: &str, created_at: i64) -> String {
        format!("{}{}{}", key, SEPARATOR, created_at)
    }

    /// Creation time as a UTC timestamp.
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.created_at, 0).single()
    }

    /// Age of the entry relative to `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        Duration::seconds(now.timestamp() - self.created_at)
    }

    /// Whether the entry is older than `ttl` at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}

/// Return the timestamp field of `name` if the name belongs to `key`.
///
/// The timestamp is the last separator-delimited field, and everything
/// before it must equal the key exactly. `apache-2.0-1700000000` is an
/// entry of `apache-2.0`, never of `apache`.
pub fn suffix_for_key<'a>(key: &str, name: &'a str) -> Option<&'a str> {
    let (head, tail) = name.rsplit_once(SEPARATOR)?;
    (head == key).then_some(tail)
}

/// File names in `names` that are entries of `key`, in listing order.
pub fn entries_for_key<'a, I>(key: &str, names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| suffix_for_key(key, name).is_some())
        .collect()
}

/// Parse a timestamp field. Only plain decimal digits are accepted.
pub fn parse_created_at(suffix: &str) -> Option<i64> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Choose which of `candidates` to read.
///
/// Picks the newest parseable timestamp, breaking ties by name. Returns
/// `None` when no candidate carries a valid timestamp. A timestamp in the
/// future is still selected; the store rejects it when judging its age.
pub fn select_entry<'a>(key: &str, candidates: &[&'a str]) -> Option<(&'a str, i64)> {
    candidates
        .iter()
        .filter_map(|name| {
            let created = parse_created_at(suffix_for_key(key, name)?)?;
            Some((*name, created))
        })
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
}
