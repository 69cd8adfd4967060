//! Version checking against the latest release.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Program name shown in version output.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Current version of lcns.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GitHub API URL for the latest release.
pub const RELEASES_URL: &str = "https://api.github.com/repos/lcns-dev/lcns/releases/latest";

/// Environment variable overriding [`RELEASES_URL`].
pub const RELEASES_URL_ENV: &str = "LCNS_RELEASES_URL";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// A release newer than the running binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    /// Latest released version.
    pub latest: String,
    /// Release page.
    pub release_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    html_url: Option<String>,
}

/// Release endpoint, honouring the environment override.
pub fn releases_url() -> String {
    std::env::var(RELEASES_URL_ENV).unwrap_or_else(|_| RELEASES_URL.to_string())
}

/// Ask `url` for the latest release.
///
/// Returns `Ok(None)` when the running version is current.
pub fn fetch_latest_version(url: &str) -> Result<Option<UpdateInfo>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(NAME)
        .timeout(HTTP_TIMEOUT)
        .build()?;

    debug!("Checking latest release at {}", url);
    let release: Release = client
        .get(url)
        .send()?
        .error_for_status()?
        .json()
        .context("Failed to parse release response")?;

    let latest = release.tag_name.trim_start_matches('v');
    if !is_newer_version(latest, VERSION) {
        return Ok(None);
    }

    Ok(Some(UpdateInfo {
        latest: latest.to_string(),
        release_url: release.html_url,
    }))
}

/// Compare versions to check if `latest` is newer than `current`.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    let parse = |v: &str| -> Vec<u32> {
        v.split('.')
            .take(3)
            .filter_map(|s| s.parse().ok())
            .collect()
    };

    let latest_parts = parse(latest);
    let current_parts = parse(current);

    for (l, c) in latest_parts.iter().zip(current_parts.iter()) {
        if l != c {
            return l > c;
        }
    }

    latest_parts.len() > current_parts.len()
}
