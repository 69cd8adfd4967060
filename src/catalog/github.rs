//! GitHub licenses API client.

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

use super::{Catalog, License, LicenseSummary};
use crate::error::{LcnsError, Result};

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Fetches license templates from the GitHub REST API.
pub struct GithubCatalog {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl GithubCatalog {
    /// Create a client for the public GitHub API with a 30-second timeout.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Create a client for another API root (GitHub Enterprise, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let timeout = Duration::from_secs(30);
        Self {
            client: Client::builder()
                .user_agent("lcns")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Get the API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        self.client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|e| LcnsError::CatalogUnavailable {
                message: format!("failed to fetch {}: {}", url, e),
            })
    }
}

impl Default for GithubCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for GithubCatalog {
    fn list_licenses(&self) -> Result<Vec<LicenseSummary>> {
        let response = self.get("/licenses")?;

        if !response.status().is_success() {
            return Err(unavailable(response.status()));
        }

        response
            .json()
            .map_err(|e| LcnsError::CatalogUnavailable {
                message: format!("invalid license list: {}", e),
            })
    }

    fn fetch_license(&self, key: &str) -> Result<License> {
        debug!("Fetch license from GitHub API by key: {}", key);
        let response = self.get(&format!("/licenses/{}", key))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(LcnsError::LicenseNotFound {
                    key: key.to_string(),
                })
            }
            status if !status.is_success() => return Err(unavailable(status)),
            _ => {}
        }

        let license: License = response.json().map_err(|e| LcnsError::CatalogUnavailable {
            message: format!("invalid license {}: {}", key, e),
        })?;
        debug!("Fetched license name: {}", license.name);

        Ok(license)
    }
}

fn unavailable(status: StatusCode) -> LcnsError {
    LcnsError::CatalogUnavailable {
        message: format!("invalid status code from GitHub: {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn default_points_at_public_api() {
        let catalog = GithubCatalog::default();
        assert_eq!(catalog.base_url(), DEFAULT_API_URL);
        assert_eq!(catalog.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let catalog = GithubCatalog::with_base_url("http://localhost:1234/");
        assert_eq!(catalog.base_url(), "http://localhost:1234");
    }

    #[test]
    fn lists_licenses_in_catalog_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/licenses");
            then.status(200).json_body(json!([
                {"key": "agpl-3.0", "name": "GNU Affero General Public License v3.0", "spdx_id": "AGPL-3.0"},
                {"key": "mit", "name": "MIT License", "spdx_id": "MIT"}
            ]));
        });

        let catalog = GithubCatalog::with_base_url(server.base_url());
        let list = catalog.list_licenses().unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].key, "agpl-3.0");
        assert_eq!(list[1].name, "MIT License");
    }

    #[test]
    fn list_failure_status_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/licenses");
            then.status(503);
        });

        let catalog = GithubCatalog::with_base_url(server.base_url());
        let err = catalog.list_licenses().unwrap_err();

        assert!(matches!(err, LcnsError::CatalogUnavailable { .. }));
    }

    #[test]
    fn fetches_license_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/licenses/mit");
            then.status(200).json_body(json!({
                "key": "mit",
                "name": "MIT License",
                "body": "Copyright (c) [year] [fullname]\n"
            }));
        });

        let catalog = GithubCatalog::with_base_url(server.base_url());
        let license = catalog.fetch_license("mit").unwrap();

        mock.assert();
        assert_eq!(license.name, "MIT License");
        assert_eq!(license.body, "Copyright (c) [year] [fullname]\n");
    }

    #[test]
    fn missing_license_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/licenses/nope");
            then.status(404).json_body(json!({"message": "Not Found"}));
        });

        let catalog = GithubCatalog::with_base_url(server.base_url());
        let err = catalog.fetch_license("nope").unwrap_err();

        assert!(matches!(err, LcnsError::LicenseNotFound { key } if key == "nope"));
    }

    #[test]
    fn server_error_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/licenses/mit");
            then.status(500);
        });

        let catalog = GithubCatalog::with_base_url(server.base_url());
        let err = catalog.fetch_license("mit").unwrap_err();

        assert!(matches!(err, LcnsError::CatalogUnavailable { .. }));
    }

    #[test]
    fn unreachable_host_is_unavailable() {
        // Port 9 (discard) is not expected to serve HTTP
        let catalog = GithubCatalog::with_base_url("http://127.0.0.1:9");
        let err = catalog.fetch_license("mit").unwrap_err();

        assert!(matches!(err, LcnsError::CatalogUnavailable { .. }));
    }
}
