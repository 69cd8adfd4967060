//! In-memory catalog.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{LcnsError, Result};

use super::{Catalog, License, LicenseSummary};

/// A fixed set of licenses held in memory.
///
/// Useful for tests and offline use. An unavailable catalog fails every
/// call the way an unreachable server would.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    licenses: Vec<License>,
    unavailable: bool,
    fetches: AtomicUsize,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog whose every call fails with `CatalogUnavailable`.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Add a license, keeping insertion order for listings.
    pub fn with_license(mut self, key: &str, name: &str, body: &str) -> Self {
        self.licenses.push(License {
            key: key.to_string(),
            name: name.to_string(),
            body: body.to_string(),
        });
        self
    }

    /// Number of `fetch_license` calls so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(LcnsError::CatalogUnavailable {
                message: "catalog is offline".to_string(),
            });
        }
        Ok(())
    }
}

impl Catalog for MemoryCatalog {
    fn list_licenses(&self) -> Result<Vec<LicenseSummary>> {
        self.check_available()?;
        Ok(self
            .licenses
            .iter()
            .map(|l| LicenseSummary {
                key: l.key.clone(),
                name: l.name.clone(),
            })
            .collect())
    }

    fn fetch_license(&self, key: &str) -> Result<License> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        self.licenses
            .iter()
            .find(|l| l.key == key)
            .cloned()
            .ok_or_else(|| LcnsError::LicenseNotFound {
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_in_insertion_order() {
        let catalog = MemoryCatalog::new()
            .with_license("mit", "MIT License", "body")
            .with_license("apache-2.0", "Apache License 2.0", "body");

        let keys: Vec<_> = catalog
            .list_licenses()
            .unwrap()
            .into_iter()
            .map(|l| l.key)
            .collect();
        assert_eq!(keys, vec!["mit", "apache-2.0"]);
    }

    #[test]
    fn fetch_counts_calls() {
        let catalog = MemoryCatalog::new().with_license("mit", "MIT License", "text");

        assert_eq!(catalog.fetch_license("mit").unwrap().body, "text");
        assert!(matches!(
            catalog.fetch_license("gpl-3.0"),
            Err(LcnsError::LicenseNotFound { .. })
        ));
        assert_eq!(catalog.fetch_count(), 2);
    }

    #[test]
    fn unavailable_catalog_fails() {
        let catalog = MemoryCatalog::unavailable();
        assert!(matches!(
            catalog.list_licenses(),
            Err(LcnsError::CatalogUnavailable { .. })
        ));
        assert!(matches!(
            catalog.fetch_license("mit"),
            Err(LcnsError::CatalogUnavailable { .. })
        ));
    }
}
