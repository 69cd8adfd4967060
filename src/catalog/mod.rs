//! License catalog.
//!
//! The catalog knows which licenses exist and hands out their template
//! bodies. [`GithubCatalog`] talks to the GitHub REST `licenses` endpoints;
//! [`MemoryCatalog`] serves a fixed set from memory.

pub mod github;
pub mod memory;

pub use github::{GithubCatalog, DEFAULT_API_URL};
pub use memory::MemoryCatalog;

use serde::Deserialize;

use crate::error::Result;

/// One row of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LicenseSummary {
    /// Key used to fetch the license (e.g. `mit`).
    pub key: String,
    /// Human-readable name (e.g. `MIT License`).
    pub name: String,
}

/// A license template as served by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct License {
    /// Key used to fetch the license.
    pub key: String,
    /// Human-readable name.
    pub name: String,
    /// Template text, placeholders included.
    pub body: String,
}

/// Source of license templates.
pub trait Catalog {
    /// List every available license, in catalog order.
    fn list_licenses(&self) -> Result<Vec<LicenseSummary>>;

    /// Fetch one license by key.
    fn fetch_license(&self, key: &str) -> Result<License>;
}
