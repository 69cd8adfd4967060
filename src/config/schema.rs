//! User settings schema.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cache::{default_ttl, parse_ttl};
use crate::license::Overrides;

/// Contents of the user settings file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Value for author placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Value for email placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Value for project placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Default output path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Cache lifetime, e.g. "30d", "12h".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl: Option<String>,

    /// Never read or write the cache.
    #[serde(skip_serializing_if = "is_false")]
    pub no_cache: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Settings {
    /// Cache TTL, falling back to the default when unset.
    pub fn cache_ttl(&self) -> anyhow::Result<Duration> {
        match &self.cache_ttl {
            Some(ttl) => {
                let parsed = parse_ttl(ttl)
                    .map_err(|e| anyhow::anyhow!("invalid cache_ttl {:?}: {}", ttl, e))?;
                if parsed <= Duration::zero() {
                    anyhow::bail!("invalid cache_ttl {:?}: must be positive", ttl);
                }
                Ok(parsed)
            }
            None => Ok(default_ttl()),
        }
    }

    /// Fill gaps in command-line overrides from these settings.
    ///
    /// Values already present in `overrides` win.
    pub fn apply_to(&self, overrides: Overrides) -> Overrides {
        Overrides {
            year: overrides.year,
            author: overrides.author.or_else(|| self.author.clone()),
            email: overrides.email.or_else(|| self.email.clone()),
            project: overrides.project.or_else(|| self.project.clone()),
        }
    }
}
