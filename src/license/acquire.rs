//! License acquisition and the placeholder fill-in flow.
//!
//! [`LicenseSource::acquire`] resolves a key to a template body, preferring
//! a fresh cache entry and falling back to the catalog. [`customize`] then
//! walks the placeholder categories in order and substitutes values in
//! memory. Nothing is written to the output until both have succeeded.

use chrono::{Datelike, Local};
use tracing::debug;

use crate::cache::CacheStore;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

use super::defaults::PromptDefaults;
use super::placeholder::{PlaceholderCategory, NO_REPLACEMENT};
use super::substitute::{find_present_tokens, replace_all, replace_once, sanitize_for_prompt};

/// Canonical form of a license key: trimmed and lowercase.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Values given up front, so their placeholders are filled without asking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub year: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub project: Option<String>,
}

impl Overrides {
    /// Explicit value for a category.
    pub fn get(&self, category: PlaceholderCategory) -> Option<&str> {
        match category {
            PlaceholderCategory::Year => self.year.as_deref(),
            PlaceholderCategory::Author => self.author.as_deref(),
            PlaceholderCategory::Email => self.email.as_deref(),
            PlaceholderCategory::Project => self.project.as_deref(),
            PlaceholderCategory::Misc => None,
        }
    }
}

/// A license body and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquired {
    pub key: String,
    pub body: String,
    pub from_cache: bool,
}

/// Cache-then-catalog lookup of license bodies.
pub struct LicenseSource<'a> {
    catalog: &'a dyn Catalog,
    cache: Option<&'a CacheStore>,
}

impl<'a> LicenseSource<'a> {
    /// Create a source. Pass `None` as `cache` to bypass caching entirely.
    pub fn new(catalog: &'a dyn Catalog, cache: Option<&'a CacheStore>) -> Self {
        Self { catalog, cache }
    }

    /// Get the template body for `key`.
    ///
    /// Cache problems never fail the lookup: a miss falls through to the
    /// catalog and a failed write leaves the body uncached.
    pub fn acquire(&self, key: &str) -> Result<Acquired> {
        let key = normalize_key(key);

        if let Some(cache) = self.cache {
            match cache.get(&key) {
                Ok(body) => {
                    debug!("Using cached license {}", key);
                    return Ok(Acquired {
                        key,
                        body,
                        from_cache: true,
                    });
                }
                Err(e) => debug!("Failed to get cache: {}", e),
            }
        }

        let license = self.catalog.fetch_license(&key)?;

        if let Some(cache) = self.cache {
            match cache.put(&key, &license.body) {
                Ok(entry) => debug!("Cached license at {}", entry.path.display()),
                Err(e) => debug!("Failed to save cache: {}", e),
            }
        }

        Ok(Acquired {
            key,
            body: license.body,
            from_cache: false,
        })
    }
}

/// Current four-digit year in local time.
pub fn current_year() -> String {
    Local::now().year().to_string()
}

/// Fill the placeholders of `body`.
///
/// Year placeholders take the override or the current year. Author, email
/// and project placeholders take the override, or else one prompt per
/// category. Each misc placeholder gets its own prompt and replaces its
/// first occurrence only. Answering with the no-replacement default skips.
pub fn customize(
    body: &str,
    overrides: &Overrides,
    defaults: &PromptDefaults,
    ui: &mut dyn UserInterface,
) -> Result<String> {
    let mut body = body.to_string();

    let year = overrides
        .get(PlaceholderCategory::Year)
        .map(str::to_string)
        .unwrap_or_else(current_year);
    for token in find_present_tokens(&body, PlaceholderCategory::Year.tokens()) {
        report(ui, token, &year);
        body = replace_all(&body, token, &year);
    }

    for category in [
        PlaceholderCategory::Author,
        PlaceholderCategory::Email,
        PlaceholderCategory::Project,
    ] {
        let tokens = find_present_tokens(&body, category.tokens());
        if tokens.is_empty() {
            continue;
        }

        let answer = match overrides.get(category) {
            Some(value) => value.to_string(),
            None => {
                let default = defaults.get(category).unwrap_or(NO_REPLACEMENT);
                let prompt = Prompt::input(category.as_str(), question(category), default);
                ui.prompt(&prompt)?.as_string()
            }
        };
        if answer == NO_REPLACEMENT {
            debug!("Leaving {} placeholders as they are", category);
            continue;
        }

        for token in tokens {
            report(ui, token, &answer);
            body = replace_all(&body, token, &answer);
        }
    }

    for token in find_present_tokens(&body, PlaceholderCategory::Misc.tokens()) {
        let query = format!("Input \"{}\"", sanitize_for_prompt(token));
        let prompt = Prompt::input(PlaceholderCategory::Misc.as_str(), &query, NO_REPLACEMENT);
        let answer = ui.prompt(&prompt)?.as_string();
        if answer == NO_REPLACEMENT {
            continue;
        }

        report(ui, token, &answer);
        body = replace_once(&body, token, &answer);
    }

    Ok(body)
}

fn question(category: PlaceholderCategory) -> &'static str {
    match category {
        PlaceholderCategory::Author => "Input fullname of author",
        PlaceholderCategory::Email => "Input email",
        PlaceholderCategory::Project => "Input project name",
        PlaceholderCategory::Year | PlaceholderCategory::Misc => "Input value",
    }
}

fn report(ui: &mut dyn UserInterface, token: &str, value: &str) {
    ui.message(&format!(
        "----> Replace placeholder \"{}\" to \"{}\" in LICENSE body",
        token, value
    ));
}
