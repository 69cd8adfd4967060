//! License acquisition and customization.
//!
//! - [`placeholder`] - token vocabulary per placeholder category
//! - [`substitute`] - finding and replacing tokens in a license body
//! - [`defaults`] - suggested prompt answers from git and the output path
//! - [`acquire`] - cache/catalog lookup and the per-category fill-in flow

pub mod acquire;
pub mod defaults;
pub mod placeholder;
pub mod substitute;

pub use acquire::{current_year, customize, normalize_key, Acquired, LicenseSource, Overrides};
pub use defaults::{git_config, project_name, PromptDefaults};
pub use placeholder::{PlaceholderCategory, NO_REPLACEMENT};
pub use substitute::{find_present_tokens, replace_all, replace_once, sanitize_for_prompt};
