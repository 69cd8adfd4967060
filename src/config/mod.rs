//! User settings.
//!
//! Settings live in an optional YAML file under the platform config
//! directory (`~/.config/lcns/config.yml` on Linux). Command-line flags
//! take precedence over settings, which take precedence over built-in
//! defaults.
//!
//! # Example
//!
//! ```
//! use lcns::config::parse_settings;
//! use std::path::Path;
//!
//! let settings = parse_settings("author: Ada Lovelace\ncache_ttl: 7d\n", Path::new("config.yml")).unwrap();
//! assert_eq!(settings.author.as_deref(), Some("Ada Lovelace"));
//! assert_eq!(settings.cache_ttl().unwrap(), chrono::Duration::days(7));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    config_path, load_settings, load_settings_file, parse_settings, CONFIG_DIR_NAME,
    CONFIG_FILE_NAME,
};
pub use schema::Settings;
