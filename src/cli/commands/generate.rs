//! Generate command implementation.
//!
//! `lcns [KEY]` resolves a license, fills in its placeholders and writes
//! the result to the output file in one go.

use chrono::Duration;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cache::{default_cache_dir, CacheStore};
use crate::catalog::Catalog;
use crate::cli::args::Cli;
use crate::config::Settings;
use crate::error::{LcnsError, Result};
use crate::license::{customize, normalize_key, LicenseSource, Overrides, PromptDefaults};
use crate::ui::{choose, Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::list::fetch_list;

/// Output file used when neither a flag nor the settings name one.
pub const DEFAULT_OUTPUT: &str = "LICENSE";

/// License offered as the default in the numbered catalog menu.
pub const DEFAULT_KEY: &str = "mit";

/// Everything the generate command needs, resolved from flags and settings.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Normalized license key; `None` asks the operator.
    pub key: Option<String>,
    /// Output file.
    pub output: PathBuf,
    /// Cache directory; `None` runs without a cache.
    pub cache_dir: Option<PathBuf>,
    /// Cache TTL.
    pub cache_ttl: Duration,
    /// Overwrite an existing output file.
    pub force: bool,
    /// Skip placeholder substitution.
    pub raw: bool,
    /// Use the guided menu when no key is given.
    pub choose: bool,
    /// Values that skip their prompts.
    pub overrides: Overrides,
}

impl GenerateOptions {
    /// Combine command-line flags with user settings. Flags win.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Self> {
        let key = match cli.key.as_deref().map(normalize_key) {
            Some(key) if key.is_empty() => {
                return Err(LcnsError::InvalidArguments {
                    message: "license key is empty".to_string(),
                })
            }
            key => key,
        };

        if let Some(year) = &cli.year {
            if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
                return Err(LcnsError::InvalidArguments {
                    message: format!("--year must be a number, got {:?}", year),
                });
            }
        }

        let cache_dir = if cli.no_cache || settings.no_cache {
            debug!("Cache disabled");
            None
        } else {
            let dir = default_cache_dir();
            if dir.is_none() {
                debug!("Failed to get home directory; running without cache");
            }
            dir
        };

        let output = cli
            .output
            .clone()
            .or_else(|| settings.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let overrides = settings.apply_to(Overrides {
            year: cli.year.clone(),
            author: cli.author.clone(),
            email: cli.email.clone(),
            project: cli.project.clone(),
        });

        Ok(Self {
            key,
            output,
            cache_dir,
            cache_ttl: settings.cache_ttl()?,
            force: cli.force,
            raw: cli.raw,
            choose: cli.choose,
            overrides,
        })
    }
}

/// The generate command implementation.
pub struct GenerateCommand<'a> {
    catalog: &'a dyn Catalog,
    options: GenerateOptions,
    defaults: Option<PromptDefaults>,
}

impl<'a> GenerateCommand<'a> {
    /// Create a new generate command.
    pub fn new(catalog: &'a dyn Catalog, options: GenerateOptions) -> Self {
        Self {
            catalog,
            options,
            defaults: None,
        }
    }

    /// Use fixed prompt defaults instead of asking git.
    pub fn with_defaults(mut self, defaults: PromptDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Get the resolved options.
    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Ask the operator which license to generate.
    fn select_key(&self, ui: &mut dyn UserInterface) -> Result<String> {
        if self.options.choose {
            debug!("Choose a license like choosealicense.com");
            if let Some(key) = choose(ui)? {
                return Ok(key);
            }
        }

        debug!("Show all licenses available and ask to select");
        let licenses = fetch_list(self.catalog, ui)?;

        if licenses.is_empty() {
            return Err(LcnsError::CatalogUnavailable {
                message: "catalog returned no licenses".to_string(),
            });
        }

        let mut menu = String::from("Which of the following do you want to use?");
        for (i, license) in licenses.iter().enumerate() {
            menu.push_str(&format!("\n  {:2}) {}", i + 1, license.name));
        }
        ui.message(&menu);

        let default = licenses
            .iter()
            .position(|l| l.key == DEFAULT_KEY)
            .map_or(1, |i| i + 1);
        let answer = ui.prompt(&Prompt::number("license", licenses.len(), default))?;
        let choice = answer.as_number().unwrap_or(default);

        choice
            .checked_sub(1)
            .and_then(|i| licenses.get(i))
            .map(|l| l.key.clone())
            .ok_or_else(|| anyhow::anyhow!("choice {} is out of range", choice).into())
    }
}

impl Command for GenerateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let opts = &self.options;

        // Fail before any prompt or download if the file is in the way
        if !opts.force && opts.output.exists() {
            return Err(LcnsError::OutputExists {
                path: opts.output.clone(),
            });
        }

        let key = match &opts.key {
            Some(key) => key.clone(),
            None => self.select_key(ui)?,
        };

        let cache = opts
            .cache_dir
            .as_ref()
            .map(|dir| CacheStore::new(dir).with_ttl(opts.cache_ttl));
        let source = LicenseSource::new(self.catalog, cache.as_ref());

        let mut spinner = ui.start_spinner(&format!("Fetching {} LICENSE", key));
        let acquired = match source.acquire(&key) {
            Ok(acquired) => {
                spinner.finish_clear();
                acquired
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to fetch {} LICENSE", key));
                return Err(e);
            }
        };

        let body = if opts.raw {
            acquired.body
        } else {
            let defaults = self
                .defaults
                .clone()
                .unwrap_or_else(|| PromptDefaults::detect(&opts.output));
            customize(&acquired.body, &opts.overrides, &defaults, ui)?
        };

        write_output(&opts.output, &body, opts.force)?;
        debug!("Output filename: {}", opts.output.display());

        let mut msg = format!("Successfully generated \"{}\" LICENSE", acquired.key);
        if acquired.from_cache {
            msg.push_str(" (Use cache)");
        }
        ui.success(&msg);

        Ok(CommandResult::success())
    }
}

/// Write `body` to `path` in a single write, creating parent directories.
///
/// Without `force` an existing file is never touched.
pub fn write_output(path: &Path, body: &str, force: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            LcnsError::OutputExists {
                path: path.to_path_buf(),
            }
        } else {
            LcnsError::Io(e)
        }
    })?;
    file.write_all(body.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    const MIT: &str = "MIT License\n\nCopyright (c) [year] [fullname]\n";

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_license("agpl-3.0", "GNU Affero General Public License v3.0", "AGPL")
            .with_license("apache-2.0", "Apache License 2.0", "Apache [yyyy]")
            .with_license("gpl-3.0", "GNU General Public License v3.0", "GPL")
            .with_license("mit", "MIT License", MIT)
    }

    fn options(temp: &TempDir, key: Option<&str>) -> GenerateOptions {
        GenerateOptions {
            key: key.map(String::from),
            output: temp.path().join("LICENSE"),
            cache_dir: Some(temp.path().join("cache")),
            cache_ttl: Duration::days(30),
            force: false,
            raw: false,
            choose: false,
            overrides: Overrides {
                year: Some("2024".into()),
                ..Default::default()
            },
        }
    }

    fn no_defaults() -> PromptDefaults {
        PromptDefaults::default()
    }

    #[test]
    fn generates_mit_with_author() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut ui = MockUI::new();
        ui.set_prompt_response("author", "Ada Lovelace");

        let cmd =
            GenerateCommand::new(&catalog, options(&temp, Some("mit"))).with_defaults(no_defaults());
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let written = fs::read_to_string(temp.path().join("LICENSE")).unwrap();
        assert_eq!(written, "MIT License\n\nCopyright (c) 2024 Ada Lovelace\n");
        assert!(ui.has_success("Successfully generated \"mit\" LICENSE"));
        assert!(!ui.has_success("(Use cache)"));

        // The cache keeps the template, not the filled-in copy
        let cached = CacheStore::new(temp.path().join("cache")).get("mit").unwrap();
        assert_eq!(cached, MIT);
    }

    #[test]
    fn second_run_uses_cache() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut opts = options(&temp, Some("mit"));
        opts.raw = true;

        let mut ui = MockUI::new();
        GenerateCommand::new(&catalog, opts.clone())
            .execute(&mut ui)
            .unwrap();

        fs::remove_file(&opts.output).unwrap();
        let mut ui = MockUI::new();
        GenerateCommand::new(&catalog, opts)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(catalog.fetch_count(), 1);
        assert!(ui.has_success("(Use cache)"));
    }

    #[test]
    fn raw_writes_template_verbatim() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut opts = options(&temp, Some("mit"));
        opts.raw = true;
        let mut ui = MockUI::new();

        GenerateCommand::new(&catalog, opts).execute(&mut ui).unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("LICENSE")).unwrap(), MIT);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn existing_output_is_refused() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        fs::write(temp.path().join("LICENSE"), "keep me").unwrap();
        let mut ui = MockUI::new();

        let err = GenerateCommand::new(&catalog, options(&temp, Some("mit")))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LcnsError::OutputExists { .. }));
        assert_eq!(
            fs::read_to_string(temp.path().join("LICENSE")).unwrap(),
            "keep me"
        );
        assert_eq!(catalog.fetch_count(), 0);
    }

    #[test]
    fn force_overwrites_output() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        fs::write(temp.path().join("LICENSE"), "old").unwrap();
        let mut opts = options(&temp, Some("apache-2.0"));
        opts.force = true;
        let mut ui = MockUI::new();

        GenerateCommand::new(&catalog, opts).execute(&mut ui).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("LICENSE")).unwrap(),
            "Apache 2024"
        );
    }

    #[test]
    fn output_parent_directories_are_created() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut opts = options(&temp, Some("gpl-3.0"));
        opts.output = temp.path().join("docs/legal/LICENSE");
        let mut ui = MockUI::new();

        GenerateCommand::new(&catalog, opts.clone())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(fs::read_to_string(opts.output).unwrap(), "GPL");
    }

    #[test]
    fn interrupt_leaves_no_output() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut ui = MockUI::new();
        ui.interrupt_on("author");

        let err = GenerateCommand::new(&catalog, options(&temp, Some("mit")))
            .with_defaults(no_defaults())
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LcnsError::Interrupted));
        assert!(!temp.path().join("LICENSE").exists());
    }

    #[test]
    fn unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut ui = MockUI::new();

        let err = GenerateCommand::new(&catalog, options(&temp, Some("wtfpl-3.0")))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LcnsError::LicenseNotFound { .. }));
        assert!(!temp.path().join("LICENSE").exists());
        assert_eq!(ui.spinner_failures(), vec!["Failed to fetch wtfpl-3.0 LICENSE"]);
    }

    #[test]
    fn numbered_menu_defaults_to_mit() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut opts = options(&temp, None);
        opts.raw = true;
        let mut ui = MockUI::new();
        ui.set_prompt_response("license", "");

        GenerateCommand::new(&catalog, opts).execute(&mut ui).unwrap();

        assert_eq!(
            ui.prompts_shown()[0].prompt_type,
            crate::ui::PromptType::Number { max: 4, default: 4 }
        );
        assert!(ui.has_message("   4) MIT License"));
        assert!(ui.has_success("\"mit\""));
    }

    #[test]
    fn numbered_menu_picks_by_position() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut opts = options(&temp, None);
        opts.raw = true;
        let mut ui = MockUI::new();
        ui.set_prompt_response("license", "2");

        GenerateCommand::new(&catalog, opts).execute(&mut ui).unwrap();

        assert!(ui.has_success("\"apache-2.0\""));
    }

    #[test]
    fn numbered_menu_without_mit_defaults_to_first() {
        let temp = TempDir::new().unwrap();
        let catalog = MemoryCatalog::new().with_license("isc", "ISC License", "ISC");
        let mut ui = MockUI::new();

        GenerateCommand::new(&catalog, options(&temp, None))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.prompts_shown()[0].prompt_type,
            crate::ui::PromptType::Number { max: 1, default: 1 }
        );
    }

    #[test]
    fn empty_catalog_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let catalog = MemoryCatalog::new();
        let mut ui = MockUI::new();

        let err = GenerateCommand::new(&catalog, options(&temp, None))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LcnsError::CatalogUnavailable { .. }));
    }

    #[test]
    fn unavailable_catalog_fails_menu_spinner() {
        let temp = TempDir::new().unwrap();
        let catalog = MemoryCatalog::unavailable();
        let mut ui = MockUI::new();

        let err = GenerateCommand::new(&catalog, options(&temp, None))
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, LcnsError::CatalogUnavailable { .. }));
        assert_eq!(ui.spinner_failures(), vec!["Failed to fetch license list"]);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn guided_choice_skips_catalog_list() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut opts = options(&temp, None);
        opts.choose = true;
        opts.raw = true;
        let mut ui = MockUI::new();
        ui.set_prompt_response("situation", "3");
        ui.set_prompt_response("gpl_version", "2");

        GenerateCommand::new(&catalog, opts).execute(&mut ui).unwrap();

        assert_eq!(ui.prompt_keys(), vec!["situation", "gpl_version"]);
        assert!(ui.has_success("\"gpl-3.0\""));
    }

    #[test]
    fn guided_more_choices_falls_back_to_list() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog();
        let mut opts = options(&temp, None);
        opts.choose = true;
        opts.raw = true;
        let mut ui = MockUI::new();
        ui.set_prompt_response("situation", "4");
        ui.set_prompt_response("license", "1");

        GenerateCommand::new(&catalog, opts).execute(&mut ui).unwrap();

        assert_eq!(ui.prompt_keys(), vec!["situation", "license"]);
        assert!(ui.has_success("\"agpl-3.0\""));
    }

    #[test]
    fn resolve_prefers_flags_over_settings() {
        let cli = Cli::parse_from(["lcns", "MIT", "-o", "COPYING", "--author", "Flag"]);
        let settings = Settings {
            author: Some("Config".into()),
            email: Some("config@example.com".into()),
            output: Some(PathBuf::from("LICENSE.txt")),
            cache_ttl: Some("1d".into()),
            ..Default::default()
        };

        let opts = GenerateOptions::resolve(&cli, &settings).unwrap();

        assert_eq!(opts.key.as_deref(), Some("mit"));
        assert_eq!(opts.output, PathBuf::from("COPYING"));
        assert_eq!(opts.overrides.author.as_deref(), Some("Flag"));
        assert_eq!(opts.overrides.email.as_deref(), Some("config@example.com"));
        assert_eq!(opts.cache_ttl, Duration::days(1));
    }

    #[test]
    fn resolve_uses_settings_then_default_output() {
        let cli = Cli::parse_from(["lcns", "mit"]);
        let settings = Settings {
            output: Some(PathBuf::from("LICENSE.md")),
            ..Default::default()
        };
        let opts = GenerateOptions::resolve(&cli, &settings).unwrap();
        assert_eq!(opts.output, PathBuf::from("LICENSE.md"));

        let opts = GenerateOptions::resolve(&cli, &Settings::default()).unwrap();
        assert_eq!(opts.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn resolve_no_cache_from_flag_or_settings() {
        let cli = Cli::parse_from(["lcns", "mit", "--no-cache"]);
        let opts = GenerateOptions::resolve(&cli, &Settings::default()).unwrap();
        assert_eq!(opts.cache_dir, None);

        let cli = Cli::parse_from(["lcns", "mit"]);
        let settings = Settings {
            no_cache: true,
            ..Default::default()
        };
        let opts = GenerateOptions::resolve(&cli, &settings).unwrap();
        assert_eq!(opts.cache_dir, None);
    }

    #[test]
    fn resolve_rejects_bad_year() {
        let cli = Cli::parse_from(["lcns", "mit", "--year", "last year"]);
        let err = GenerateOptions::resolve(&cli, &Settings::default()).unwrap_err();
        assert!(matches!(err, LcnsError::InvalidArguments { .. }));
    }

    #[test]
    fn resolve_rejects_blank_key() {
        let cli = Cli::parse_from(["lcns", "  "]);
        let err = GenerateOptions::resolve(&cli, &Settings::default()).unwrap_err();
        assert!(matches!(err, LcnsError::InvalidArguments { .. }));
    }

    #[test]
    fn write_output_refuses_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("LICENSE");
        fs::write(&path, "original").unwrap();

        let err = write_output(&path, "new", false).unwrap_err();

        assert!(matches!(err, LcnsError::OutputExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn write_output_force_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("LICENSE");
        fs::write(&path, "a much longer original body").unwrap();

        write_output(&path, "short", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }
}
