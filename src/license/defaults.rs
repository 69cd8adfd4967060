//! Suggested answers for placeholder prompts.

use std::path::Path;
use std::process::Command;
use tracing::debug;

use super::placeholder::PlaceholderCategory;

/// Defaults offered when the operator is asked to fill a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDefaults {
    /// Suggested copyright holder.
    pub author: Option<String>,
    /// Suggested email address.
    pub email: Option<String>,
    /// Suggested project name.
    pub project: Option<String>,
}

impl PromptDefaults {
    /// Look up defaults from git configuration and the output location.
    pub fn detect(output: &Path) -> Self {
        Self {
            author: git_config("user.name"),
            email: git_config("user.email"),
            project: project_name(output),
        }
    }

    /// Default for a category, if that category has one.
    pub fn get(&self, category: PlaceholderCategory) -> Option<&str> {
        match category {
            PlaceholderCategory::Author => self.author.as_deref(),
            PlaceholderCategory::Email => self.email.as_deref(),
            PlaceholderCategory::Project => self.project.as_deref(),
            PlaceholderCategory::Year | PlaceholderCategory::Misc => None,
        }
    }
}

/// Read one value with `git config --get`. Missing git or unset keys give `None`.
pub fn git_config(name: &str) -> Option<String> {
    let output = match Command::new("git").args(["config", "--get", name]).output() {
        Ok(output) => output,
        Err(e) => {
            debug!("Failed to run git config: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        debug!("git config {} is not set", name);
        return None;
    }

    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Name of the directory the license file will be written into.
///
/// Relative paths are resolved against the current directory.
pub fn project_name(output: &Path) -> Option<String> {
    let absolute = if output.is_absolute() {
        output.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(output)
    };

    absolute
        .parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
}
