//! Placeholder vocabulary.
//!
//! License templates from different sources spell the same blank in
//! different ways (`[year]`, `<year>`, `{yyyy}`). Each category lists the
//! spellings it recognises, in the order they are tried.

use std::fmt;

/// Answer meaning "leave this placeholder as it is".
pub const NO_REPLACEMENT: &str = "(no replacement)";

const YEAR_TOKENS: &[&str] = &["[year]", "[yyyy]", "{year}", "{yyyy}", "<year>"];

const AUTHOR_TOKENS: &[&str] = &[
    "[fullname]",
    "[name of copyright owner]",
    "<name of author>",
    "{fullname}",
    "{name of copyright owner}",
];

const EMAIL_TOKENS: &[&str] = &["[email]", "<email>", "{email}"];

const PROJECT_TOKENS: &[&str] = &["[project]", "{project}", "<program>"];

const MISC_TOKENS: &[&str] = &[
    "<one line to give the program's name and a brief idea of what it does.>",
    "<one line to give the library's name and a brief idea of what it does.>",
];

/// Kind of value a placeholder stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderCategory {
    /// Copyright year.
    Year,
    /// Copyright holder's name.
    Author,
    /// Copyright holder's email address.
    Email,
    /// Name of the licensed program.
    Project,
    /// Template-specific free text with no natural default.
    Misc,
}

impl PlaceholderCategory {
    /// All categories, in the order they are substituted.
    pub const ALL: [PlaceholderCategory; 5] = [
        Self::Year,
        Self::Author,
        Self::Email,
        Self::Project,
        Self::Misc,
    ];

    /// Token spellings for this category.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::Year => YEAR_TOKENS,
            Self::Author => AUTHOR_TOKENS,
            Self::Email => EMAIL_TOKENS,
            Self::Project => PROJECT_TOKENS,
            Self::Misc => MISC_TOKENS,
        }
    }

    /// Stable lowercase name, used as the prompt key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Author => "author",
            Self::Email => "email",
            Self::Project => "project",
            Self::Misc => "misc",
        }
    }
}

impl fmt::Display for PlaceholderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
