//! Visual theme and styling.

use console::Style;

/// The lcns visual theme.
#[derive(Debug, Clone)]
pub struct LcnsTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for LcnsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LcnsTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("====> {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check if colors should be enabled on stderr.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_success_has_arrow_prefix() {
        let theme = LcnsTheme::plain();
        assert_eq!(
            theme.format_success("Successfully generated \"mit\" LICENSE"),
            "====> Successfully generated \"mit\" LICENSE"
        );
    }

    #[test]
    fn plain_error_is_unchanged() {
        let theme = LcnsTheme::plain();
        assert_eq!(theme.format_error("Interrupted"), "Interrupted");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = LcnsTheme::default();
        assert!(theme.format_success("done").contains("done"));
        assert!(theme.format_error("boom").contains("boom"));
    }
}
