//! Visual theme and styling.

use console::Style;

/// Terminal styles for command output.
#[derive(Debug, Clone)]
pub struct SimmerTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for SimmerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SimmerTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a key/value line.
    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        format!(
            "{}{} {}",
            self.key.apply_to(key),
            self.dim.apply_to(":"),
            self.value.apply_to(value)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = SimmerTheme::plain().format_success("Saved");
        assert_eq!(msg, "✓ Saved");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = SimmerTheme::plain().format_warning("Unchanged");
        assert_eq!(msg, "⚠ Unchanged");
    }

    #[test]
    fn theme_formats_error() {
        let msg = SimmerTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_key_value() {
        let msg = SimmerTheme::plain().format_key_value("units", "\"metric\"");
        assert_eq!(msg, "units: \"metric\"");
    }

    #[test]
    fn colored_theme_creates_without_panic() {
        let theme = SimmerTheme::new();
        let _ = theme.format_success("test");
    }
}
