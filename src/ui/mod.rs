//! User interface for the command-line tool.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes, scripts and CI
//! - [`MockUI`] for command tests
//!
//! # Example
//!
//! ```
//! use simmer_options::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("Option saved");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::confirm_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SimmerTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write command data (values, JSON) to stdout in every output mode.
    fn data(&mut self, text: &str);

    /// Display a key/value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Confirmation) -> Result<bool>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A yes/no question.
#[derive(Debug, Clone)]
pub struct Confirmation {
    /// Unique key for the question (used for lookup in tests and overrides).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter.
    pub default: bool,
}

impl Confirmation {
    /// Create a confirmation that defaults to "no".
    pub fn new(key: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
            default: false,
        }
    }

    /// Set the default answer.
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_defaults_to_no() {
        let prompt = Confirmation::new("reset", "Delete everything?");
        assert_eq!(prompt.key, "reset");
        assert_eq!(prompt.question, "Delete everything?");
        assert!(!prompt.default);
    }

    #[test]
    fn confirmation_with_default() {
        let prompt = Confirmation::new("reset", "Delete everything?").with_default(true);
        assert!(prompt.default);
    }
}
