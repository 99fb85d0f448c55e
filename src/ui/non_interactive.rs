//! Non-interactive UI for pipes, scripts and CI.

use crate::error::Result;

use super::{Confirmation, OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Confirmations are answered with their default, or with
/// `SIMMER_CONFIRM_<KEY>` when that variable is set.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

/// Interpret an override value as a yes/no answer.
pub(crate) fn parse_answer(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn data(&mut self, text: &str) {
        println!("{}", text);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn confirm(&mut self, prompt: &Confirmation) -> Result<bool> {
        let env_key = format!("SIMMER_CONFIRM_{}", prompt.key.to_uppercase());
        let answer = std::env::var(&env_key)
            .ok()
            .and_then(|value| parse_answer(&value))
            .unwrap_or(prompt.default);

        tracing::debug!("Answered '{}' non-interactively: {}", prompt.key, answer);
        Ok(answer)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
