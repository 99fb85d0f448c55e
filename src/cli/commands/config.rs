//! Config command implementation.
//!
//! The `simmer-options config` command shows resolved settings.

use crate::cli::args::ConfigArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand<'a> {
    settings: &'a Settings,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(settings: &'a Settings, args: ConfigArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut resolved = self.settings.clone();
        resolved.store = Some(self.settings.store_path());

        if self.args.json {
            let output = serde_json::to_string_pretty(&resolved).map_err(anyhow::Error::from)?;
            ui.data(&output);
        } else {
            let output = serde_yaml::to_string(&resolved).map_err(anyhow::Error::from)?;
            ui.data(output.trim_end());
        }

        Ok(CommandResult::success())
    }
}
