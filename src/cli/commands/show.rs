//! Read-only commands: `slug` and `show`.

use crate::cli::args::ShowArgs;
use crate::cli::values::display_value;
use crate::error::Result;
use crate::options::OptionsStore;
use crate::storage::OptionStorage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the record identifier.
pub struct SlugCommand<'a, S> {
    store: &'a OptionsStore<S>,
}

impl<'a, S: OptionStorage> SlugCommand<'a, S> {
    /// Create a new slug command.
    pub fn new(store: &'a OptionsStore<S>) -> Self {
        Self { store }
    }
}

impl<S: OptionStorage> Command for SlugCommand<'_, S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.data(self.store.slug());
        Ok(CommandResult::success())
    }
}

/// Shows the whole options record.
pub struct ShowCommand<'a, S> {
    store: &'a OptionsStore<S>,
    args: ShowArgs,
}

impl<'a, S: OptionStorage> ShowCommand<'a, S> {
    /// Create a new show command.
    pub fn new(store: &'a OptionsStore<S>, args: ShowArgs) -> Self {
        Self { store, args }
    }
}

impl<S: OptionStorage> Command for ShowCommand<'_, S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let options = self.store.get_options()?;

        if self.args.json {
            let output = serde_json::to_string_pretty(&options).map_err(anyhow::Error::from)?;
            ui.data(&output);
            return Ok(CommandResult::success());
        }

        if options.is_empty() {
            ui.message(&format!("No options stored under '{}'", self.store.slug()));
            return Ok(CommandResult::success());
        }

        for (key, value) in &options {
            ui.key_value(key, &display_value(value));
        }

        Ok(CommandResult::success())
    }
}
