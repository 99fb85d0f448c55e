//! The `get` command.

use crate::cli::args::GetArgs;
use crate::cli::values::display_value;
use crate::error::Result;
use crate::options::OptionsStore;
use crate::storage::OptionStorage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints a single option.
pub struct GetCommand<'a, S> {
    store: &'a OptionsStore<S>,
    args: GetArgs,
}

impl<'a, S: OptionStorage> GetCommand<'a, S> {
    /// Create a new get command.
    pub fn new(store: &'a OptionsStore<S>, args: GetArgs) -> Self {
        Self { store, args }
    }
}

impl<S: OptionStorage> Command for GetCommand<'_, S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.store.get_option(&self.args.key)? {
            Some(value) => {
                let text = if self.args.json {
                    value.to_string()
                } else {
                    display_value(&value)
                };
                ui.data(&text);
                Ok(CommandResult::success())
            }
            None => {
                ui.warning(&format!("Option '{}' is not set", self.args.key));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
