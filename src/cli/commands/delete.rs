//! Destructive commands: `unset` and `reset`.

use crate::cli::args::{ResetArgs, UnsetArgs};
use crate::error::Result;
use crate::options::OptionsStore;
use crate::storage::OptionStorage;
use crate::ui::{Confirmation, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Removes a single option.
pub struct UnsetCommand<'a, S> {
    store: &'a OptionsStore<S>,
    args: UnsetArgs,
}

impl<'a, S: OptionStorage> UnsetCommand<'a, S> {
    /// Create a new unset command.
    pub fn new(store: &'a OptionsStore<S>, args: UnsetArgs) -> Self {
        Self { store, args }
    }
}

impl<S: OptionStorage> Command for UnsetCommand<'_, S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let changed = self.store.delete_option(&self.args.key)?;

        if changed {
            ui.success(&format!("Removed '{}'", self.args.key));
        } else {
            ui.warning(&format!("Option '{}' is not set", self.args.key));
        }
        Ok(CommandResult::from_applied(changed))
    }
}

/// Deletes the whole record.
pub struct ResetCommand<'a, S> {
    store: &'a OptionsStore<S>,
    args: ResetArgs,
}

impl<'a, S: OptionStorage> ResetCommand<'a, S> {
    /// Create a new reset command.
    pub fn new(store: &'a OptionsStore<S>, args: ResetArgs) -> Self {
        Self { store, args }
    }
}

impl<S: OptionStorage> Command for ResetCommand<'_, S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.args.force {
            let count = self.store.get_options()?.len();
            let prompt = Confirmation::new(
                "reset",
                format!("Delete '{}' ({} options)?", self.store.slug(), count),
            );

            if !ui.confirm(&prompt)? {
                ui.message("Cancelled");
                return Ok(CommandResult::failure(1));
            }
        }

        let deleted = self.store.delete_options()?;
        if deleted {
            ui.success(&format!("Deleted '{}'", self.store.slug()));
        } else {
            ui.warning(&format!("'{}' does not exist", self.store.slug()));
        }
        Ok(CommandResult::from_applied(deleted))
    }
}
