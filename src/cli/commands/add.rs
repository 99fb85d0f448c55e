//! The `add` command.

use crate::cli::args::AddArgs;
use crate::cli::values::parse_record;
use crate::error::Result;
use crate::options::OptionsStore;
use crate::storage::OptionStorage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Creates the record when it has no content yet.
pub struct AddCommand<'a, S> {
    store: &'a OptionsStore<S>,
    args: AddArgs,
    default_autoload: bool,
}

impl<'a, S: OptionStorage> AddCommand<'a, S> {
    /// Create a new add command. `default_autoload` comes from settings.
    pub fn new(store: &'a OptionsStore<S>, args: AddArgs, default_autoload: bool) -> Self {
        Self {
            store,
            args,
            default_autoload,
        }
    }
}

impl<S: OptionStorage> Command for AddCommand<'_, S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let record = parse_record(&self.args.json)?;
        let autoload = self.args.autoload || self.default_autoload;
        let added = self.store.add_options(record, autoload)?;

        if added {
            ui.success(&format!("Created '{}'", self.store.slug()));
        } else {
            ui.warning(&format!(
                "'{}' already exists; use 'merge' to change it",
                self.store.slug()
            ));
        }
        Ok(CommandResult::from_applied(added))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OPTIONS_SLUG;
    use crate::storage::{Autoload, MemoryStorage};
    use crate::ui::MockUI;
    use serde_json::json;

    fn args(json: &str, autoload: bool) -> AddArgs {
        AddArgs {
            json: json.to_string(),
            autoload,
        }
    }

    #[test]
    fn add_creates_record() {
        let storage = MemoryStorage::new();
        let store = OptionsStore::new(storage.clone());
        let mut ui = MockUI::new();

        let result = AddCommand::new(&store, args(r#"{"a": 1}"#, false), false)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("Created"));
        let slot = storage.snapshot().slot(OPTIONS_SLUG).cloned().unwrap();
        assert_eq!(slot.value, json!({"a": 1}));
        assert_eq!(slot.autoload, Autoload::No);
    }

    #[test]
    fn add_uses_settings_autoload() {
        let storage = MemoryStorage::new();
        let store = OptionsStore::new(storage.clone());
        let mut ui = MockUI::new();

        AddCommand::new(&store, args("{}", false), true)
            .execute(&mut ui)
            .unwrap();

        let slot = storage.snapshot().slot(OPTIONS_SLUG).cloned().unwrap();
        assert_eq!(slot.autoload, Autoload::Yes);
    }

    #[test]
    fn add_existing_record_fails() {
        let store = OptionsStore::new(MemoryStorage::new());
        store.set_option("a", json!(1)).unwrap();
        let mut ui = MockUI::new();

        let result = AddCommand::new(&store, args(r#"{"b": 2}"#, true), false)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("already exists"));
        assert_eq!(store.get_option("b").unwrap(), None);
    }
}
