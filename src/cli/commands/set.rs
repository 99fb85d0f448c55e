//! Merge-on-write commands: `set` and `merge`.

use serde_json::Value;

use crate::cli::args::{MergeArgs, SetArgs};
use crate::cli::values::{parse_record, parse_value};
use crate::error::Result;
use crate::options::OptionsStore;
use crate::storage::OptionStorage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Sets a single option.
pub struct SetCommand<'a, S> {
    store: &'a OptionsStore<S>,
    args: SetArgs,
}

impl<'a, S: OptionStorage> SetCommand<'a, S> {
    /// Create a new set command.
    pub fn new(store: &'a OptionsStore<S>, args: SetArgs) -> Self {
        Self { store, args }
    }

    fn value(&self) -> Value {
        if self.args.raw {
            Value::String(self.args.value.clone())
        } else {
            parse_value(&self.args.value)
        }
    }
}

impl<S: OptionStorage> Command for SetCommand<'_, S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let changed = self.store.set_option(self.args.key.clone(), self.value())?;

        if changed {
            ui.success(&format!("Set '{}'", self.args.key));
        } else {
            ui.warning(&format!("'{}' already has that value", self.args.key));
        }
        Ok(CommandResult::from_applied(changed))
    }
}

/// Merges a JSON object into the record.
pub struct MergeCommand<'a, S> {
    store: &'a OptionsStore<S>,
    args: MergeArgs,
}

impl<'a, S: OptionStorage> MergeCommand<'a, S> {
    /// Create a new merge command.
    pub fn new(store: &'a OptionsStore<S>, args: MergeArgs) -> Self {
        Self { store, args }
    }
}

impl<S: OptionStorage> Command for MergeCommand<'_, S> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let record = parse_record(&self.args.json)?;
        let count = record.len();
        let changed = self.store.set_options(record)?;

        if changed {
            let label = if count == 1 { "key" } else { "keys" };
            ui.success(&format!("Merged {} {}", count, label));
        } else {
            ui.warning("Nothing changed");
        }
        Ok(CommandResult::from_applied(changed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionsError;
    use crate::storage::MemoryStorage;
    use crate::ui::MockUI;
    use serde_json::json;

    fn set_args(key: &str, value: &str, raw: bool) -> SetArgs {
        SetArgs {
            key: key.to_string(),
            value: value.to_string(),
            raw,
        }
    }

    #[test]
    fn set_parses_json_values() {
        let store = OptionsStore::new(MemoryStorage::new());
        let mut ui = MockUI::new();

        let result = SetCommand::new(&store, set_args("servings", "4", false))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("servings"));
        assert_eq!(store.get_option("servings").unwrap(), Some(json!(4)));
    }

    #[test]
    fn set_raw_keeps_string() {
        let store = OptionsStore::new(MemoryStorage::new());
        let mut ui = MockUI::new();

        SetCommand::new(&store, set_args("servings", "4", true))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(store.get_option("servings").unwrap(), Some(json!("4")));
    }

    #[test]
    fn set_same_value_reports_unchanged() {
        let store = OptionsStore::new(MemoryStorage::new());
        store.set_option("units", json!("metric")).unwrap();
        let mut ui = MockUI::new();

        let result = SetCommand::new(&store, set_args("units", "metric", false))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("already has that value"));
    }

    #[test]
    fn merge_adds_keys() {
        let store = OptionsStore::new(MemoryStorage::new());
        store.set_option("a", json!(1)).unwrap();
        let mut ui = MockUI::new();

        let args = MergeArgs {
            json: r#"{"b": 2, "c": 3}"#.to_string(),
        };
        let result = MergeCommand::new(&store, args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Merged 2 keys"));
        assert_eq!(
            serde_json::Value::Object(store.get_options().unwrap()),
            json!({"a": 1, "b": 2, "c": 3})
        );
    }

    #[test]
    fn merge_rejects_non_object() {
        let store = OptionsStore::new(MemoryStorage::new());
        let mut ui = MockUI::new();

        let args = MergeArgs {
            json: "[1]".to_string(),
        };
        let err = MergeCommand::new(&store, args).execute(&mut ui).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue { .. }));
    }
}
