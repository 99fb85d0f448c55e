//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::options::OptionsStore;
use crate::storage::FileStorage;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Map an "applied" flag onto a result.
    pub fn from_applied(applied: bool) -> Self {
        if applied {
            Self::success()
        } else {
            Self::failure(1)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher for resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Open the options accessor described by the settings.
    pub fn open_store(&self) -> OptionsStore<FileStorage> {
        let path = self.settings.store_path();
        tracing::debug!(
            "Opening option store at {:?} ({:?})",
            path,
            self.settings.cache_policy
        );
        OptionsStore::new(FileStorage::new(path)).with_policy(self.settings.cache_policy)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(&self.settings, args.clone());
                return cmd.execute(ui);
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                return cmd.execute(ui);
            }
            _ => {}
        }

        let store = self.open_store();
        if ui.output_mode().shows_detail() {
            ui.message(&format!("Store: {}", store.storage().path().display()));
        }

        match &cli.command {
            Commands::Slug => super::show::SlugCommand::new(&store).execute(ui),
            Commands::Show(args) => super::show::ShowCommand::new(&store, args.clone()).execute(ui),
            Commands::Get(args) => super::get::GetCommand::new(&store, args.clone()).execute(ui),
            Commands::Set(args) => super::set::SetCommand::new(&store, args.clone()).execute(ui),
            Commands::Merge(args) => {
                super::set::MergeCommand::new(&store, args.clone()).execute(ui)
            }
            Commands::Add(args) => {
                super::add::AddCommand::new(&store, args.clone(), self.settings.autoload)
                    .execute(ui)
            }
            Commands::Unset(args) => {
                super::delete::UnsetCommand::new(&store, args.clone()).execute(ui)
            }
            Commands::Reset(args) => {
                super::delete::ResetCommand::new(&store, args.clone()).execute(ui)
            }
            Commands::Config(_) | Commands::Completions(_) => Ok(CommandResult::success()),
        }
    }
}
