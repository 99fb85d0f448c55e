//! Command-line interface for the options record.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`values`] - Parsing and display of option values

pub mod args;
pub mod commands;
pub mod values;

pub use args::{
    AddArgs, Cli, Commands, CompletionsArgs, ConfigArgs, GetArgs, MergeArgs, ResetArgs, SetArgs,
    ShowArgs, UnsetArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
