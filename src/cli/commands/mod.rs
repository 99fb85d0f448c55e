//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands that touch the record borrow an
//! [`OptionsStore`](crate::options::OptionsStore) opened by the
//! [`CommandDispatcher`], so one invocation shares one cache.

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod dispatcher;
pub mod get;
pub mod set;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
