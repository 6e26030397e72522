//! Command-line interface for nvram tasks.
//!
//! Commands are registered by name in a [`CommandRegistry`] and share one
//! reconciler. Each command maps onto a task run and returns its report;
//! the binary decides whether to print it as text or JSON.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;


pub use commands::{CommitCommand, GetCommand, RunCommand, SetCommand, UnsetCommand};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{
    ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult, RunOptions,
    SharedReconciler,
};
