use std::sync::Arc;

use thiserror::Error;

use crate::{
    NvramError,
    reconciler::Reconciler,
    store::NvramStore,
    task::{TaskFailure, TaskReport},
};

/// Reconciler shared by every registered command.
pub type SharedReconciler = Arc<Reconciler<Box<dyn NvramStore>>>;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing required
    /// arguments or too many arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The nvram task itself failed.
    #[error(transparent)]
    Task(#[from] NvramError),
}

impl CliError {
    /// Stable machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::CommandNotFound(_) => "command_not_found",
            CliError::InvalidArguments(_) => "invalid_arguments",
            CliError::Task(e) => e.kind(),
        }
    }

    /// Structured failure for orchestrator output.
    pub fn failure(&self) -> TaskFailure {
        match self {
            CliError::Task(e) => TaskFailure::from(e),
            other => TaskFailure {
                failed: true,
                msg: other.to_string(),
                kind: other.kind().to_string(),
            },
        }
    }
}

/// Type alias for command execution results.
pub type CommandResult = Result<TaskReport, CliError>;

/// Options given once on the command line and applied to every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Report changes without applying them.
    pub check_mode: bool,

    /// Commit after the command's state operation.
    pub commit: bool,
}

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "key", "value").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// An nvram key.
    Key,

    /// An nvram value.
    Value,

    /// A file system path.
    Path,
}

/// Complete metadata for a CLI command.
///
/// Used for help generation, argument count validation and command
/// discovery.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "get", "set", "run").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive the shared reconciler through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid arguments or a failed task.
    fn execute(&self, args: &[String], options: &RunOptions) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
