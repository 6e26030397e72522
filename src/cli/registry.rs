use std::collections::BTreeMap;

use super::{
    CliError, Command, commands,
    types::{CommandMetadata, CommandResult, RunOptions, SharedReconciler},
};

/// Registry of CLI commands keyed by name.
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
    reconciler: SharedReconciler,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands must be added using `register_command` or
    /// `register_all_commands`.
    pub fn new(reconciler: SharedReconciler) -> Self {
        Self {
            commands: BTreeMap::new(),
            reconciler,
        }
    }

    /// Registers a command under the name from its metadata.
    ///
    /// A command with the same name is replaced.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.metadata().name, command);
    }

    /// Executes a command by name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if no command has that name and
    /// `CliError::InvalidArguments` if the argument count does not match.
    /// Other errors come from the command itself.
    pub fn execute(
        &self,
        command_name: &str,
        args: &[String],
        options: &RunOptions,
    ) -> CommandResult {
        let found_command = self.commands.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args, options)
    }

    /// Metadata of every registered command, sorted by name.
    pub fn list_commands(&self) -> Vec<CommandMetadata> {
        self.commands.values().map(|c| c.metadata()).collect()
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "'{}' expects at least {} arguments, got {}",
                metadata.name,
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "'{}' expects at most {} arguments, got {}",
                metadata.name,
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers every built-in command.
    pub fn register_all_commands(&mut self) {
        let reconciler = self.reconciler.clone();
        commands::register_commands(self, reconciler);
    }
}
