use super::{
    CommandRegistry,
    formatting::{format_command, format_description, format_header, format_usage},
    types::{CommandMetadata, CommandResult, RunOptions, SharedReconciler},
};

/// High-level service for managing and executing CLI commands.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all built-in commands registered.
    ///
    /// # Arguments
    /// * `reconciler` - Reconciler shared by every command
    pub fn new(reconciler: SharedReconciler) -> Self {
        let mut registry = CommandRegistry::new(reconciler);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist, or the
    /// command's own error if it fails.
    pub fn execute_command(
        &self,
        command_name: &str,
        args: &[String],
        options: &RunOptions,
    ) -> CommandResult {
        self.registry.execute(command_name, args, options)
    }

    /// Metadata of every available command.
    pub fn list_all(&self) -> Vec<CommandMetadata> {
        self.registry.list_commands()
    }

    /// Help text listing every command with its arguments and examples.
    pub fn help_text(&self) -> String {
        let mut text = format!(
            "{}\n  nvram-task [--config PATH] [--check] [--commit] [--json] <command> [args...]\n\n{}\n",
            format_header("Usage:"),
            format_header("Commands:"),
        );

        for metadata in self.list_all() {
            let args = metadata
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect::<Vec<String>>()
                .join(" ");

            text.push_str(&format!(
                "  {} {}\n      {}\n",
                format_command(&metadata.name),
                args,
                format_description(&metadata.description)
            ));

            for example in &metadata.examples {
                text.push_str(&format!("      {}\n", format_usage(example)));
            }
        }

        text
    }
}
