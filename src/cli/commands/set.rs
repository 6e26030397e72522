use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata, RunOptions, SharedReconciler},
    },
    task::{self, TaskArgs, TaskState},
};

/// Command ensuring a key holds a value.
pub struct SetCommand {
    reconciler: SharedReconciler,
}

impl SetCommand {
    /// Creates a new SetCommand over the shared reconciler.
    pub fn new(reconciler: SharedReconciler) -> Self {
        Self { reconciler }
    }
}

impl Command for SetCommand {
    fn execute(&self, args: &[String], options: &RunOptions) -> CommandResult {
        let key = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <key> argument for 'set' command".to_string())
        })?;

        let value = args.get(1).ok_or_else(|| {
            CliError::InvalidArguments("Expected <value> argument for 'set' command".to_string())
        })?;

        let task_args = TaskArgs::new(key.as_str(), TaskState::Present)
            .with_value(value.as_str())
            .with_commit(options.commit)
            .with_check_mode(options.check_mode);

        Ok(task::run(&*self.reconciler, &task_args)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Ensure a key holds a value".to_string(),
            args: vec![
                CommandArg {
                    name: "key".to_string(),
                    description: "nvram key".to_string(),
                    required: true,
                    value_type: ArgType::Key,
                },
                CommandArg {
                    name: "value".to_string(),
                    description: "Value to store; must not contain '='".to_string(),
                    required: true,
                    value_type: ArgType::Value,
                },
            ],
            examples: vec![
                "nvram-task set usb_mntopt D273628F-675C-45C1-AA52-98278D3948B7".to_string(),
                "nvram-task --commit set router_name gateway".to_string(),
            ],
        }
    }
}
