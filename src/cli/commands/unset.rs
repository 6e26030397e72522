use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata, RunOptions, SharedReconciler},
    },
    task::{self, TaskArgs, TaskState},
};

/// Command ensuring a key is absent.
pub struct UnsetCommand {
    reconciler: SharedReconciler,
}

impl UnsetCommand {
    /// Creates a new UnsetCommand over the shared reconciler.
    pub fn new(reconciler: SharedReconciler) -> Self {
        Self { reconciler }
    }
}

impl Command for UnsetCommand {
    fn execute(&self, args: &[String], options: &RunOptions) -> CommandResult {
        let key = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <key> argument for 'unset' command".to_string())
        })?;

        let task_args = TaskArgs::new(key.as_str(), TaskState::Absent)
            .with_commit(options.commit)
            .with_check_mode(options.check_mode);

        Ok(task::run(&*self.reconciler, &task_args)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "unset".to_string(),
            description: "Ensure a key is absent".to_string(),
            args: vec![CommandArg {
                name: "key".to_string(),
                description: "nvram key".to_string(),
                required: true,
                value_type: ArgType::Key,
            }],
            examples: vec!["nvram-task --commit unset my_key".to_string()],
        }
    }
}
