use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata, RunOptions, SharedReconciler},
    },
    task::{self, TaskArgs, TaskState},
};

/// Command for reading a key from nvram.
///
/// # Example Usage
///
/// ```bash
/// nvram-task get lan_ipaddr
/// nvram-task --json get wl0_ssid
/// ```
pub struct GetCommand {
    reconciler: SharedReconciler,
}

impl GetCommand {
    /// Creates a new GetCommand over the shared reconciler.
    pub fn new(reconciler: SharedReconciler) -> Self {
        Self { reconciler }
    }
}

impl Command for GetCommand {
    fn execute(&self, args: &[String], options: &RunOptions) -> CommandResult {
        let key = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <key> argument for 'get' command".to_string())
        })?;

        let task_args = TaskArgs::new(key.as_str(), TaskState::Get)
            .with_commit(options.commit)
            .with_check_mode(options.check_mode);

        Ok(task::run(&*self.reconciler, &task_args)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Read the current value of a key".to_string(),
            args: vec![CommandArg {
                name: "key".to_string(),
                description: "nvram key (e.g., lan_ipaddr)".to_string(),
                required: true,
                value_type: ArgType::Key,
            }],
            examples: vec![
                "nvram-task get lan_ipaddr".to_string(),
                "nvram-task --json get wl0_ssid".to_string(),
            ],
        }
    }
}
