use std::path::Path;

use tracing::debug;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata, RunOptions, SharedReconciler},
    },
    task,
};

/// Command running a task described by a JSON arguments file.
///
/// This is the entry point used by the orchestrator, which writes the task
/// arguments to a file and passes its path:
///
/// ```json
/// {"key": "usb_mntopt", "value": "D273628F", "state": "present", "commit": true}
/// ```
///
/// `--check` and `--commit` on the command line are combined with the file's
/// own settings.
pub struct RunCommand {
    reconciler: SharedReconciler,
}

impl RunCommand {
    /// Creates a new RunCommand over the shared reconciler.
    pub fn new(reconciler: SharedReconciler) -> Self {
        Self { reconciler }
    }
}

impl Command for RunCommand {
    fn execute(&self, args: &[String], options: &RunOptions) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <args-file> argument for 'run' command".to_string())
        })?;

        let mut task_args = task::load_args(Path::new(path))?;
        task_args.check_mode |= options.check_mode;
        task_args.commit |= options.commit;
        debug!(?task_args, "Loaded task arguments");

        Ok(task::run(&*self.reconciler, &task_args)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "run".to_string(),
            description: "Run a task from a JSON arguments file (JSON output)".to_string(),
            args: vec![CommandArg {
                name: "args-file".to_string(),
                description: "Path to the JSON task arguments".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec!["nvram-task run /tmp/args.json".to_string()],
        }
    }
}
