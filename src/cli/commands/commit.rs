use crate::{
    cli::{
        Command, CommandResult,
        types::{CommandMetadata, RunOptions, SharedReconciler},
    },
    task::TaskReport,
};

/// Command flushing pending nvram changes to durable storage.
pub struct CommitCommand {
    reconciler: SharedReconciler,
}

impl CommitCommand {
    /// Creates a new CommitCommand over the shared reconciler.
    pub fn new(reconciler: SharedReconciler) -> Self {
        Self { reconciler }
    }
}

impl Command for CommitCommand {
    fn execute(&self, _args: &[String], options: &RunOptions) -> CommandResult {
        let mut report = TaskReport::default();
        report.apply_commit(self.reconciler.commit(options.check_mode)?);
        Ok(report)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "commit".to_string(),
            description: "Save all pending changes to non-volatile storage".to_string(),
            args: vec![],
            examples: vec!["nvram-task commit".to_string()],
        }
    }
}
