//! The declarative nvram task.
//!
//! Translates orchestrator arguments into reconciler calls and collects the
//! outcome into a single report. A run moves through query or reconcile,
//! then commit; the first failure ends it.

mod types;

#[cfg(test)]
mod tests;

use std::{fs, path::Path};

use tracing::{debug, instrument, warn};
pub use types::{TaskArgs, TaskFailure, TaskReport, TaskState};

use crate::{NvramError, Result, reconciler::Reconciler, store::NvramStore};

/// Progress of a single task run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing has been read yet.
    NotStarted,
    /// The key was read.
    Queried,
    /// The declared state was applied.
    Reconciled,
    /// Changes were committed.
    Committed,
    /// A step failed; nothing further runs.
    Failed,
}

/// Runs a task against `reconciler`.
///
/// # Errors
/// * `NvramError::MissingArgument` - If `state` is `present` and no value was given
/// * Any error from the reconciler, unchanged
#[instrument(skip(reconciler), fields(key = %args.key, state = %args.state))]
pub fn run<S: NvramStore>(reconciler: &Reconciler<S>, args: &TaskArgs) -> Result<TaskReport> {
    let mut report = TaskReport::default();
    let mut phase = Phase::NotStarted;
    debug!(?phase, check_mode = args.check_mode, "Starting nvram task");

    match advance(reconciler, args, &mut report, &mut phase) {
        Ok(()) => {
            debug!(?phase, changed = report.changed, "Finished nvram task");
            Ok(report)
        }
        Err(e) => {
            warn!(
                phase = ?Phase::Failed,
                reached = ?phase,
                kind = e.kind(),
                "nvram task failed: {e}"
            );
            Err(e)
        }
    }
}

/// Steps through the phases, leaving `phase` at the last one completed.
fn advance<S: NvramStore>(
    reconciler: &Reconciler<S>,
    args: &TaskArgs,
    report: &mut TaskReport,
    phase: &mut Phase,
) -> Result<()> {
    match args.state {
        TaskState::Get | TaskState::Show => {
            report.apply_setting(reconciler.query(&args.key)?);
            *phase = Phase::Queried;
        }
        TaskState::Present => {
            let value = args
                .value
                .as_deref()
                .ok_or_else(|| NvramError::MissingArgument {
                    argument: "value".to_string(),
                    state: args.state.to_string(),
                })?;
            report.apply_reconciliation(reconciler.ensure_present(
                &args.key,
                value,
                args.check_mode,
            )?);
            *phase = Phase::Reconciled;
        }
        TaskState::Absent => {
            report.apply_reconciliation(reconciler.ensure_absent(&args.key, args.check_mode)?);
            *phase = Phase::Reconciled;
        }
    }
    debug!(?phase, changed = report.changed, "State applied");

    if args.commit {
        report.apply_commit(reconciler.commit(args.check_mode)?);
        *phase = Phase::Committed;
    }

    Ok(())
}

/// Reads task arguments from a JSON file.
///
/// # Errors
/// * `NvramError::Io` - If the file cannot be read
/// * `NvramError::InvalidArguments` - If the file does not hold valid arguments
pub fn load_args(path: &Path) -> Result<TaskArgs> {
    let content = fs::read_to_string(path)?;
    parse_args(&content)
}

/// Parses task arguments from JSON. Unknown fields are ignored.
///
/// # Errors
/// * `NvramError::InvalidArguments` - If the JSON is malformed or `key` is missing
pub fn parse_args(content: &str) -> Result<TaskArgs> {
    serde_json::from_str(content).map_err(|e| NvramError::InvalidArguments(e.to_string()))
}
