//! Built-in nvram commands.
mod commit;
mod get;
mod run;
mod set;
mod unset;

pub use commit::CommitCommand;
pub use get::GetCommand;
pub use run::RunCommand;
pub use set::SetCommand;
pub use unset::UnsetCommand;

use crate::cli::{CommandRegistry, types::SharedReconciler};

/// Registers all nvram commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `reconciler` - Shared reconciler for the commands
pub fn register_commands(registry: &mut CommandRegistry, reconciler: SharedReconciler) {
    registry.register_command(Box::new(GetCommand::new(reconciler.clone())));
    registry.register_command(Box::new(SetCommand::new(reconciler.clone())));
    registry.register_command(Box::new(UnsetCommand::new(reconciler.clone())));
    registry.register_command(Box::new(CommitCommand::new(reconciler.clone())));
    registry.register_command(Box::new(RunCommand::new(reconciler)));
}
