use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reporting and verification policy for reconciliation.
///
/// Defaults reproduce the behavior of the established nvram task: `set` is
/// verified by reading the key back, `unset` is assumed to succeed, and a
/// commit is always reported as a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReconcilePolicy {
    /// Read the key back after `unset` and report what the store returns.
    pub verify_unset: bool,

    /// Report every commit as a change, even when nothing was modified.
    pub commit_always_reports_change: bool,
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self {
            verify_unset: false,
            commit_always_reports_change: true,
        }
    }
}
