use serde::Serialize;

/// A key and its current value as read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    /// Setting name
    pub key: String,
    /// Current value, `None` when the key is unset
    pub value: Option<String>,
}

/// Outcome of an ensure operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Setting name
    pub key: String,
    /// Value before reconciliation
    pub old_value: Option<String>,
    /// Value after reconciliation
    pub new_value: Option<String>,
    /// Whether a change was made (or would be made, in dry-run mode)
    pub changed: bool,
}

impl Reconciliation {
    pub(crate) fn unchanged(key: &str, value: Option<String>) -> Self {
        Self {
            key: key.to_string(),
            old_value: value.clone(),
            new_value: value,
            changed: false,
        }
    }
}

/// Outcome of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    /// Always `true` once a commit was requested
    pub committed: bool,
    /// Whether the commit is reported as a change
    pub changed: bool,
}
