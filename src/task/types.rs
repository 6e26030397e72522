use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::{
    NvramError,
    reconciler::{CommitOutcome, Reconciliation, Setting},
};

/// Declared state of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// The key holds `value`.
    #[default]
    Present,

    /// The key is unset.
    Absent,

    /// Read the key without changing it.
    Get,

    /// Same as `get`.
    Show,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskState::Present => write!(f, "present"),
            TaskState::Absent => write!(f, "absent"),
            TaskState::Get => write!(f, "get"),
            TaskState::Show => write!(f, "show"),
        }
    }
}

/// Arguments of an nvram task, as supplied by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskArgs {
    /// Name of the nvram setting to operate on.
    pub key: String,

    /// Value to store. Required when `state` is `present`; must not contain `=`.
    /// Numbers are accepted and stored in their JSON text form.
    #[serde(default, deserialize_with = "scalar_string")]
    pub value: Option<String>,

    /// Whether the key should be present, absent, or only read.
    #[serde(default)]
    pub state: TaskState,

    /// Save all changed settings to non-volatile storage afterwards.
    #[serde(default, deserialize_with = "flag")]
    pub commit: bool,

    /// Report what would change without touching the store.
    #[serde(default, alias = "_ansible_check_mode", deserialize_with = "flag")]
    pub check_mode: bool,
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!(
            "invalid type: {other}, expected a string or number"
        ))),
    }
}

/// Accepts JSON booleans plus the usual orchestrator spellings
/// (`yes`/`no`, `on`/`off`, `true`/`false`, `1`/`0`).
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Null => Some(false),
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "on" | "1" | "true" | "t" => Some(true),
            "n" | "no" | "off" | "0" | "false" | "f" => Some(false),
            _ => None,
        },
        _ => None,
    };

    parsed.ok_or_else(|| de::Error::custom(format!("invalid boolean: {value}")))
}

impl TaskArgs {
    /// Arguments for the given key and state with every option at its default.
    pub fn new(key: impl Into<String>, state: TaskState) -> Self {
        Self {
            key: key.into(),
            value: None,
            state,
            commit: false,
            check_mode: false,
        }
    }

    /// Sets the target value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Requests a commit after the state operation.
    pub fn with_commit(mut self, commit: bool) -> Self {
        self.commit = commit;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }
}

/// Result reported back to the orchestrator.
///
/// `value` is only present for `get`; `old_value` and `new_value` only for
/// `present` and `absent`. Inner `None` serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskReport {
    /// Whether the task changed (or would change) the store.
    pub changed: bool,

    /// Whether a commit was issued.
    pub committed: bool,

    /// Key operated on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Current value, from `get`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Option<String>>,

    /// Value before the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Option<String>>,

    /// Value after the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Option<String>>,
}

impl TaskReport {
    pub(crate) fn apply_setting(&mut self, setting: Setting) {
        self.key = Some(setting.key);
        self.value = Some(setting.value);
    }

    pub(crate) fn apply_reconciliation(&mut self, result: Reconciliation) {
        self.key = Some(result.key);
        self.old_value = Some(result.old_value);
        self.new_value = Some(result.new_value);
        self.changed = result.changed;
    }

    pub(crate) fn apply_commit(&mut self, outcome: CommitOutcome) {
        self.committed = outcome.committed;
        self.changed = outcome.changed;
    }
}

/// Structured failure reported back to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskFailure {
    /// Always `true`.
    pub failed: bool,

    /// Human-readable error message.
    pub msg: String,

    /// Failure class, e.g. `invalid_value` or `store_access`.
    pub kind: String,
}

impl From<&NvramError> for TaskFailure {
    fn from(error: &NvramError) -> Self {
        Self {
            failed: true,
            msg: error.to_string(),
            kind: error.kind().to_string(),
        }
    }
}
