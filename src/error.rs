use std::{io, result};

use thiserror::Error;

use crate::config::ConfigError;

/// Error types for nvram reconciliation.
///
/// Every variant maps to a stable [`kind`](NvramError::kind) string so
/// orchestration callers can branch on the failure class without parsing
/// messages.
#[derive(Error, Debug)]
pub enum NvramError {
    /// The value cannot be stored because it contains `=`.
    ///
    /// The store serializes settings as `key=value` and has no way to escape
    /// the separator. Raised before the store is touched.
    #[error("value for '{key}' contains '=', which nvram cannot store: {value:?}")]
    InvalidValue {
        /// Key the value was destined for
        key: String,
        /// Rejected value
        value: String,
    },

    /// The key is empty or cannot be addressed by the store.
    #[error("invalid nvram key {key:?}: {reason}")]
    InvalidKey {
        /// Rejected key
        key: String,
        /// Why the key was rejected
        reason: String,
    },

    /// A task argument required by the requested state was not supplied.
    #[error("missing required argument '{argument}' for state '{state}'")]
    MissingArgument {
        /// Name of the missing argument
        argument: String,
        /// State that requires it
        state: String,
    },

    /// Task arguments could not be parsed.
    #[error("invalid task arguments: {0}")]
    InvalidArguments(String),

    /// The store could not be queried or returned an unexpected result.
    #[error("nvram {operation} failed: {details}")]
    StoreAccess {
        /// Store primitive that failed (`get`, `set`, `unset`)
        operation: String,
        /// Underlying failure
        details: String,
    },

    /// Flushing volatile settings to durable storage failed.
    #[error("nvram commit failed: {0}")]
    Commit(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O failure outside the store itself (argument files, output).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for nvram operations.
pub type Result<T> = result::Result<T, NvramError>;

impl NvramError {
    /// Creates a store access error for the given primitive.
    pub fn store_access(operation: &str, details: impl ToString) -> Self {
        NvramError::StoreAccess {
            operation: operation.to_string(),
            details: details.to_string(),
        }
    }

    /// Stable machine-readable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            NvramError::InvalidValue { .. } => "invalid_value",
            NvramError::InvalidKey { .. } => "invalid_key",
            NvramError::MissingArgument { .. } => "missing_argument",
            NvramError::InvalidArguments(_) => "invalid_arguments",
            NvramError::StoreAccess { .. } => "store_access",
            NvramError::Commit(_) => "commit",
            NvramError::Config(_) => "config",
            NvramError::Io(_) => "io",
        }
    }
}
