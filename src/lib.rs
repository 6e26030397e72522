//! nvram-task - Idempotent management of DD-WRT nvram settings.
//!
//! Settings on the router's non-volatile storage are read and written
//! through the `nvram` tool. This crate wraps that tool in a declarative
//! task: declare that a key is present with a value, absent, or only read,
//! and the task makes the smallest change needed, optionally committing.
//!
//! # Quick Start
//!
//! ```rust
//! use nvram_task::{reconciler::Reconciler, store::MemoryStore};
//!
//! let reconciler = Reconciler::new(MemoryStore::new());
//!
//! let first = reconciler.ensure_present("foo", "bar", false)?;
//! assert!(first.changed);
//!
//! let second = reconciler.ensure_present("foo", "bar", false)?;
//! assert!(!second.changed);
//! # Ok::<(), nvram_task::NvramError>(())
//! ```

/// Command-line interface.
pub mod cli;

/// Configuration file schema and loading.
pub mod config;

/// Documentation generation for the task contract and configuration.
pub mod docs;

/// Error types and result aliases.
pub mod error;

/// Idempotent reconciliation of nvram keys.
pub mod reconciler;

/// Store access primitives.
pub mod store;

/// Orchestrator-facing task contract.
pub mod task;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use error::{NvramError, Result};
