//! Access to the router's nvram settings store.
//!
//! The store is addressed only through four primitives. [`CommandStore`]
//! drives the real `nvram` program; [`MemoryStore`] keeps settings in memory
//! and records calls so reconciliation can be exercised without a router.

mod command;
mod memory;

pub use command::{CommandStore, DEFAULT_PROGRAM};
pub use memory::{MemoryStore, StoreCall};

use crate::Result;

/// Primitive operations of an nvram-style key/value store.
///
/// Writes land in volatile state until [`commit`](NvramStore::commit) is
/// called.
pub trait NvramStore: Send + Sync {
    /// Returns the raw output of reading `key`.
    ///
    /// The output is not normalized: it may carry a trailing newline and is
    /// empty when the key is unset.
    ///
    /// # Errors
    /// Returns `NvramError::StoreAccess` if the store cannot be queried.
    fn get(&self, key: &str) -> Result<String>;

    /// Writes `key=value` into volatile state.
    ///
    /// # Errors
    /// Returns `NvramError::StoreAccess` if the write could not be issued.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` from volatile state.
    ///
    /// # Errors
    /// Returns `NvramError::StoreAccess` if the removal could not be issued.
    fn unset(&self, key: &str) -> Result<()>;

    /// Flushes volatile state to durable storage.
    ///
    /// # Errors
    /// Returns `NvramError::Commit` if the flush fails.
    fn commit(&self) -> Result<()>;
}

impl<S: NvramStore + ?Sized> NvramStore for Box<S> {
    fn get(&self, key: &str) -> Result<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn unset(&self, key: &str) -> Result<()> {
        (**self).unset(key)
    }

    fn commit(&self) -> Result<()> {
        (**self).commit()
    }
}
