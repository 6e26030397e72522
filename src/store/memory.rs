use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::NvramStore;
use crate::{NvramError, Result};

/// A primitive call recorded by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `get KEY`
    Get(String),
    /// `set KEY=VALUE`
    Set(String, String),
    /// `unset KEY`
    Unset(String),
    /// `commit`
    Commit,
}

#[derive(Debug, Default)]
struct MemoryState {
    volatile: BTreeMap<String, String>,
    durable: BTreeMap<String, String>,
    calls: Vec<StoreCall>,
    fail_get: bool,
    fail_writes: bool,
    ignore_writes: bool,
    fail_commit: bool,
}

/// In-memory nvram store.
///
/// Clones share the same state, so a test can hand one clone to a
/// `Reconciler` and inspect the other. `get` answers the way the `nvram`
/// tool does: the value followed by a newline, or nothing when unset.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose volatile and durable state hold `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        {
            let mut state = store.lock();
            for (key, value) in entries {
                let (key, value) = (key.into(), value.into());
                state.durable.insert(key.clone(), value.clone());
                state.volatile.insert(key, value);
            }
        }
        store
    }

    /// Makes every `get` fail with a store access error.
    pub fn fail_get(&self, fail: bool) {
        self.lock().fail_get = fail;
    }

    /// Makes every `set` and `unset` fail with a store access error.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Accepts `set` and `unset` calls without applying them.
    pub fn ignore_writes(&self, ignore: bool) {
        self.lock().ignore_writes = ignore;
    }

    /// Makes every `commit` fail.
    pub fn fail_commit(&self, fail: bool) {
        self.lock().fail_commit = fail;
    }

    /// Current volatile value of `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.lock().volatile.get(key).cloned()
    }

    /// Value of `key` as of the last commit.
    pub fn committed_value(&self, key: &str) -> Option<String> {
        self.lock().durable.get(key).cloned()
    }

    /// Every primitive call made so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Number of primitive calls made so far.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NvramStore for MemoryStore {
    fn get(&self, key: &str) -> Result<String> {
        let mut state = self.lock();
        state.calls.push(StoreCall::Get(key.to_string()));

        if state.fail_get {
            return Err(NvramError::store_access("get", "memory store: get disabled"));
        }

        Ok(state
            .volatile
            .get(key)
            .map(|value| format!("{value}\n"))
            .unwrap_or_default())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.lock();
        state
            .calls
            .push(StoreCall::Set(key.to_string(), value.to_string()));

        if state.fail_writes {
            return Err(NvramError::store_access("set", "memory store: writes disabled"));
        }
        if !state.ignore_writes {
            state.volatile.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(StoreCall::Unset(key.to_string()));

        if state.fail_writes {
            return Err(NvramError::store_access("unset", "memory store: writes disabled"));
        }
        if !state.ignore_writes {
            state.volatile.remove(key);
        }
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(StoreCall::Commit);

        if state.fail_commit {
            return Err(NvramError::Commit("memory store: commit disabled".to_string()));
        }
        state.durable = state.volatile.clone();
        Ok(())
    }
}
