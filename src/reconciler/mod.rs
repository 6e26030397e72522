//! Idempotent reconciliation of nvram settings.
//!
//! The [`Reconciler`] reads the current value of a key, compares it with the
//! declared target and applies the smallest change that makes them agree.
//! Nothing is cached: the store is read fresh for every operation.

mod policy;
mod types;

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicBool, Ordering};

pub use policy::ReconcilePolicy;
use tracing::{debug, info, instrument, warn};
pub use types::{CommitOutcome, Reconciliation, Setting};

use crate::{NvramError, Result, store::NvramStore};

/// Character the store uses to separate key from value.
pub const SEPARATOR: char = '=';

/// Drives an [`NvramStore`] towards declared key states.
pub struct Reconciler<S> {
    store: S,
    policy: ReconcilePolicy,
    changed: AtomicBool,
}

impl<S: NvramStore> Reconciler<S> {
    /// Creates a reconciler over `store` with the default policy.
    pub fn new(store: S) -> Self {
        Self::with_policy(store, ReconcilePolicy::default())
    }

    /// Creates a reconciler over `store` with an explicit policy.
    pub fn with_policy(store: S, policy: ReconcilePolicy) -> Self {
        Self {
            store,
            policy,
            changed: AtomicBool::new(false),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Policy in effect.
    pub fn policy(&self) -> &ReconcilePolicy {
        &self.policy
    }

    /// Whether any ensure operation on this reconciler reported a change.
    pub fn has_changes(&self) -> bool {
        self.changed.load(Ordering::Relaxed)
    }

    /// Reads the current value of `key`.
    ///
    /// A trailing newline is stripped and an empty result is reported as
    /// absent. A key explicitly set to the empty string therefore reads back
    /// as absent.
    ///
    /// # Errors
    /// * `NvramError::InvalidKey` - If `key` is empty
    /// * `NvramError::StoreAccess` - If the store cannot be queried
    #[instrument(skip(self))]
    pub fn query(&self, key: &str) -> Result<Setting> {
        validate_key(key)?;

        let raw = self.store.get(key)?;
        let value = normalize(raw);
        debug!(?value, "Queried nvram key");

        Ok(Setting {
            key: key.to_string(),
            value,
        })
    }

    /// Makes `key` hold `value`.
    ///
    /// After a real write the key is read back and the stored value is
    /// reported as `new_value`, since the store may silently normalize or
    /// drop the write. `changed` reports intent: it is `true` whenever the
    /// current value differs, including in dry-run mode where nothing is
    /// written.
    ///
    /// # Errors
    /// * `NvramError::InvalidKey` - If `key` is empty or contains `=`
    /// * `NvramError::InvalidValue` - If `value` contains `=`; no store call is made
    /// * `NvramError::StoreAccess` - If the store cannot be queried
    #[instrument(skip(self, value))]
    pub fn ensure_present(&self, key: &str, value: &str, dry_run: bool) -> Result<Reconciliation> {
        validate_key(key)?;
        if key.contains(SEPARATOR) {
            return Err(NvramError::InvalidKey {
                key: key.to_string(),
                reason: format!("keys written to nvram cannot contain '{SEPARATOR}'"),
            });
        }
        if value.contains(SEPARATOR) {
            return Err(NvramError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        let old_value = self.query(key)?.value;
        if old_value.as_deref() == Some(value) {
            debug!("Value already present");
            return Ok(Reconciliation::unchanged(key, old_value));
        }

        let mut new_value = old_value.clone();
        if dry_run {
            info!(?old_value, "Would set nvram key (dry run)");
        } else {
            if let Err(e) = self.store.set(key, value) {
                warn!(error = %e, "nvram set reported a failure; relying on read-back");
            }
            new_value = self.query(key)?.value;
            info!(?old_value, ?new_value, "Set nvram key");
        }

        self.changed.store(true, Ordering::Relaxed);
        Ok(Reconciliation {
            key: key.to_string(),
            old_value,
            new_value,
            changed: true,
        })
    }

    /// Makes `key` absent.
    ///
    /// `new_value` is reported as absent without reading the key back, unless
    /// [`ReconcilePolicy::verify_unset`] is set.
    ///
    /// # Errors
    /// * `NvramError::InvalidKey` - If `key` is empty
    /// * `NvramError::StoreAccess` - If the store cannot be queried
    #[instrument(skip(self))]
    pub fn ensure_absent(&self, key: &str, dry_run: bool) -> Result<Reconciliation> {
        let old_value = self.query(key)?.value;
        if old_value.is_none() {
            debug!("Key already absent");
            return Ok(Reconciliation::unchanged(key, None));
        }

        let mut new_value = None;
        if dry_run {
            info!(?old_value, "Would unset nvram key (dry run)");
        } else {
            if let Err(e) = self.store.unset(key) {
                warn!(error = %e, "nvram unset reported a failure");
            }
            if self.policy.verify_unset {
                new_value = self.query(key)?.value;
                if new_value.is_some() {
                    warn!(?new_value, "Key still present after unset");
                }
            }
            info!(?old_value, "Unset nvram key");
        }

        self.changed.store(true, Ordering::Relaxed);
        Ok(Reconciliation {
            key: key.to_string(),
            old_value,
            new_value,
            changed: true,
        })
    }

    /// Flushes volatile changes to durable storage.
    ///
    /// Commit always runs once requested, whether or not anything changed.
    /// With [`ReconcilePolicy::commit_always_reports_change`] (the default)
    /// the outcome is always reported as a change; otherwise it reports
    /// whether an ensure operation on this reconciler changed anything.
    ///
    /// # Errors
    /// * `NvramError::Commit` - If the store fails to persist
    #[instrument(skip(self))]
    pub fn commit(&self, dry_run: bool) -> Result<CommitOutcome> {
        if dry_run {
            info!("Would commit nvram (dry run)");
        } else {
            self.store.commit()?;
            info!("Committed nvram");
        }

        let changed = self.policy.commit_always_reports_change || self.has_changes();
        Ok(CommitOutcome {
            committed: true,
            changed,
        })
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(NvramError::InvalidKey {
            key: key.to_string(),
            reason: "key must not be empty".to_string(),
        });
    }
    Ok(())
}

fn normalize(mut raw: String) -> Option<String> {
    if raw.ends_with('\n') {
        raw.pop();
    }
    if raw.is_empty() { None } else { Some(raw) }
}
