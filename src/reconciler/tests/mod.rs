//! Unit tests for the reconciler
//!
//! All tests run against the in-memory store; call counts stand in for
//! observing the `nvram` process.

#![allow(clippy::unwrap_used)]

use crate::reconciler::{ReconcilePolicy, Reconciler};
use crate::store::{MemoryStore, StoreCall};

fn reconciler(store: &MemoryStore) -> Reconciler<MemoryStore> {
    Reconciler::new(store.clone())
}

mod query {
    use super::*;

    #[test]
    fn strips_trailing_newline() {
        let store = MemoryStore::with_entries([("router_name", "DD-WRT")]);

        let setting = reconciler(&store).query("router_name").unwrap();

        assert_eq!(setting.key, "router_name");
        assert_eq!(setting.value.as_deref(), Some("DD-WRT"));
    }

    #[test]
    fn missing_key_is_absent() {
        let store = MemoryStore::new();

        let setting = reconciler(&store).query("nope").unwrap();

        assert_eq!(setting.value, None);
        assert_eq!(store.calls(), vec![StoreCall::Get("nope".into())]);
    }

    #[test]
    fn empty_value_reads_as_absent() {
        let store = MemoryStore::with_entries([("blank", "")]);

        let setting = reconciler(&store).query("blank").unwrap();

        assert_eq!(setting.value, None);
    }

    #[test]
    fn store_failure_is_store_access_error() {
        let store = MemoryStore::new();
        store.fail_get(true);

        let err = reconciler(&store).query("foo").unwrap_err();

        assert_eq!(err.kind(), "store_access");
    }

    #[test]
    fn empty_key_rejected_without_store_call() {
        let store = MemoryStore::new();

        let err = reconciler(&store).query("").unwrap_err();

        assert_eq!(err.kind(), "invalid_key");
        assert_eq!(store.call_count(), 0);
    }
}

mod ensure_present {
    use super::*;

    #[test]
    fn sets_then_is_idempotent() {
        let store = MemoryStore::new();
        let reconciler = reconciler(&store);

        let first = reconciler.ensure_present("foo", "bar", false).unwrap();
        assert_eq!(first.old_value, None);
        assert_eq!(first.new_value.as_deref(), Some("bar"));
        assert!(first.changed);

        let second = reconciler.ensure_present("foo", "bar", false).unwrap();
        assert_eq!(second.old_value.as_deref(), Some("bar"));
        assert_eq!(second.new_value.as_deref(), Some("bar"));
        assert!(!second.changed);
    }

    #[test]
    fn unchanged_value_makes_single_get() {
        let store = MemoryStore::with_entries([("foo", "bar")]);

        reconciler(&store).ensure_present("foo", "bar", false).unwrap();

        assert_eq!(store.calls(), vec![StoreCall::Get("foo".into())]);
    }

    #[test]
    fn write_is_followed_by_read_back() {
        let store = MemoryStore::with_entries([("foo", "old")]);

        reconciler(&store).ensure_present("foo", "new", false).unwrap();

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::Get("foo".into()),
                StoreCall::Set("foo".into(), "new".into()),
                StoreCall::Get("foo".into()),
            ]
        );
    }

    #[test]
    fn value_with_separator_makes_no_store_calls() {
        let store = MemoryStore::new();

        let err = reconciler(&store)
            .ensure_present("foo", "a=b", false)
            .unwrap_err();

        assert_eq!(err.kind(), "invalid_value");
        assert_eq!(store.call_count(), 0);
    }

    #[test]
    fn key_with_separator_rejected() {
        let store = MemoryStore::new();

        let err = reconciler(&store)
            .ensure_present("a=b", "c", false)
            .unwrap_err();

        assert_eq!(err.kind(), "invalid_key");
        assert_eq!(store.call_count(), 0);
    }

    #[test]
    fn dry_run_reports_change_without_writing() {
        let store = MemoryStore::with_entries([("foo", "old")]);

        let result = reconciler(&store).ensure_present("foo", "new", true).unwrap();

        assert!(result.changed);
        assert_eq!(result.old_value.as_deref(), Some("old"));
        assert_eq!(result.new_value.as_deref(), Some("old"));
        assert_eq!(store.value("foo").as_deref(), Some("old"));
        assert_eq!(store.calls(), vec![StoreCall::Get("foo".into())]);
    }

    #[test]
    fn read_back_is_authoritative() {
        let store = MemoryStore::with_entries([("foo", "old")]);
        store.ignore_writes(true);

        let result = reconciler(&store).ensure_present("foo", "new", false).unwrap();

        assert!(result.changed);
        assert_eq!(result.new_value.as_deref(), Some("old"));
    }

    #[test]
    fn failed_write_is_tolerated() {
        let store = MemoryStore::new();
        store.fail_writes(true);

        let result = reconciler(&store).ensure_present("foo", "bar", false).unwrap();

        assert!(result.changed);
        assert_eq!(result.new_value, None);
    }

    #[test]
    fn empty_target_never_settles() {
        let store = MemoryStore::new();
        let reconciler = reconciler(&store);

        let first = reconciler.ensure_present("foo", "", false).unwrap();
        let second = reconciler.ensure_present("foo", "", false).unwrap();

        assert!(first.changed);
        assert!(second.changed);
        assert_eq!(second.new_value, None);
    }
}

mod ensure_absent {
    use super::*;

    #[test]
    fn unsets_then_is_idempotent() {
        let store = MemoryStore::with_entries([("foo", "bar")]);
        let reconciler = reconciler(&store);

        let first = reconciler.ensure_absent("foo", false).unwrap();
        assert_eq!(first.old_value.as_deref(), Some("bar"));
        assert_eq!(first.new_value, None);
        assert!(first.changed);

        let second = reconciler.ensure_absent("foo", false).unwrap();
        assert_eq!(second.old_value, None);
        assert!(!second.changed);
    }

    #[test]
    fn does_not_read_back_by_default() {
        let store = MemoryStore::with_entries([("foo", "bar")]);
        store.ignore_writes(true);

        let result = reconciler(&store).ensure_absent("foo", false).unwrap();

        assert_eq!(result.new_value, None);
        assert_eq!(
            store.calls(),
            vec![StoreCall::Get("foo".into()), StoreCall::Unset("foo".into())]
        );
    }

    #[test]
    fn verify_unset_reports_surviving_value() {
        let store = MemoryStore::with_entries([("foo", "bar")]);
        store.ignore_writes(true);
        let policy = ReconcilePolicy {
            verify_unset: true,
            ..ReconcilePolicy::default()
        };

        let result = Reconciler::with_policy(store.clone(), policy)
            .ensure_absent("foo", false)
            .unwrap();

        assert!(result.changed);
        assert_eq!(result.new_value.as_deref(), Some("bar"));
        assert_eq!(store.call_count(), 3);
    }

    #[test]
    fn dry_run_leaves_key() {
        let store = MemoryStore::with_entries([("foo", "bar")]);

        let result = reconciler(&store).ensure_absent("foo", true).unwrap();

        assert!(result.changed);
        assert_eq!(result.new_value, None);
        assert_eq!(store.value("foo").as_deref(), Some("bar"));
    }

    #[test]
    fn present_then_absent_then_query() {
        let store = MemoryStore::new();
        let reconciler = reconciler(&store);

        reconciler.ensure_present("foo", "v", false).unwrap();
        reconciler.ensure_absent("foo", false).unwrap();

        assert_eq!(reconciler.query("foo").unwrap().value, None);
    }
}

mod commit {
    use super::*;

    #[test]
    fn reports_change_without_prior_ensure() {
        let store = MemoryStore::new();

        let outcome = reconciler(&store).commit(false).unwrap();

        assert!(outcome.committed);
        assert!(outcome.changed);
        assert_eq!(store.calls(), vec![StoreCall::Commit]);
    }

    #[test]
    fn dry_run_skips_store() {
        let store = MemoryStore::new();

        let outcome = reconciler(&store).commit(true).unwrap();

        assert!(outcome.committed);
        assert!(outcome.changed);
        assert_eq!(store.call_count(), 0);
    }

    #[test]
    fn failure_is_commit_error() {
        let store = MemoryStore::new();
        store.fail_commit(true);

        let err = reconciler(&store).commit(false).unwrap_err();

        assert_eq!(err.kind(), "commit");
    }

    #[test]
    fn persists_volatile_values() {
        let store = MemoryStore::new();
        let reconciler = reconciler(&store);

        reconciler.ensure_present("foo", "bar", false).unwrap();
        assert_eq!(store.committed_value("foo"), None);

        reconciler.commit(false).unwrap();
        assert_eq!(store.committed_value("foo").as_deref(), Some("bar"));
    }

    #[test]
    fn conditional_reporting_follows_prior_changes() {
        let store = MemoryStore::with_entries([("foo", "bar")]);
        let policy = ReconcilePolicy {
            commit_always_reports_change: false,
            ..ReconcilePolicy::default()
        };
        let reconciler = Reconciler::with_policy(store.clone(), policy);

        reconciler.ensure_present("foo", "bar", false).unwrap();
        assert!(!reconciler.commit(false).unwrap().changed);

        reconciler.ensure_present("foo", "baz", false).unwrap();
        let outcome = reconciler.commit(false).unwrap();
        assert!(outcome.committed);
        assert!(outcome.changed);
    }
}
