//! Unit tests for task runs and the report contract

#![allow(clippy::unwrap_used)]

use serde_json::json;

use crate::reconciler::Reconciler;
use crate::store::{MemoryStore, StoreCall};
use crate::task::{Phase, TaskArgs, TaskFailure, TaskReport, TaskState, advance, parse_args, run};

fn present(key: &str, value: &str) -> TaskArgs {
    TaskArgs::new(key, TaskState::Present).with_value(value)
}

#[test]
fn foo_bar_scenario() {
    let store = MemoryStore::new();
    let reconciler = Reconciler::new(store.clone());

    let first = run(&reconciler, &present("foo", "bar")).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        json!({
            "changed": true,
            "committed": false,
            "key": "foo",
            "old_value": null,
            "new_value": "bar",
        })
    );

    let second = run(&reconciler, &present("foo", "bar")).unwrap();
    assert_eq!(
        serde_json::to_value(&second).unwrap(),
        json!({
            "changed": false,
            "committed": false,
            "key": "foo",
            "old_value": "bar",
            "new_value": "bar",
        })
    );

    let removed = run(&reconciler, &TaskArgs::new("foo", TaskState::Absent)).unwrap();
    assert_eq!(
        serde_json::to_value(&removed).unwrap(),
        json!({
            "changed": true,
            "committed": false,
            "key": "foo",
            "old_value": "bar",
            "new_value": null,
        })
    );
}

#[test]
fn get_reports_value_only() {
    let store = MemoryStore::with_entries([("wl0_ssid", "home")]);
    let reconciler = Reconciler::new(store);

    let report = run(&reconciler, &TaskArgs::new("wl0_ssid", TaskState::Get)).unwrap();

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({"changed": false, "committed": false, "key": "wl0_ssid", "value": "home"})
    );
}

#[test]
fn show_behaves_like_get() {
    let reconciler = Reconciler::new(MemoryStore::new());

    let report = run(&reconciler, &TaskArgs::new("missing", TaskState::Show)).unwrap();

    assert_eq!(report.value, Some(None));
    assert!(!report.changed);
}

#[test]
fn present_without_value_fails_before_store_access() {
    let store = MemoryStore::new();
    let reconciler = Reconciler::new(store.clone());

    let err = run(&reconciler, &TaskArgs::new("foo", TaskState::Present)).unwrap_err();

    assert_eq!(err.kind(), "missing_argument");
    assert_eq!(store.call_count(), 0);
}

#[test]
fn invalid_value_becomes_structured_failure() {
    let store = MemoryStore::new();
    let reconciler = Reconciler::new(store.clone());

    let err = run(&reconciler, &present("foo", "a=b").with_commit(true)).unwrap_err();
    let failure = TaskFailure::from(&err);

    assert!(failure.failed);
    assert_eq!(failure.kind, "invalid_value");
    assert!(failure.msg.contains("foo"));
    assert_eq!(store.call_count(), 0);
}

#[test]
fn commit_overrides_changed() {
    let store = MemoryStore::with_entries([("foo", "bar")]);
    let reconciler = Reconciler::new(store.clone());

    let report = run(&reconciler, &present("foo", "bar").with_commit(true)).unwrap();

    assert!(report.changed);
    assert!(report.committed);
    assert_eq!(
        store.calls(),
        vec![StoreCall::Get("foo".into()), StoreCall::Commit]
    );
}

#[test]
fn commit_follows_get() {
    let store = MemoryStore::new();
    let reconciler = Reconciler::new(store.clone());

    let args = TaskArgs::new("foo", TaskState::Get).with_commit(true);
    let report = run(&reconciler, &args).unwrap();

    assert!(report.committed);
    assert_eq!(store.calls().last(), Some(&StoreCall::Commit));
}

#[test]
fn check_mode_leaves_store_untouched() {
    let store = MemoryStore::with_entries([("foo", "old")]);
    let reconciler = Reconciler::new(store.clone());

    let args = present("foo", "new").with_commit(true).with_check_mode(true);
    let report = run(&reconciler, &args).unwrap();

    assert!(report.changed);
    assert!(report.committed);
    assert_eq!(store.value("foo").as_deref(), Some("old"));
    assert_eq!(store.calls(), vec![StoreCall::Get("foo".into())]);
}

#[test]
fn commit_failure_aborts_run() {
    let store = MemoryStore::new();
    store.fail_commit(true);
    let reconciler = Reconciler::new(store.clone());

    let err = run(&reconciler, &present("foo", "bar").with_commit(true)).unwrap_err();

    assert_eq!(err.kind(), "commit");
    assert_eq!(store.value("foo").as_deref(), Some("bar"));
    assert_eq!(store.committed_value("foo"), None);
}

mod phases {
    use super::*;

    fn phase_after(store: &MemoryStore, args: &TaskArgs) -> (Phase, bool) {
        let reconciler = Reconciler::new(store.clone());
        let mut report = TaskReport::default();
        let mut phase = Phase::NotStarted;
        let ok = advance(&reconciler, args, &mut report, &mut phase).is_ok();
        (phase, ok)
    }

    #[test]
    fn successful_runs_reach_their_last_phase() {
        let store = MemoryStore::new();

        assert_eq!(
            phase_after(&store, &TaskArgs::new("foo", TaskState::Get)),
            (Phase::Queried, true)
        );
        assert_eq!(phase_after(&store, &present("foo", "bar")), (Phase::Reconciled, true));
        assert_eq!(
            phase_after(&store, &present("foo", "bar").with_commit(true)),
            (Phase::Committed, true)
        );
    }

    #[test]
    fn failed_query_stops_before_any_phase() {
        let store = MemoryStore::new();
        store.fail_get(true);

        let (phase, ok) = phase_after(&store, &present("foo", "bar").with_commit(true));

        assert!(!ok);
        assert_eq!(phase, Phase::NotStarted);
        assert!(!store.calls().contains(&StoreCall::Commit));
    }

    #[test]
    fn failed_commit_stops_after_reconcile() {
        let store = MemoryStore::new();
        store.fail_commit(true);

        let (phase, ok) = phase_after(&store, &present("foo", "bar").with_commit(true));

        assert!(!ok);
        assert_eq!(phase, Phase::Reconciled);
    }
}

mod args {
    use super::*;

    #[test]
    fn defaults_apply() {
        let args = parse_args(r#"{"key": "foo", "value": "bar"}"#).unwrap();

        assert_eq!(args.state, TaskState::Present);
        assert!(!args.commit);
        assert!(!args.check_mode);
    }

    #[test]
    fn accepts_orchestrator_fields() {
        let args = parse_args(
            r#"{
                "key": "foo",
                "state": "absent",
                "commit": true,
                "_ansible_check_mode": true,
                "_ansible_verbosity": 2
            }"#,
        )
        .unwrap();

        assert_eq!(args.state, TaskState::Absent);
        assert!(args.commit);
        assert!(args.check_mode);
    }

    #[test]
    fn rejects_missing_key() {
        let err = parse_args(r#"{"value": "bar"}"#).unwrap_err();

        assert_eq!(err.kind(), "invalid_arguments");
    }

    #[test]
    fn rejects_unknown_state() {
        let err = parse_args(r#"{"key": "foo", "state": "latest"}"#).unwrap_err();

        assert_eq!(err.kind(), "invalid_arguments");
    }

    #[test]
    fn numeric_value_becomes_string() {
        let args = parse_args(r#"{"key": "wl0_closed", "value": 1}"#).unwrap();
        assert_eq!(args.value.as_deref(), Some("1"));

        let args = parse_args(r#"{"key": "wan_mtu", "value": 1492.5}"#).unwrap();
        assert_eq!(args.value.as_deref(), Some("1492.5"));

        let args = parse_args(r#"{"key": "foo", "state": "absent", "value": null}"#).unwrap();
        assert_eq!(args.value, None);
    }

    #[test]
    fn numeric_value_settles_on_rerun() {
        let store = MemoryStore::with_entries([("wl0_closed", "1")]);
        let reconciler = Reconciler::new(store);

        let args = parse_args(r#"{"key": "wl0_closed", "value": 1}"#).unwrap();
        let report = run(&reconciler, &args).unwrap();

        assert!(!report.changed);
    }

    #[test]
    fn rejects_structured_value() {
        let err = parse_args(r#"{"key": "foo", "value": ["a", "b"]}"#).unwrap_err();
        assert_eq!(err.kind(), "invalid_arguments");

        let err = parse_args(r#"{"key": "foo", "value": true}"#).unwrap_err();
        assert_eq!(err.kind(), "invalid_arguments");
    }

    #[test]
    fn flags_accept_boolean_spellings() {
        for (raw, expected) in [
            (r#""yes""#, true),
            (r#""no""#, false),
            (r#""True""#, true),
            (r#""false""#, false),
            (r#""on""#, true),
            (r#""off""#, false),
            (r#""1""#, true),
            (r#""0""#, false),
            ("1", true),
            ("0", false),
            ("null", false),
        ] {
            let json = format!(
                r#"{{"key": "foo", "value": "bar", "commit": {raw}, "check_mode": {raw}}}"#
            );
            let args = parse_args(&json).unwrap();

            assert_eq!(args.commit, expected, "commit: {raw}");
            assert_eq!(args.check_mode, expected, "check_mode: {raw}");
        }
    }

    #[test]
    fn commit_yes_commits() {
        let store = MemoryStore::new();
        let reconciler = Reconciler::new(store.clone());

        let args = parse_args(r#"{"key": "foo", "value": "bar", "commit": "yes"}"#).unwrap();
        let report = run(&reconciler, &args).unwrap();

        assert!(report.committed);
        assert_eq!(store.committed_value("foo").as_deref(), Some("bar"));
    }

    #[test]
    fn rejects_unknown_flag_spelling() {
        let err = parse_args(r#"{"key": "foo", "commit": "maybe"}"#).unwrap_err();
        assert_eq!(err.kind(), "invalid_arguments");

        let err = parse_args(r#"{"key": "foo", "check_mode": 2}"#).unwrap_err();
        assert_eq!(err.kind(), "invalid_arguments");
    }
}
