#![allow(clippy::unwrap_used)]

use serde_json::json;
use tempfile::TempDir;

use crate::docs::{
    DocsGenerator, extract_property_info, generate_config_page, generate_property_table,
    generate_task_page,
};

#[test]
fn extracts_types_defaults_and_required() {
    let schema = json!({
        "properties": {
            "key": {"type": "string", "description": "Setting name"},
            "value": {"type": ["string", "null"]},
            "commit": {"type": "boolean", "default": false},
            "state": {"$ref": "#/$defs/TaskState", "default": "present"}
        },
        "required": ["key"]
    });

    let mut properties = extract_property_info(&schema);
    properties.sort_by(|a, b| a.name.cmp(&b.name));

    let commit = &properties[0];
    assert_eq!(commit.type_name, "boolean");
    assert_eq!(commit.default_value, "false");
    assert!(!commit.required);

    let key = &properties[1];
    assert!(key.required);
    assert_eq!(key.description, "Setting name");
    assert_eq!(key.default_value, "-");

    let state = &properties[2];
    assert_eq!(state.type_name, "TaskState");
    assert_eq!(state.default_value, "\"present\"");

    let value = &properties[3];
    assert_eq!(value.type_name, "string | null");
    assert_eq!(value.description, "No description provided");
}

#[test]
fn schema_without_properties() {
    assert!(extract_property_info(&json!({"type": "string"})).is_empty());
}

#[test]
fn empty_table_renders_nothing() {
    assert_eq!(generate_property_table("Empty", "-", Vec::new()), "");
}

#[test]
fn task_page_documents_arguments_and_results() {
    let page = generate_task_page().unwrap();

    for field in ["`key`", "`value`", "`state`", "`commit`", "`check_mode`"] {
        assert!(page.contains(field), "task page is missing {field}");
    }
    for field in ["`changed`", "`committed`", "`old_value`", "`new_value`"] {
        assert!(page.contains(field), "task page is missing {field}");
    }
}

#[test]
fn config_page_documents_sections() {
    let page = generate_config_page().unwrap();

    assert!(page.contains("`[store]`"));
    assert!(page.contains("`program`"));
    assert!(page.contains("`verify_unset`"));
    assert!(page.contains("`commit_always_reports_change`"));
    assert!(page.contains("`log_level`"));
}

#[test]
fn generator_writes_pages() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("docs");

    DocsGenerator::new()
        .with_output_dir(output.to_string_lossy())
        .generate_all()
        .unwrap();

    assert!(output.join("task.md").exists());
    assert!(output.join("config.md").exists());
}

#[test]
fn task_schema_is_json() {
    let schema = DocsGenerator::new().task_schema().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

    assert!(value.get("properties").is_some());
}

#[test]
fn report_schema_lists_result_fields() {
    let schema = DocsGenerator::new().report_schema().unwrap();
    let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
    let properties = value.get("properties").unwrap();

    for field in ["changed", "committed", "key", "value", "old_value", "new_value"] {
        assert!(properties.get(field).is_some(), "missing {field}");
    }
}
