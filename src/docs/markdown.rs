use schemars::{JsonSchema, schema_for};

use super::{PropertyInfo, extract_property_info, generator::DocsError};
use crate::{
    config::{GeneralConfig, StoreConfig},
    reconciler::ReconcilePolicy,
    task::{TaskArgs, TaskReport},
};

const TABLE_HEADER: &str = "| Property | Type | Required | Description | Default |\n|----------|------|----------|-------------|---------|";

/// Generates a markdown table documenting schema properties.
pub fn generate_property_table(
    section_title: &str,
    context: &str,
    properties: Vec<PropertyInfo>,
) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let property_rows = properties
        .iter()
        .map(|prop| {
            format!(
                "| `{}` | `{}` | {} | {} | `{}` |",
                prop.name,
                prop.type_name,
                if prop.required { "yes" } else { "no" },
                prop.description,
                prop.default_value
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "## {}\n{}\n\n{}\n{}\n",
        section_title, context, TABLE_HEADER, property_rows
    )
}

/// Generates the task reference page: accepted arguments and returned fields.
///
/// # Errors
///
/// Returns `DocsError::SchemaConversion` if schema serialization fails.
pub fn generate_task_page() -> Result<String, DocsError> {
    let mut content = String::from(
        "# nvram task\n\nManage DD-WRT nvram settings idempotently.\n\n",
    );

    content.push_str(&section::<TaskArgs>(
        "Arguments",
        "Fields of the JSON arguments file passed to `nvram-task run`.",
    )?);
    content.push('\n');
    content.push_str(&section::<TaskReport>(
        "Return values",
        "Fields of the JSON object printed on success.",
    )?);

    Ok(content)
}

/// Generates the configuration reference page.
///
/// # Errors
///
/// Returns `DocsError::SchemaConversion` if schema serialization fails.
pub fn generate_config_page() -> Result<String, DocsError> {
    let mut content = String::from("# Configuration\n\n");

    content.push_str(&section::<GeneralConfig>("General", "**Config path:** `[general]`")?);
    content.push('\n');
    content.push_str(&section::<StoreConfig>("Store", "**Config path:** `[store]`")?);
    content.push('\n');
    content.push_str(&section::<ReconcilePolicy>(
        "Reconcile",
        "**Config path:** `[reconcile]`",
    )?);

    Ok(content)
}

fn section<T: JsonSchema>(title: &str, context: &str) -> Result<String, DocsError> {
    let schema = serde_json::to_value(schema_for!(T)).map_err(|e| {
        DocsError::SchemaConversion(format!("Failed to generate section '{title}': {e}"))
    })?;

    Ok(generate_property_table(
        title,
        context,
        extract_property_info(&schema),
    ))
}
