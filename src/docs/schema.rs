//! Property extraction from JSON Schema documents.

use serde_json::Value;

/// Information about a single property in a JSON Schema.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    /// The name of the property as defined in the schema.
    pub name: String,
    /// The JSON Schema type of the property (e.g., "string", "boolean").
    pub type_name: String,
    /// Human-readable description of the property.
    pub description: String,
    /// Whether the schema lists the property as required.
    pub required: bool,
    /// String representation of the default value, or "-" if not specified.
    pub default_value: String,
}

/// Extracts property information from a JSON Schema document.
///
/// Returns an empty vector if the schema has no properties.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use nvram_task::docs::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "key": {
///             "type": "string",
///             "description": "Name of the nvram setting"
///         }
///     },
///     "required": ["key"]
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "key");
/// assert!(properties[0].required);
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    let required: Vec<&str> = schema
        .get("required")
        .and_then(|r| r.as_array())
        .map(|names| names.iter().filter_map(|n| n.as_str()).collect())
        .unwrap_or_default();

    schema
        .get("properties")
        .and_then(|props| props.as_object())
        .map(|props| build_properties(props, &required))
        .unwrap_or_default()
}

fn build_properties(
    props_obj: &serde_json::Map<String, Value>,
    required: &[&str],
) -> Vec<PropertyInfo> {
    props_obj
        .iter()
        .map(|(name, property)| PropertyInfo {
            name: name.clone(),
            type_name: get_type(property),
            description: get_description(property),
            required: required.contains(&name.as_str()),
            default_value: get_default_value(property),
        })
        .collect()
}

fn get_type(property: &Value) -> String {
    match property.get("type") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(|t| t.as_str())
            .collect::<Vec<&str>>()
            .join(" | "),
        _ => property
            .get("$ref")
            .and_then(|r| r.as_str())
            .and_then(|r| r.rsplit('/').next())
            .unwrap_or("unknown")
            .to_string(),
    }
}

fn get_description(property: &Value) -> String {
    property
        .get("description")
        .and_then(|desc| desc.as_str())
        .unwrap_or("No description provided")
        .replace('\n', " ")
}

fn get_default_value(property: &Value) -> String {
    property
        .get("default")
        .map(|def_val| match def_val {
            Value::String(s) => format!("\"{s}\""),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            _ => def_val.to_string(),
        })
        .unwrap_or("-".to_string())
}
