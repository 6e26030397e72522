//! Formatting utilities for CLI output.
//!
//! Human-readable output uses ANSI colors; orchestrator output is plain JSON.

use crate::task::{TaskFailure, TaskReport};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage examples with styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats an nvram value for human-readable output.
///
/// # Examples
///
/// ```
/// use nvram_task::cli::formatting::format_value;
///
/// assert_eq!(format_value(Some("dhcp")), "\"dhcp\"");
/// assert_eq!(format_value(None), "(unset)");
/// ```
pub fn format_value(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("\"{v}\""),
        None => "(unset)".to_string(),
    }
}

/// Formats a task report as `name: value` lines.
pub fn format_report(report: &TaskReport) -> String {
    let mut lines = Vec::new();

    if let Some(key) = &report.key {
        lines.push(format!("key: {key}"));
    }
    if let Some(value) = &report.value {
        lines.push(format!("value: {}", format_value(value.as_deref())));
    }
    if let Some(old_value) = &report.old_value {
        lines.push(format!("old_value: {}", format_value(old_value.as_deref())));
    }
    if let Some(new_value) = &report.new_value {
        lines.push(format!("new_value: {}", format_value(new_value.as_deref())));
    }

    let changed = if report.changed {
        format!("{}true{}", Colors::YELLOW, Colors::RESET)
    } else {
        "false".to_string()
    };
    lines.push(format!("changed: {changed}"));
    lines.push(format!("committed: {}", report.committed));

    lines.join("\n")
}

/// Serializes a task report for the orchestrator.
pub fn format_report_json(report: &TaskReport) -> String {
    serde_json::to_string(report).unwrap_or_else(|e| failure_fallback(&e.to_string()))
}

/// Serializes a task failure for the orchestrator.
pub fn format_failure_json(failure: &TaskFailure) -> String {
    serde_json::to_string(failure).unwrap_or_else(|e| failure_fallback(&e.to_string()))
}

fn failure_fallback(details: &str) -> String {
    serde_json::json!({
        "failed": true,
        "msg": format!("failed to serialize result: {details}"),
        "kind": "io",
    })
    .to_string()
}
