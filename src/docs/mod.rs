//! Documentation generation for the task contract and configuration.
//!
//! Markdown tables and JSON Schemas are produced from the Rust types
//! themselves, so the published reference cannot drift from the code.

mod generator;
mod markdown;
mod schema;

#[cfg(test)]
mod tests;

pub use generator::{DocsError, DocsGenerator};
pub use markdown::{generate_config_page, generate_property_table, generate_task_page};
pub use schema::{PropertyInfo, extract_property_info};
