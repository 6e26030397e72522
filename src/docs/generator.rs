use std::{fs, path::Path};

use schemars::schema_for;
use thiserror::Error;

use super::{generate_config_page, generate_task_page};
use crate::{
    config::Config,
    task::{TaskArgs, TaskReport},
};

/// Writes the task and configuration reference pages.
pub struct DocsGenerator {
    output_dir: String,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output_dir: "docs".to_string(),
        }
    }
}

impl DocsGenerator {
    /// Creates a new documentation generator with default output directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom output directory for generated documentation.
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Generates `task.md` and `config.md` in the output directory.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if a file cannot be written.
    pub fn generate_all(&self) -> Result<(), DocsError> {
        fs::create_dir_all(&self.output_dir).map_err(|err| {
            DocsError::FileWrite(format!("Failed to create output directory: {}", err))
        })?;

        self.write_page("task.md", &generate_task_page()?)?;
        self.write_page("config.md", &generate_config_page()?)?;
        Ok(())
    }

    /// JSON Schema of the task arguments, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::SchemaConversion` if serialization fails.
    pub fn task_schema(&self) -> Result<String, DocsError> {
        serde_json::to_string_pretty(&schema_for!(TaskArgs))
            .map_err(|e| DocsError::SchemaConversion(e.to_string()))
    }

    /// JSON Schema of the task result, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::SchemaConversion` if serialization fails.
    pub fn report_schema(&self) -> Result<String, DocsError> {
        serde_json::to_string_pretty(&schema_for!(TaskReport))
            .map_err(|e| DocsError::SchemaConversion(e.to_string()))
    }

    /// JSON Schema of the configuration file, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::SchemaConversion` if serialization fails.
    pub fn config_schema(&self) -> Result<String, DocsError> {
        serde_json::to_string_pretty(&schema_for!(Config))
            .map_err(|e| DocsError::SchemaConversion(e.to_string()))
    }

    fn write_page(&self, filename: &str, content: &str) -> Result<(), DocsError> {
        let filepath = Path::new(&self.output_dir).join(filename);
        fs::write(&filepath, content).map_err(|err| DocsError::FileWrite(err.to_string()))?;

        println!("Generated {}", filepath.display());
        Ok(())
    }
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// A documentation file could not be written.
    #[error("{0}")]
    FileWrite(String),

    /// A schema could not be converted to JSON.
    #[error("{0}")]
    SchemaConversion(String),
}
