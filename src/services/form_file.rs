//! Form answers loaded from JSON, YAML or TOML files.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, FormRecord};

/// Serialization formats accepted for form input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFileFormat {
    Json,
    Yaml,
    Toml,
}

impl FormFileFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension =
            path.extension().and_then(|ext| ext.to_str()).unwrap_or_default().to_lowercase();
        match extension.as_str() {
            "json" => Ok(FormFileFormat::Json),
            "yaml" | "yml" => Ok(FormFileFormat::Yaml),
            "toml" => Ok(FormFileFormat::Toml),
            _ => Err(AppError::UnsupportedInputFormat(path.display().to_string())),
        }
    }
}

/// Parse form answers from a string in the given format.
pub fn parse_form(content: &str, format: FormFileFormat) -> Result<FormRecord, AppError> {
    let record: FormRecord = match format {
        FormFileFormat::Json => serde_json::from_str(content)
            .map_err(|e| AppError::parse_error("form input (JSON)", e))?,
        FormFileFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| AppError::parse_error("form input (YAML)", e))?,
        FormFileFormat::Toml => toml::from_str(content)?,
    };
    Ok(record.normalized())
}

/// Read and parse a form input file.
pub fn load_form(path: &Path) -> Result<FormRecord, AppError> {
    let format = FormFileFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_form(&content, format)
}
