//! Configuration loading from the working directory or an explicit path.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::AppConfig;
use crate::domain::AppError;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "seo-brief.toml";

/// Load configuration.
///
/// An explicit path must exist. Without one, `seo-brief.toml` in the working
/// directory is used if present, otherwise built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = std::env::current_dir()?.join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        AppError::config_error(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_config_content(&content)
}

pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    Ok(toml::from_str(content)?)
}
