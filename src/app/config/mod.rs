//! Configuration model and loader.

mod app_config;
mod load_config;

pub use app_config::{AppConfig, ClipboardSettings};
pub use load_config::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
