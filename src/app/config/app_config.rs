//! Configuration model loaded from `seo-brief.toml`.

use serde::Deserialize;

use crate::domain::FormDefaults;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Values for enumerated fields the form leaves unset.
    #[serde(default)]
    pub defaults: FormDefaults,
    /// Clipboard export settings.
    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

/// Clipboard export settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardSettings {
    /// Copy every generated prompt without asking.
    #[serde(default)]
    pub auto_copy: bool,
    /// Use the native system clipboard as well as the clipboard command.
    ///
    /// It is tried first, except on X11 and Wayland where the command goes
    /// first because its selection outlives the process.
    #[serde(default = "default_true")]
    pub use_system: bool,
    /// Clipboard command (program and arguments) fed through stdin.
    #[serde(default)]
    pub fallback_command: Option<Vec<String>>,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self { auto_copy: false, use_system: default_true(), fallback_command: None }
    }
}

fn default_true() -> bool {
    true
}
