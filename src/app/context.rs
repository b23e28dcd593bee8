use crate::app::config::AppConfig;
use crate::ports::{ClipboardWriter, NoopClipboard};
use crate::services::{ArboardClipboard, ClipboardExporter, CommandClipboard};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: ClipboardWriter, F: ClipboardWriter> {
    config: AppConfig,
    exporter: ClipboardExporter<P, F>,
}

impl<P: ClipboardWriter, F: ClipboardWriter> AppContext<P, F> {
    /// Create a new application context.
    pub fn new(config: AppConfig, exporter: ClipboardExporter<P, F>) -> Self {
        Self { config, exporter }
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the clipboard exporter.
    pub fn exporter(&self) -> &ClipboardExporter<P, F> {
        &self.exporter
    }

    /// Get the clipboard exporter for a copy attempt.
    pub fn exporter_mut(&mut self) -> &mut ClipboardExporter<P, F> {
        &mut self.exporter
    }
}

/// Boxed clipboard strategy chosen at runtime.
pub type DynClipboard = Box<dyn ClipboardWriter>;

impl AppContext<DynClipboard, DynClipboard> {
    /// Wire the real clipboard strategies described by `config`.
    pub fn from_config(config: AppConfig) -> Self {
        let (primary, fallback) = clipboard_strategies(&config);
        Self::new(config, ClipboardExporter::new(primary, fallback))
    }
}

fn clipboard_strategies(config: &AppConfig) -> (DynClipboard, DynClipboard) {
    let command = match &config.clipboard.fallback_command {
        Some(argv) => CommandClipboard::with_command(argv.clone()),
        None => CommandClipboard::platform_default(),
    };

    if !config.clipboard.use_system {
        return (Box::new(NoopClipboard), Box::new(command));
    }
    if commands_outlive_process() {
        (Box::new(command), Box::new(ArboardClipboard::new()))
    } else {
        (Box::new(ArboardClipboard::new()), Box::new(command))
    }
}

/// X11 and Wayland selections die with the owning process; the command
/// utilities fork a holder that keeps serving them after we exit.
fn commands_outlive_process() -> bool {
    cfg!(all(unix, not(target_os = "macos")))
}
