use std::cell::OnceCell;

use arboard::Clipboard;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-based system clipboard.
///
/// Opening the connection is the capability check: on hosts without a
/// display server or clipboard service it fails and the writer reports
/// itself unavailable. The connection is opened on first use.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: OnceCell<Option<Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn connection(&self) -> &Option<Clipboard> {
        self.clipboard.get_or_init(|| match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                debug!(error = %e, "system clipboard unavailable");
                None
            }
        })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn is_available(&self) -> bool {
        self.connection().is_some()
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.connection();
        let clipboard = self
            .clipboard
            .get_mut()
            .and_then(Option::as_mut)
            .ok_or_else(|| AppError::ClipboardError("system clipboard unavailable".to_string()))?;
        clipboard.set_text(text).map_err(|e| AppError::ClipboardError(format!("{}", e)))
    }
}
