use crate::domain::AppError;

/// Port for writing to the system clipboard.
///
/// Both the preferred and the fallback copy strategy implement this trait.
pub trait ClipboardWriter {
    /// Short name used in logs and copy outcomes.
    fn name(&self) -> &'static str;

    /// Capability check, evaluated once per copy attempt.
    fn is_available(&self) -> bool {
        true
    }

    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

impl<T: ClipboardWriter + ?Sized> ClipboardWriter for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        (**self).write_text(text)
    }
}

/// Clipboard that is never available. Used when the system clipboard is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClipboard;

impl ClipboardWriter for NoopClipboard {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn write_text(&mut self, _text: &str) -> Result<(), AppError> {
        Err(AppError::ClipboardError("clipboard writer is disabled".to_string()))
    }
}
