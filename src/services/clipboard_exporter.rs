use std::fmt;

use tracing::{debug, info, warn};

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Which strategy ended up holding the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Primary,
    Fallback,
}

/// Result of a single copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { via: CopyPath },
    Failed { reason: String },
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }
}

impl fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyOutcome::Copied { .. } => write!(f, "✅ Copied!"),
            CopyOutcome::Failed { reason } => write!(f, "❌ Failed to copy: {}", reason),
        }
    }
}

/// Copies text with a preferred strategy and falls back to a second one.
///
/// A primary write error is logged and never returned to the caller; only a
/// fallback failure produces [`CopyOutcome::Failed`].
pub struct ClipboardExporter<P: ClipboardWriter, F: ClipboardWriter> {
    primary: P,
    fallback: F,
}

impl<P: ClipboardWriter, F: ClipboardWriter> ClipboardExporter<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    pub fn copy(&mut self, text: &str) -> CopyOutcome {
        if self.primary.is_available() {
            match self.primary.write_text(text) {
                Ok(()) => {
                    debug!(writer = self.primary.name(), "copied to clipboard");
                    return CopyOutcome::Copied { via: CopyPath::Primary };
                }
                Err(e) => {
                    info!(writer = self.primary.name(), error = %e, "primary clipboard failed, falling back");
                }
            }
        } else {
            debug!(writer = self.primary.name(), "primary clipboard unavailable");
        }

        match self.fallback.write_text(text) {
            Ok(()) => {
                debug!(writer = self.fallback.name(), "copied to clipboard");
                CopyOutcome::Copied { via: CopyPath::Fallback }
            }
            Err(e) => {
                warn!(writer = self.fallback.name(), error = %e, "fallback clipboard failed");
                let reason = match e {
                    AppError::ClipboardError(message) => message,
                    other => other.to_string(),
                };
                CopyOutcome::Failed { reason }
            }
        }
    }
}
