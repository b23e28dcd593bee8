//! Generate command: validation gate, prompt assembly, optional copy.

mod wizard;

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

pub use wizard::{WizardAnswers, run_form_wizard};

use crate::app::AppContext;
use crate::domain::{AppError, FormRecord, build_prompt, validate_record};
use crate::ports::ClipboardWriter;
use crate::services::CopyOutcome;

/// Result of a successful generate run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// The assembled prompt text.
    pub prompt: String,
    /// Copy result, when a copy was requested.
    pub copy: Option<CopyOutcome>,
}

/// Execute the generate command.
///
/// `copy` overrides the configured `auto_copy` setting when given.
pub fn execute<P, F>(
    ctx: &mut AppContext<P, F>,
    record: FormRecord,
    copy: Option<bool>,
) -> Result<GenerateOutcome, AppError>
where
    P: ClipboardWriter,
    F: ClipboardWriter,
{
    let record = record.normalized().with_defaults(&ctx.config().defaults);

    // the builder is never reached with an invalid record
    validate_record(&record)?;

    let prompt = assemble(&record)?;
    debug!(chars = prompt.chars().count(), "prompt generated");

    let should_copy = copy.unwrap_or(ctx.config().clipboard.auto_copy);
    let copy = should_copy.then(|| ctx.exporter_mut().copy(&prompt));

    Ok(GenerateOutcome { prompt, copy })
}

/// Run the builder, turning a panic into a retryable error.
fn assemble(record: &FormRecord) -> Result<String, AppError> {
    panic::catch_unwind(AssertUnwindSafe(|| build_prompt(record))).map_err(|_| {
        error!("prompt assembly panicked");
        AppError::PromptBuildFailed
    })
}
