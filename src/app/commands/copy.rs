use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::ClipboardWriter;
use crate::services::CopyOutcome;

/// Execute the copy command.
///
/// Unlike `generate`, a failed copy is an error here: copying is the whole job.
pub fn execute<P, F>(ctx: &mut AppContext<P, F>, text: &str) -> Result<CopyOutcome, AppError>
where
    P: ClipboardWriter,
    F: ClipboardWriter,
{
    match ctx.exporter_mut().copy(text) {
        CopyOutcome::Failed { reason } => Err(AppError::ClipboardError(reason)),
        outcome => Ok(outcome),
    }
}
