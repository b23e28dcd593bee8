//! seo-brief: assemble SEO blog-post briefs into writing prompts.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{
    AppContext,
    commands::{copy, generate, options},
    config::AppConfig,
};

pub use app::commands::generate::GenerateOutcome;
pub use app::config::{ClipboardSettings, load_config};
pub use domain::{
    AppError, FormDefaults, FormRecord, PromptDocument, ValidationError, build_document,
    build_prompt, validate_record as validate,
};
pub use services::{CopyOutcome, CopyPath};

/// Validate a form record, build its prompt, and copy it when requested.
///
/// `copy` overrides the configured `auto_copy` setting. A failed copy is
/// reported in the outcome and does not fail the call.
pub fn generate(
    config: AppConfig,
    record: FormRecord,
    copy: Option<bool>,
) -> Result<GenerateOutcome, AppError> {
    let mut ctx = AppContext::from_config(config);
    generate::execute(&mut ctx, record, copy)
}

/// Copy text to the clipboard using the configured strategies.
///
/// Returns an error when neither the system clipboard nor the fallback
/// command accepted the text.
pub fn copy_text(config: AppConfig, text: &str) -> Result<CopyOutcome, AppError> {
    let mut ctx = AppContext::from_config(config);
    copy::execute(&mut ctx, text)
}

/// Human-readable listing of the enumerated form choices.
pub fn list_options(config: &AppConfig) -> String {
    options::execute(&config.defaults)
}
