use thiserror::Error;

use super::FormRecord;

/// Minimum main keyword length, counted in characters after trimming.
pub const MIN_MAIN_KEYWORD_CHARS: usize = 2;

/// Reasons a form record is rejected before prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a main keyword")]
    MissingMainKeyword,

    #[error("Main keyword should be at least 2 characters long")]
    MainKeywordTooShort { length: usize },
}

/// Validates a main keyword value.
///
/// Checks:
/// - Non-empty after trimming
/// - At least `MIN_MAIN_KEYWORD_CHARS` characters (not bytes)
pub fn validate_main_keyword(keyword: &str) -> Result<(), ValidationError> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingMainKeyword);
    }
    let length = trimmed.chars().count();
    if length < MIN_MAIN_KEYWORD_CHARS {
        return Err(ValidationError::MainKeywordTooShort { length });
    }
    Ok(())
}

/// Validation gate run before the prompt builder.
pub fn validate_record(record: &FormRecord) -> Result<(), ValidationError> {
    validate_main_keyword(&record.main_keyword)
}
