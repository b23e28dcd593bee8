pub mod error;
pub mod form_record;
pub mod options;
pub mod prompt_builder;
pub mod prompt_document;
pub mod validation;

pub use error::AppError;
pub use form_record::{FormDefaults, FormRecord};
pub use options::{
    ALL_OPTION_SETS, BUSINESS_GOALS, DEFAULT_WORD_COUNT, FUNNEL_STAGES, OptionSet, SEARCH_INTENTS,
    TONE_STYLES,
};
pub use prompt_builder::{build_document, build_prompt};
pub use prompt_document::{PromptDocument, PromptLine, PromptSection};
pub use validation::{MIN_MAIN_KEYWORD_CHARS, ValidationError, validate_main_keyword, validate_record};
