use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::domain::{
    AppError, BUSINESS_GOALS, FUNNEL_STAGES, FormDefaults, FormRecord, OptionSet, SEARCH_INTENTS,
    TONE_STYLES, validate_main_keyword,
};

/// Answers collected by the interactive form.
#[derive(Debug, Clone)]
pub struct WizardAnswers {
    pub record: FormRecord,
    pub copy: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flag {
    FeaturedSnippet,
    SchemaMarkup,
    PeopleAlsoAsk,
    InternalLinks,
    ExternalLinks,
    FaqSection,
}

impl Flag {
    const ALL: [Flag; 6] = [
        Flag::FeaturedSnippet,
        Flag::SchemaMarkup,
        Flag::PeopleAlsoAsk,
        Flag::InternalLinks,
        Flag::ExternalLinks,
        Flag::FaqSection,
    ];

    fn label(self) -> &'static str {
        match self {
            Flag::FeaturedSnippet => "Optimize for featured snippet",
            Flag::SchemaMarkup => "Include schema markup suggestions",
            Flag::PeopleAlsoAsk => "Answer \"People Also Ask\" questions",
            Flag::InternalLinks => "Suggest internal links",
            Flag::ExternalLinks => "Add external authority links",
            Flag::FaqSection => "Add FAQ section",
        }
    }

    fn set(self, record: &mut FormRecord) {
        match self {
            Flag::FeaturedSnippet => record.featured_snippet = true,
            Flag::SchemaMarkup => record.schema_markup = true,
            Flag::PeopleAlsoAsk => record.people_also_ask = true,
            Flag::InternalLinks => record.internal_links = true,
            Flag::ExternalLinks => record.external_links = true,
            Flag::FaqSection => record.faq_section = true,
        }
    }
}

/// Walk the user through every form field on the terminal.
pub fn run_form_wizard(
    defaults: &FormDefaults,
    copy_default: bool,
) -> Result<WizardAnswers, AppError> {
    let main_keyword = Input::<String>::new()
        .with_prompt("Main keyword")
        .validate_with(|input: &String| -> Result<(), String> {
            validate_main_keyword(input).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(wizard_error)?;

    let mut record = FormRecord {
        main_keyword,
        related_keywords: optional_text("Related keywords (comma separated)")?,
        blog_title: optional_text("Blog title (leave empty to get suggestions)")?,
        target_audience: optional_text("Target audience")?,
        post_goals: optional_text("Post goals & content type")?,
        search_intent: choose(&SEARCH_INTENTS, defaults)?,
        funnel_stage: choose(&FUNNEL_STAGES, defaults)?,
        word_count: Input::<String>::new()
            .with_prompt("Word count")
            .default(defaults.word_count.clone())
            .interact_text()
            .map_err(wizard_error)?,
        tone_style: choose(&TONE_STYLES, defaults)?,
        business_goal: choose(&BUSINESS_GOALS, defaults)?,
        call_to_action: optional_text("Call-to-action")?,
        custom_instructions: optional_text("Additional instructions")?,
        ..FormRecord::default()
    };

    let labels: Vec<&str> = Flag::ALL.iter().map(|flag| flag.label()).collect();
    let selected = MultiSelect::new()
        .with_prompt("SEO options (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(wizard_error)?;
    for index in selected {
        Flag::ALL[index].set(&mut record);
    }

    let copy = Confirm::new()
        .with_prompt("Copy the prompt to the clipboard?")
        .default(copy_default)
        .interact()
        .map_err(wizard_error)?;

    Ok(WizardAnswers { record: record.normalized(), copy })
}

fn optional_text(prompt: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(wizard_error)
}

fn choose(options: &OptionSet, defaults: &FormDefaults) -> Result<String, AppError> {
    let selection = Select::new()
        .with_prompt(options.label)
        .items(options.choices)
        .default(options.position((options.configured)(defaults)))
        .interact()
        .map_err(wizard_error)?;
    Ok(options.choices[selection].to_string())
}

fn wizard_error(e: dialoguer::Error) -> AppError {
    AppError::config_error(format!("Form input failed: {e}"))
}
