use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;
use clap::builder::PossibleValuesParser;

use crate::app::config::AppConfig;
use crate::app::commands::generate::run_form_wizard;
use crate::domain::{
    AppError, BUSINESS_GOALS, FUNNEL_STAGES, FormRecord, SEARCH_INTENTS, TONE_STYLES,
};
use crate::services::load_form;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Read form answers from a JSON, YAML or TOML file
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Fill in the form interactively
    #[arg(short = 'I', long, conflicts_with = "input")]
    interactive: bool,
    /// Main keyword (at least 2 characters)
    #[arg(short = 'k', long = "keyword")]
    main_keyword: Option<String>,
    /// Related keywords
    #[arg(short = 'r', long = "related")]
    related_keywords: Option<String>,
    /// Exact blog title to use
    #[arg(short = 't', long = "title")]
    blog_title: Option<String>,
    /// Target audience
    #[arg(short = 'a', long = "audience")]
    target_audience: Option<String>,
    /// Post goals and content type
    #[arg(long = "goals")]
    post_goals: Option<String>,
    /// Search intent
    #[arg(long, value_parser = PossibleValuesParser::new(SEARCH_INTENTS.choices.iter().copied()))]
    search_intent: Option<String>,
    /// Funnel stage
    #[arg(long, value_parser = PossibleValuesParser::new(FUNNEL_STAGES.choices.iter().copied()))]
    funnel_stage: Option<String>,
    /// Target word count
    #[arg(short = 'w', long)]
    word_count: Option<String>,
    /// Tone and style
    #[arg(long = "tone", value_parser = PossibleValuesParser::new(TONE_STYLES.choices.iter().copied()))]
    tone_style: Option<String>,
    /// Primary business goal
    #[arg(long, value_parser = PossibleValuesParser::new(BUSINESS_GOALS.choices.iter().copied()))]
    business_goal: Option<String>,
    /// Call-to-action
    #[arg(long = "cta")]
    call_to_action: Option<String>,
    /// Additional free-form instructions
    #[arg(long = "instructions")]
    custom_instructions: Option<String>,
    /// Optimize for featured snippet
    #[arg(long)]
    featured_snippet: bool,
    /// Include schema markup suggestions
    #[arg(long)]
    schema_markup: bool,
    /// Answer "People Also Ask" questions
    #[arg(long)]
    people_also_ask: bool,
    /// Suggest internal links
    #[arg(long)]
    internal_links: bool,
    /// Add external authority links
    #[arg(long)]
    external_links: bool,
    /// Add an FAQ section
    #[arg(long = "faq")]
    faq_section: bool,
    /// Copy the prompt to the clipboard
    #[arg(short = 'c', long, conflicts_with = "no_copy")]
    copy: bool,
    /// Do not copy, even if auto_copy is configured
    #[arg(long)]
    no_copy: bool,
    /// Write the prompt to a file instead of stdout, without a trailing newline
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    fn copy_override(&self) -> Option<bool> {
        match (self.copy, self.no_copy) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn wants_wizard(&self) -> bool {
        self.interactive
            || (self.input.is_none()
                && self.main_keyword.is_none()
                && std::io::stdin().is_terminal())
    }

    /// Layer flag values over a record loaded from elsewhere.
    fn apply(self, mut record: FormRecord) -> FormRecord {
        let text_overrides = [
            (self.main_keyword, &mut record.main_keyword),
            (self.related_keywords, &mut record.related_keywords),
            (self.blog_title, &mut record.blog_title),
            (self.target_audience, &mut record.target_audience),
            (self.post_goals, &mut record.post_goals),
            (self.search_intent, &mut record.search_intent),
            (self.funnel_stage, &mut record.funnel_stage),
            (self.word_count, &mut record.word_count),
            (self.tone_style, &mut record.tone_style),
            (self.business_goal, &mut record.business_goal),
            (self.call_to_action, &mut record.call_to_action),
            (self.custom_instructions, &mut record.custom_instructions),
        ];
        for (value, field) in text_overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        record.featured_snippet |= self.featured_snippet;
        record.schema_markup |= self.schema_markup;
        record.people_also_ask |= self.people_also_ask;
        record.internal_links |= self.internal_links;
        record.external_links |= self.external_links;
        record.faq_section |= self.faq_section;
        record
    }
}

pub fn run_generate(config: AppConfig, args: GenerateArgs) -> Result<(), AppError> {
    let mut copy = args.copy_override();
    let output = args.output.clone();

    let record = if args.wants_wizard() {
        let answers = run_form_wizard(&config.defaults, config.clipboard.auto_copy)?;
        copy = copy.or(Some(answers.copy));
        args.apply(answers.record)
    } else {
        let base = match &args.input {
            Some(path) => load_form(path)?,
            None => FormRecord::default(),
        };
        args.apply(base)
    };

    let outcome = crate::generate(config, record, copy)?;

    match output {
        Some(path) => {
            fs::write(&path, &outcome.prompt)?;
            eprintln!("✅ Prompt written to {}", path.display());
        }
        None => println!("{}", outcome.prompt),
    }

    if let Some(copy) = outcome.copy {
        eprintln!("{}", copy);
    }
    Ok(())
}
