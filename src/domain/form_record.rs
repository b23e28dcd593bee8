//! Form answers describing one blog post brief.

use serde::{Deserialize, Deserializer, Serialize};

use super::options::{BUSINESS_GOALS, DEFAULT_WORD_COUNT, FUNNEL_STAGES, SEARCH_INTENTS, TONE_STYLES};

/// Normalized answers collected from the brief form.
///
/// Text fields are already trimmed once the record has passed through
/// [`FormRecord::normalized`]; an empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormRecord {
    pub main_keyword: String,
    pub related_keywords: String,
    pub blog_title: String,
    pub target_audience: String,
    pub post_goals: String,
    pub search_intent: String,
    pub funnel_stage: String,
    #[serde(deserialize_with = "text_or_number")]
    pub word_count: String,
    pub tone_style: String,
    pub business_goal: String,
    pub call_to_action: String,
    pub custom_instructions: String,

    pub featured_snippet: bool,
    pub schema_markup: bool,
    pub people_also_ask: bool,
    pub internal_links: bool,
    pub external_links: bool,
    pub faq_section: bool,
}

impl FormRecord {
    /// Return a copy with every text field trimmed.
    pub fn normalized(mut self) -> Self {
        for field in self.text_fields_mut() {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
        self
    }

    /// Fill enumerated fields and word count that are still empty.
    pub fn with_defaults(mut self, defaults: &FormDefaults) -> Self {
        fill(&mut self.search_intent, &defaults.search_intent);
        fill(&mut self.funnel_stage, &defaults.funnel_stage);
        fill(&mut self.word_count, &defaults.word_count);
        fill(&mut self.tone_style, &defaults.tone_style);
        fill(&mut self.business_goal, &defaults.business_goal);
        self
    }

    fn text_fields_mut(&mut self) -> [&mut String; 12] {
        [
            &mut self.main_keyword,
            &mut self.related_keywords,
            &mut self.blog_title,
            &mut self.target_audience,
            &mut self.post_goals,
            &mut self.search_intent,
            &mut self.funnel_stage,
            &mut self.word_count,
            &mut self.tone_style,
            &mut self.business_goal,
            &mut self.call_to_action,
            &mut self.custom_instructions,
        ]
    }
}

/// Accept `"2000"` as well as a bare `2000` for free-form numeric fields.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Integer(value) => value.to_string(),
        TextOrNumber::Float(value) => value.to_string(),
    })
}

fn fill(field: &mut String, default: &str) {
    if field.trim().is_empty() {
        *field = default.to_string();
    }
}

/// Values used for enumerated fields when the form leaves them unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormDefaults {
    pub search_intent: String,
    pub funnel_stage: String,
    pub word_count: String,
    pub tone_style: String,
    pub business_goal: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            search_intent: SEARCH_INTENTS.default_choice().to_string(),
            funnel_stage: FUNNEL_STAGES.default_choice().to_string(),
            word_count: DEFAULT_WORD_COUNT.to_string(),
            tone_style: TONE_STYLES.default_choice().to_string(),
            business_goal: BUSINESS_GOALS.default_choice().to_string(),
        }
    }
}
