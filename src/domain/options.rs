use std::fmt;

use super::form_record::FormDefaults;

/// A fixed list of choices offered by the form for one enumerated field.
///
/// The prompt builder never checks membership; only input front-ends do.
#[derive(Debug, Clone, Copy)]
pub struct OptionSet {
    /// Field name as it appears in the form.
    pub field: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Allowed values; the first one is the default.
    pub choices: &'static [&'static str],
    /// Reads this field's value out of configured defaults.
    pub configured: fn(&FormDefaults) -> &str,
}

impl OptionSet {
    pub fn default_choice(&self) -> &'static str {
        self.choices[0]
    }

    /// Index of `value`, falling back to the default choice.
    pub fn position(&self, value: &str) -> usize {
        self.choices.iter().position(|choice| *choice == value).unwrap_or(0)
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub const SEARCH_INTENTS: OptionSet = OptionSet {
    field: "searchIntent",
    label: "Search Intent",
    choices: &["Informational", "Commercial Investigation", "Transactional", "Navigational"],
    configured: |defaults| defaults.search_intent.as_str(),
};

pub const FUNNEL_STAGES: OptionSet = OptionSet {
    field: "funnelStage",
    label: "Funnel Stage",
    choices: &[
        "Top of Funnel (Awareness)",
        "Middle of Funnel (Consideration)",
        "Bottom of Funnel (Decision)",
    ],
    configured: |defaults| defaults.funnel_stage.as_str(),
};

pub const TONE_STYLES: OptionSet = OptionSet {
    field: "toneStyle",
    label: "Tone & Style",
    choices: &[
        "Professional",
        "Conversational",
        "Authoritative",
        "Friendly",
        "Educational",
        "Persuasive",
    ],
    configured: |defaults| defaults.tone_style.as_str(),
};

pub const BUSINESS_GOALS: OptionSet = OptionSet {
    field: "businessGoal",
    label: "Business Goal",
    choices: &[
        "Generate Leads",
        "Drive Sales",
        "Build Brand Awareness",
        "Educate Audience",
        "Improve SEO Rankings",
    ],
    configured: |defaults| defaults.business_goal.as_str(),
};

/// Word count is free-form; this is only the form's starting value.
pub const DEFAULT_WORD_COUNT: &str = "1500";

/// All enumerated option sets in form order.
pub const ALL_OPTION_SETS: [OptionSet; 4] =
    [SEARCH_INTENTS, FUNNEL_STAGES, TONE_STYLES, BUSINESS_GOALS];
