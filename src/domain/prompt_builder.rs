//! Assembly of the SEO content brief prompt.
//!
//! The builder is a pure function of the [`FormRecord`]. It assumes the
//! record already passed the validation gate and never checks enumerated
//! values against their option sets.

use super::form_record::FormRecord;
use super::prompt_document::{PromptDocument, PromptSection};

pub const AUDIENCE_HEADER: &str = "👥 TARGET AUDIENCE & INTENT";
pub const OBJECTIVES_HEADER: &str = "🎯 BUSINESS OBJECTIVES";
pub const SEO_HEADER: &str = "🧰 SEO & STRUCTURAL REQUIREMENTS";
pub const STRUCTURE_HEADER: &str = "📐 CONTENT STRUCTURE";
pub const ENGAGEMENT_HEADER: &str = "✨ ENGAGEMENT & UX ELEMENTS";
pub const TECHNICAL_HEADER: &str = "⚙️ TECHNICAL SPECIFICATIONS";
pub const ADDITIONAL_HEADER: &str = "📝 ADDITIONAL REQUIREMENTS";
pub const GOALS_HEADER: &str = "🚀 CONTENT GOALS";

pub const SCHEMA_MARKUP_BULLET: &str = "Include schema markup suggestions (Article/FAQ/HowTo)";
pub const FEATURED_SNIPPET_BULLET: &str = "Optimize for featured snippet opportunity";
pub const PEOPLE_ALSO_ASK_BULLET: &str =
    "Answer 3-5 \"People Also Ask\" questions as dedicated sections";
pub const INTERNAL_LINKS_BULLET: &str = "Include 2-3 strategic internal link opportunities";
pub const EXTERNAL_LINKS_BULLET: &str = "Add 1-2 external links to authoritative sources";
pub const FAQ_SECTION_BULLET: &str = "Brief FAQ section (3-5 common questions)";

pub const GENERATE_TITLES_BULLET: &str =
    "Create 3-5 SEO-optimized title options (55-60 characters each) with primary keyword";
const CHOOSE_TITLE_BULLET: &str = "Choose the most compelling title for the post";
const TITLE_SEO_BULLET: &str = "Ensure title is SEO-optimized and contains primary keyword";

const SEO_BULLETS: [&str; 4] = [
    "Meta description (150-160 characters) with compelling CTA",
    "Primary keyword naturally placed in first 100 words",
    "Keyword density: 1-2% (avoid keyword stuffing)",
    "Use semantic/LSI keywords throughout",
];

const STRUCTURE_OPENING_BULLETS: [&str; 3] = [
    "Hook-driven introduction addressing reader's pain point",
    "H1: Main title with primary keyword",
    "H2/H3 subheadings incorporating related keywords",
];

const CREDIBILITY_BULLET: &str =
    "Include relevant data, statistics, or case studies for credibility";

const ENGAGEMENT_BULLETS: [&str; 5] = [
    "Use bullet points and numbered lists for scannability",
    "Keep paragraphs short (2-3 sentences maximum)",
    "Include actionable takeaways and practical tips",
    "Add relevant examples or case studies",
    "Ensure mobile-friendly formatting",
];

const TECHNICAL_CLOSING_BULLETS: [&str; 2] =
    ["Conclusion with summary and next steps", "Clear value proposition throughout"];

const GOAL_BULLETS: [&str; 4] = [
    "Establish topical authority in the subject area",
    "Provide comprehensive, actionable coverage",
    "Drive organic traffic and user engagement",
    "Support conversion objectives",
];

const CLOSING: &str = "Please create content that balances SEO optimization with genuine value \
for readers, ensuring it ranks well while serving the target audience's needs effectively.";

/// Build the prompt string for a validated record.
pub fn build_prompt(record: &FormRecord) -> String {
    build_document(record).to_string()
}

/// Build the structured prompt document for a validated record.
pub fn build_document(record: &FormRecord) -> PromptDocument {
    let mut sections = vec![
        audience_section(record),
        objectives_section(record),
        seo_section(record),
        structure_section(record),
        engagement_section(),
        technical_section(record),
    ];
    if let Some(custom) = present(&record.custom_instructions) {
        let mut section = PromptSection::new(ADDITIONAL_HEADER);
        section.text(custom);
        sections.push(section);
    }
    sections.push(goals_section());

    PromptDocument {
        title: format!("🧠 SEO CONTENT BRIEF: {}", record.main_keyword.to_uppercase()),
        intro: intro(record),
        sections,
        closing: CLOSING,
    }
}

/// Treat whitespace-only text as absent.
fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn intro(record: &FormRecord) -> String {
    let mut intro = format!(
        "You are an expert SEO strategist and content writer. Create a comprehensive, \
         Google-optimized blog post targeting the primary keyword \"{}\"",
        record.main_keyword
    );
    if let Some(related) = present(&record.related_keywords) {
        intro.push_str(&format!(" and supporting keyword cluster: {}", related));
    }
    intro.push('.');
    intro
}

fn audience_section(record: &FormRecord) -> PromptSection {
    let audience = match present(&record.target_audience) {
        Some(audience) => audience.to_string(),
        None => format!("General audience interested in {}", record.main_keyword),
    };

    let mut section = PromptSection::new(AUDIENCE_HEADER);
    section
        .bullet(format!("Target Audience: {}", audience))
        .bullet(format!("Search Intent: {}", record.search_intent))
        .bullet(format!("Funnel Stage: {}", record.funnel_stage));
    section
}

fn objectives_section(record: &FormRecord) -> PromptSection {
    let mut section = PromptSection::new(OBJECTIVES_HEADER);
    if let Some(goals) = present(&record.post_goals) {
        section.bullet(format!("Post Goals & Content Type: {}", goals));
    }
    section.bullet(format!("Primary Goal: {}", record.business_goal));
    if let Some(cta) = present(&record.call_to_action) {
        section.bullet(format!("Call-to-Action: {}", cta));
    }
    section
}

fn seo_section(record: &FormRecord) -> PromptSection {
    let mut section = PromptSection::new(SEO_HEADER);

    // An empty title always means "suggest titles"; there is no opt-out.
    match present(&record.blog_title) {
        Some(title) => {
            section.bullet(format!("Use this specific title: \"{}\"", title)).bullet(TITLE_SEO_BULLET);
        }
        None => {
            section.bullet(GENERATE_TITLES_BULLET).bullet(CHOOSE_TITLE_BULLET);
        }
    }

    for bullet in SEO_BULLETS {
        section.bullet(bullet);
    }
    section
        .bullet_if(record.schema_markup, SCHEMA_MARKUP_BULLET)
        .bullet_if(record.featured_snippet, FEATURED_SNIPPET_BULLET);
    section
}

fn structure_section(record: &FormRecord) -> PromptSection {
    let mut section = PromptSection::new(STRUCTURE_HEADER);
    for bullet in STRUCTURE_OPENING_BULLETS {
        section.bullet(bullet);
    }
    section
        .bullet_if(record.people_also_ask, PEOPLE_ALSO_ASK_BULLET)
        .bullet_if(record.internal_links, INTERNAL_LINKS_BULLET)
        .bullet_if(record.external_links, EXTERNAL_LINKS_BULLET)
        .bullet(CREDIBILITY_BULLET)
        .bullet_if(record.faq_section, FAQ_SECTION_BULLET);
    section
}

fn engagement_section() -> PromptSection {
    let mut section = PromptSection::new(ENGAGEMENT_HEADER);
    for bullet in ENGAGEMENT_BULLETS {
        section.bullet(bullet);
    }
    section
}

fn technical_section(record: &FormRecord) -> PromptSection {
    let mut section = PromptSection::new(TECHNICAL_HEADER);
    section
        .bullet(format!("Word Count: {} words", record.word_count))
        .bullet(format!("Tone: {}", record.tone_style));
    for bullet in TECHNICAL_CLOSING_BULLETS {
        section.bullet(bullet);
    }
    section
}

fn goals_section() -> PromptSection {
    let mut section = PromptSection::new(GOALS_HEADER);
    for bullet in GOAL_BULLETS {
        section.bullet(bullet);
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CONDITIONAL_BULLETS: [&str; 6] = [
        SCHEMA_MARKUP_BULLET,
        FEATURED_SNIPPET_BULLET,
        PEOPLE_ALSO_ASK_BULLET,
        INTERNAL_LINKS_BULLET,
        EXTERNAL_LINKS_BULLET,
        FAQ_SECTION_BULLET,
    ];

    fn base_record() -> FormRecord {
        FormRecord {
            main_keyword: "content marketing".into(),
            search_intent: "Informational".into(),
            funnel_stage: "Top of Funnel (Awareness)".into(),
            word_count: "1500".into(),
            tone_style: "Professional".into(),
            business_goal: "Generate Leads".into(),
            ..FormRecord::default()
        }
    }

    fn bullet(text: &str) -> String {
        format!("• {}\n", text)
    }

    #[test]
    fn renders_full_brief_for_minimal_record() {
        let expected = "🧠 SEO CONTENT BRIEF: CONTENT MARKETING

You are an expert SEO strategist and content writer. Create a comprehensive, Google-optimized blog post targeting the primary keyword \"content marketing\".

👥 TARGET AUDIENCE & INTENT:
• Target Audience: General audience interested in content marketing
• Search Intent: Informational
• Funnel Stage: Top of Funnel (Awareness)

🎯 BUSINESS OBJECTIVES:
• Primary Goal: Generate Leads

🧰 SEO & STRUCTURAL REQUIREMENTS:
• Create 3-5 SEO-optimized title options (55-60 characters each) with primary keyword
• Choose the most compelling title for the post
• Meta description (150-160 characters) with compelling CTA
• Primary keyword naturally placed in first 100 words
• Keyword density: 1-2% (avoid keyword stuffing)
• Use semantic/LSI keywords throughout

📐 CONTENT STRUCTURE:
• Hook-driven introduction addressing reader's pain point
• H1: Main title with primary keyword
• H2/H3 subheadings incorporating related keywords
• Include relevant data, statistics, or case studies for credibility

✨ ENGAGEMENT & UX ELEMENTS:
• Use bullet points and numbered lists for scannability
• Keep paragraphs short (2-3 sentences maximum)
• Include actionable takeaways and practical tips
• Add relevant examples or case studies
• Ensure mobile-friendly formatting

⚙️ TECHNICAL SPECIFICATIONS:
• Word Count: 1500 words
• Tone: Professional
• Conclusion with summary and next steps
• Clear value proposition throughout

🚀 CONTENT GOALS:
• Establish topical authority in the subject area
• Provide comprehensive, actionable coverage
• Drive organic traffic and user engagement
• Support conversion objectives

Please create content that balances SEO optimization with genuine value for readers, ensuring it ranks well while serving the target audience's needs effectively.";

        assert_eq!(build_prompt(&base_record()), expected);
    }

    #[test]
    fn scenario_without_title_or_flags_uses_title_generation() {
        let prompt = build_prompt(&base_record());

        assert!(prompt.contains(GENERATE_TITLES_BULLET));
        assert!(!prompt.contains("Use this specific title"));
        for conditional in CONDITIONAL_BULLETS {
            assert!(!prompt.contains(conditional), "unexpected bullet: {}", conditional);
        }
    }

    #[test]
    fn scenario_with_title_uses_it_verbatim() {
        let record =
            FormRecord { blog_title: "10 Content Marketing Tips".into(), ..base_record() };
        let prompt = build_prompt(&record);

        assert!(prompt.contains("Use this specific title: \"10 Content Marketing Tips\""));
        assert!(prompt.contains(TITLE_SEO_BULLET));
        assert!(!prompt.contains(GENERATE_TITLES_BULLET));
        assert!(!prompt.contains(CHOOSE_TITLE_BULLET));
    }

    #[test]
    fn scenario_all_flags_emits_six_bullets_in_order() {
        let record = FormRecord {
            featured_snippet: true,
            schema_markup: true,
            people_also_ask: true,
            internal_links: true,
            external_links: true,
            faq_section: true,
            ..base_record()
        };
        let prompt = build_prompt(&record);

        let positions: Vec<usize> = CONDITIONAL_BULLETS
            .iter()
            .map(|text| {
                assert_eq!(prompt.matches(text).count(), 1, "bullet not emitted once: {}", text);
                prompt.find(text).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "order: {:?}", positions);
    }

    #[test]
    fn each_flag_controls_exactly_one_line() {
        let baseline = build_prompt(&base_record());
        let setters: [(fn(&mut FormRecord), &str); 6] = [
            (|r| r.schema_markup = true, SCHEMA_MARKUP_BULLET),
            (|r| r.featured_snippet = true, FEATURED_SNIPPET_BULLET),
            (|r| r.people_also_ask = true, PEOPLE_ALSO_ASK_BULLET),
            (|r| r.internal_links = true, INTERNAL_LINKS_BULLET),
            (|r| r.external_links = true, EXTERNAL_LINKS_BULLET),
            (|r| r.faq_section = true, FAQ_SECTION_BULLET),
        ];

        for (set, text) in setters {
            let mut record = base_record();
            set(&mut record);
            let toggled = build_prompt(&record);

            assert_eq!(toggled.replacen(&bullet(text), "", 1), baseline, "flag for {}", text);
        }
    }

    #[test]
    fn target_audience_falls_back_to_default() {
        let prompt = build_prompt(&base_record());
        assert!(prompt.contains("• Target Audience: General audience interested in content marketing\n"));

        let record = FormRecord { target_audience: "B2B marketers".into(), ..base_record() };
        let prompt = build_prompt(&record);
        assert!(prompt.contains("• Target Audience: B2B marketers\n"));
        assert!(!prompt.contains("General audience"));
    }

    #[test]
    fn optional_lines_appear_only_when_present() {
        let record = FormRecord {
            related_keywords: "seo writing, blogging".into(),
            post_goals: "How-to guide".into(),
            call_to_action: "Subscribe to the newsletter".into(),
            ..base_record()
        };
        let prompt = build_prompt(&record);

        assert!(prompt.contains(
            "primary keyword \"content marketing\" and supporting keyword cluster: seo writing, blogging."
        ));
        assert!(prompt.contains("• Post Goals & Content Type: How-to guide\n"));
        assert!(prompt.contains("• Call-to-Action: Subscribe to the newsletter\n"));

        let prompt = build_prompt(&base_record());
        assert!(!prompt.contains("supporting keyword cluster"));
        assert!(!prompt.contains("Post Goals"));
        assert!(!prompt.contains("Call-to-Action"));
    }

    #[test]
    fn whitespace_only_fields_are_absent() {
        let record = FormRecord {
            blog_title: "   ".into(),
            call_to_action: "\t".into(),
            custom_instructions: " \n ".into(),
            ..base_record()
        };
        assert_eq!(build_prompt(&record), build_prompt(&base_record()));
    }

    #[test]
    fn custom_instructions_get_their_own_block() {
        let record = FormRecord {
            custom_instructions: "Mention our 2024 survey.\nAvoid jargon.".into(),
            ..base_record()
        };
        let document = build_document(&record);
        let headers: Vec<&str> = document.sections.iter().map(|s| s.header).collect();
        assert_eq!(
            headers,
            [
                AUDIENCE_HEADER,
                OBJECTIVES_HEADER,
                SEO_HEADER,
                STRUCTURE_HEADER,
                ENGAGEMENT_HEADER,
                TECHNICAL_HEADER,
                ADDITIONAL_HEADER,
                GOALS_HEADER,
            ]
        );

        let prompt = document.to_string();
        assert!(prompt.contains(
            "• Clear value proposition throughout\n\n📝 ADDITIONAL REQUIREMENTS:\nMention our 2024 survey.\nAvoid jargon.\n\n🚀 CONTENT GOALS:\n"
        ));
    }

    #[test]
    fn enumerated_values_pass_through_unchecked() {
        let record = FormRecord {
            search_intent: "Whatever".into(),
            tone_style: "Pirate".into(),
            word_count: "about 900".into(),
            ..base_record()
        };
        let prompt = build_prompt(&record);

        assert!(prompt.contains("• Search Intent: Whatever\n"));
        assert!(prompt.contains("• Tone: Pirate\n"));
        assert!(prompt.contains("• Word Count: about 900 words\n"));
    }

    proptest! {
        #[test]
        fn build_is_deterministic(
            keyword in "[a-zA-Z0-9 ]{2,40}",
            title in "[a-zA-Z0-9 ]{0,40}",
            flags in proptest::array::uniform6(any::<bool>()),
        ) {
            let record = FormRecord {
                main_keyword: keyword,
                blog_title: title,
                featured_snippet: flags[0],
                schema_markup: flags[1],
                people_also_ask: flags[2],
                internal_links: flags[3],
                external_links: flags[4],
                faq_section: flags[5],
                ..base_record()
            };
            prop_assert_eq!(build_prompt(&record), build_prompt(&record.clone()));
        }

        #[test]
        fn title_line_holds_uppercased_keyword(keyword in "\\PC{2,30}") {
            let record = FormRecord { main_keyword: keyword.clone(), ..base_record() };
            let prompt = build_prompt(&record);
            let first_line = prompt.lines().next().unwrap_or_default();
            prop_assert!(first_line.contains(&keyword.to_uppercase()));
        }
    }
}
