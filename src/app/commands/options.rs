use std::fmt::Write;

use crate::domain::{ALL_OPTION_SETS, FormDefaults};

/// Render the option sets, marking the configured default of each.
pub fn execute(defaults: &FormDefaults) -> String {
    let mut out = String::new();
    for set in ALL_OPTION_SETS {
        let current = (set.configured)(defaults);
        let _ = writeln!(out, "{} ({}):", set.label, set.field);
        for choice in set.choices {
            let marker = if *choice == current { " (default)" } else { "" };
            let _ = writeln!(out, "  - {}{}", choice, marker);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "Word Count (wordCount): free-form, default {}", defaults.word_count);
    out
}
