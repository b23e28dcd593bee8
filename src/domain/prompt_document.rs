use std::fmt;

/// One line inside a prompt section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptLine {
    /// Rendered with a leading `• ` marker.
    Bullet(String),
    /// Rendered as-is.
    Text(String),
}

/// A labeled block of the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSection {
    pub header: &'static str,
    pub lines: Vec<PromptLine>,
}

impl PromptSection {
    pub fn new(header: &'static str) -> Self {
        Self { header, lines: Vec::new() }
    }

    pub fn bullet(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(PromptLine::Bullet(text.into()));
        self
    }

    /// Push a bullet only when `condition` holds.
    pub fn bullet_if(&mut self, condition: bool, text: impl Into<String>) -> &mut Self {
        if condition {
            self.bullet(text);
        }
        self
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(PromptLine::Text(text.into()));
        self
    }
}

/// A fully assembled brief: title, intro, ordered sections and closing line.
///
/// `Display` renders the final prompt string. Sections are separated by one
/// blank line, and each line ends with a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDocument {
    pub title: String,
    pub intro: String,
    pub sections: Vec<PromptSection>,
    pub closing: &'static str,
}

impl fmt::Display for PromptDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}\n\n", self.title, self.intro)?;

        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            writeln!(f, "{}:", section.header)?;
            for line in &section.lines {
                match line {
                    PromptLine::Bullet(text) => writeln!(f, "• {}", text)?,
                    PromptLine::Text(text) => writeln!(f, "{}", text)?,
                }
            }
        }

        write!(f, "\n{}", self.closing)
    }
}
