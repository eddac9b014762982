//! Story document field extraction
//!
//! Story files are loosely structured markdown. Metadata lives on bold-label
//! lines such as `**Effort:** 8 hours` and the title is a `# Story N: ...`
//! heading. Each field is looked up independently over the whole document;
//! the first match wins and a missing field falls back to its default.

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::constants::{
    DEFAULT_EFFORT_HOURS, DEFAULT_PRIORITY, DEFAULT_SPRINT, DEFAULT_STORY_ID, DEFAULT_STORY_TYPE,
    DEFAULT_TITLE,
};
use crate::models::keys::labels;
use crate::models::Story;

/// Value shape following a bold label.
#[derive(Debug, Clone, Copy)]
enum ValueShape {
    /// `WORD-NUMBER`, e.g. `DEBT-042`
    Identifier,
    /// ASCII digits followed by `hour` or `hours`
    Hours,
    /// A single word token
    Word,
    /// Everything up to the next `*` or end of line
    RestOfLine,
}

impl ValueShape {
    fn pattern(self) -> &'static str {
        match self {
            ValueShape::Identifier => r"(\w+-\d+)",
            ValueShape::Hours => r"([0-9]+)\s*hours?",
            ValueShape::Word => r"(\w+)",
            ValueShape::RestOfLine => r"([^*\n]+)",
        }
    }
}

/// Compile `**{label}:**` followed by optional whitespace and the value shape.
fn label_rule(label: &str, shape: ValueShape) -> Result<Regex> {
    let pattern = format!(r"\*\*{}:\*\*\s*{}", regex::escape(label), shape.pattern());
    Regex::new(&pattern).with_context(|| format!("Invalid pattern for label '{label}'"))
}

/// Compiled extraction rules, built once and applied to every story file.
#[derive(Debug)]
pub struct StoryExtractor {
    story_id: Regex,
    effort: Regex,
    priority: Regex,
    sprint: Regex,
    story_type: Regex,
    title: Regex,
    criterion: Regex,
}

impl StoryExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            story_id: label_rule(labels::STORY_ID, ValueShape::Identifier)?,
            effort: label_rule(labels::EFFORT, ValueShape::Hours)?,
            priority: label_rule(labels::PRIORITY, ValueShape::Word)?,
            sprint: label_rule(labels::SPRINT, ValueShape::RestOfLine)?,
            story_type: label_rule(labels::TYPE, ValueShape::RestOfLine)?,
            title: Regex::new(r"(?m)^#\s+Story\s+\d+[:\s]+(.+?)$")
                .context("Invalid story title pattern")?,
            criterion: Regex::new(r"- \[\s?\]").context("Invalid checklist pattern")?,
        })
    }

    /// Build a [`Story`] from the full text of one file.
    ///
    /// Never fails: every field that cannot be found takes its default.
    pub fn extract(&self, source_file: &str, content: &str) -> Story {
        let story_id = capture(&self.story_id, content)
            .unwrap_or(DEFAULT_STORY_ID)
            .to_string();

        let effort_hours = match capture(&self.effort, content) {
            Some(digits) => digits.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    file = source_file,
                    value = digits,
                    "effort value too large for u64, counting as {}",
                    DEFAULT_EFFORT_HOURS
                );
                DEFAULT_EFFORT_HOURS
            }),
            None => {
                tracing::debug!(file = source_file, "no effort line found");
                DEFAULT_EFFORT_HOURS
            }
        };

        let story = Story {
            story_id,
            source_file: source_file.to_string(),
            title: capture_trimmed(&self.title, content, DEFAULT_TITLE),
            sprint: capture_trimmed(&self.sprint, content, DEFAULT_SPRINT),
            effort_hours,
            priority: capture(&self.priority, content)
                .unwrap_or(DEFAULT_PRIORITY)
                .to_string(),
            story_type: capture_trimmed(&self.story_type, content, DEFAULT_STORY_TYPE),
            criteria_count: self.count_open_criteria(content),
        };

        tracing::debug!(
            file = source_file,
            story_id = %story.story_id,
            effort = story.effort_hours,
            priority = %story.priority,
            criteria = story.criteria_count,
            "extracted story"
        );

        story
    }

    /// Count unchecked checklist markers (`- [ ]` or `- []`) anywhere in the text.
    pub fn count_open_criteria(&self, content: &str) -> usize {
        self.criterion.find_iter(content).count()
    }
}

/// First capture group of the first match.
fn capture<'a>(rule: &Regex, content: &'a str) -> Option<&'a str> {
    rule.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn capture_trimmed(rule: &Regex, content: &str, default: &str) -> String {
    capture(rule, content)
        .map(str::trim)
        .unwrap_or(default)
        .to_string()
}
