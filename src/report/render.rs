use anyhow::{Context, Result};
use serde::Serialize;

use super::{EffortSummary, StoryIndex};
use crate::models::keys::columns;
use crate::models::Story;

/// Render the plain-text report.
///
/// Layout: story count, CSV header and one row per story in ID order, then
/// total and average effort, then one line per priority bucket. Titles and
/// types are wrapped in quotes but not escaped.
pub fn render_text(index: &StoryIndex, summary: &EffortSummary) -> String {
    let mut lines = Vec::with_capacity(index.len() + 12);

    lines.push(format!("Total stories found: {}", summary.story_count));
    lines.push(String::new());
    lines.push(columns::ALL.join(","));
    lines.extend(index.iter().map(csv_row));

    lines.push(String::new());
    lines.push(String::new());
    lines.push(format!("TOTAL EFFORT HOURS: {}", summary.total_effort_hours));
    lines.push(format!(
        "AVERAGE EFFORT PER STORY: {:.1}h",
        summary.average_effort_hours
    ));

    lines.push(String::new());
    for bucket in &summary.by_priority {
        lines.push(format!(
            "{}: {}h ({:.1}%)",
            bucket.bucket, bucket.hours, bucket.percent
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn csv_row(story: &Story) -> String {
    format!(
        "{},\"{}\",{},{},{},\"{}\",{}",
        story.story_id,
        story.title,
        story.sprint,
        story.effort_hours,
        story.priority,
        story.story_type,
        story.criteria_count
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    stories: Vec<&'a Story>,
    summary: &'a EffortSummary,
}

/// Render the report as pretty-printed JSON.
pub fn render_json(index: &StoryIndex, summary: &EffortSummary) -> Result<String> {
    let report = JsonReport {
        stories: index.iter().collect(),
        summary,
    };
    let mut out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    out.push('\n');
    Ok(out)
}
