use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

use crate::fs::{list_story_files, read_story, story_file_name, StoryFileFilter};
use crate::parser::StoryExtractor;
use crate::report::{render_json, render_text, EffortSummary, StoryIndex};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!(
                "Unsupported format: {s}. Supported formats: text, json"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub dir: PathBuf,
    pub format: OutputFormat,
    pub filter: StoryFileFilter,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            format: OutputFormat::default(),
            filter: StoryFileFilter::default(),
        }
    }
}

/// Collect every story in the directory into an index.
///
/// Files are processed in name order; a later file with an already-seen
/// story ID replaces the earlier record.
pub fn collect_stories(options: &ScanOptions) -> Result<StoryIndex> {
    let extractor = StoryExtractor::new()?;
    let files = list_story_files(&options.dir, &options.filter)?;

    let mut index = StoryIndex::new();
    for path in &files {
        let content = read_story(path)?;
        let story = extractor.extract(&story_file_name(path), &content);
        let new_file = story.source_file.clone();

        if let Some(replaced) = index.insert(story) {
            tracing::warn!(
                story_id = %replaced.story_id,
                replaced = %replaced.source_file,
                by = %new_file,
                "duplicate story ID, keeping the later file"
            );
        }
    }

    tracing::info!(
        files = files.len(),
        stories = index.len(),
        dir = %options.dir.display(),
        "scanned story directory"
    );

    Ok(index)
}

/// Scan the story directory and render the report.
pub fn execute(options: &ScanOptions) -> Result<String> {
    let index = collect_stories(options)?;
    let summary = EffortSummary::from_index(&index)
        .with_context(|| format!("Nothing to report in {}", options.dir.display()))?;

    match options.format {
        OutputFormat::Text => Ok(render_text(&index, &summary)),
        OutputFormat::Json => render_json(&index, &summary),
    }
}
