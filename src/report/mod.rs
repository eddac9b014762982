//! Story collection and effort aggregation
//!
//! Stories are keyed by ID. A later file declaring an ID already seen replaces
//! the earlier record, so the report counts each ID once.

pub mod render;

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::{PriorityBucket, Story};

pub use render::{render_json, render_text};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("No story files found; nothing to summarise")]
    NoStories,
}

/// Stories keyed by ID, iterated in ascending ID order.
#[derive(Debug, Default)]
pub struct StoryIndex {
    stories: BTreeMap<String, Story>,
}

impl StoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a story, replacing any earlier story with the same ID.
    ///
    /// Returns the replaced story, if there was one.
    pub fn insert(&mut self, story: Story) -> Option<Story> {
        self.stories.insert(story.story_id.clone(), story)
    }

    pub fn get(&self, story_id: &str) -> Option<&Story> {
        self.stories.get(story_id)
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Story> {
        self.stories.values()
    }

    pub fn total_effort(&self) -> u64 {
        self.iter().map(|s| s.effort_hours).sum()
    }

    pub fn effort_for(&self, bucket: PriorityBucket) -> u64 {
        self.iter()
            .filter(|s| bucket.matches(&s.priority))
            .map(|s| s.effort_hours)
            .sum()
    }
}

impl FromIterator<Story> for StoryIndex {
    fn from_iter<I: IntoIterator<Item = Story>>(iter: I) -> Self {
        let mut index = StoryIndex::new();
        for story in iter {
            index.insert(story);
        }
        index
    }
}

/// Effort subtotal for one priority bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketEffort {
    pub bucket: PriorityBucket,
    pub hours: u64,
    /// Share of total effort, 0.0 when total effort is zero.
    pub percent: f64,
}

/// Aggregate statistics over a [`StoryIndex`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffortSummary {
    pub story_count: usize,
    pub total_effort_hours: u64,
    pub average_effort_hours: f64,
    pub by_priority: Vec<BucketEffort>,
}

impl EffortSummary {
    pub fn from_index(index: &StoryIndex) -> Result<Self, ReportError> {
        if index.is_empty() {
            return Err(ReportError::NoStories);
        }

        let story_count = index.len();
        let total = index.total_effort();

        let by_priority = PriorityBucket::ALL
            .iter()
            .map(|&bucket| {
                let hours = index.effort_for(bucket);
                let percent = if total == 0 {
                    0.0
                } else {
                    hours as f64 / total as f64 * 100.0
                };
                BucketEffort {
                    bucket,
                    hours,
                    percent,
                }
            })
            .collect();

        Ok(Self {
            story_count,
            total_effort_hours: total,
            average_effort_hours: total as f64 / story_count as f64,
            by_priority,
        })
    }

    /// Sum of the four bucket subtotals. Less than the total when some
    /// stories carry a priority outside P0..P3.
    pub fn bucketed_effort_hours(&self) -> u64 {
        self.by_priority.iter().map(|b| b.hours).sum()
    }
}
