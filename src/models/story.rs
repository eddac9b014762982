use serde::Serialize;

/// One story document, reduced to the fields the effort report needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    pub story_id: String,
    pub source_file: String,
    pub title: String,
    pub sprint: String,
    pub effort_hours: u64,
    /// Raw priority token. Not validated against the known buckets.
    pub priority: String,
    #[serde(rename = "type")]
    pub story_type: String,
    pub criteria_count: usize,
}

/// Fixed severity levels used to group effort totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriorityBucket {
    P0,
    P1,
    P2,
    P3,
}

impl PriorityBucket {
    /// All buckets in report order, highest severity first.
    pub const ALL: [PriorityBucket; 4] = [
        PriorityBucket::P0,
        PriorityBucket::P1,
        PriorityBucket::P2,
        PriorityBucket::P3,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PriorityBucket::P0 => "P0",
            PriorityBucket::P1 => "P1",
            PriorityBucket::P2 => "P2",
            PriorityBucket::P3 => "P3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriorityBucket::P0 => "CRITICAL",
            PriorityBucket::P1 => "HIGH",
            PriorityBucket::P2 => "MEDIUM",
            PriorityBucket::P3 => "LOW",
        }
    }

    /// Exact, case-sensitive match against a story's raw priority token.
    pub fn matches(self, priority: &str) -> bool {
        self.code() == priority
    }
}

impl std::fmt::Display for PriorityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.label())
    }
}
