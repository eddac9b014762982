/// Story ID recorded when a file has no `**Story ID:**` line.
pub const DEFAULT_STORY_ID: &str = "UNKNOWN";

/// Title recorded when no `# Story N: ...` heading is present.
pub const DEFAULT_TITLE: &str = "Unknown";

/// Sprint recorded when no `**Sprint:**` line is present.
pub const DEFAULT_SPRINT: &str = "TBD";

/// Effort recorded when no `**Effort:** N hours` line is present.
pub const DEFAULT_EFFORT_HOURS: u64 = 0;

/// Priority recorded when no `**Priority:**` line is present.
pub const DEFAULT_PRIORITY: &str = "P2";

/// Story type recorded when no `**Type:**` line is present.
pub const DEFAULT_STORY_TYPE: &str = "Tech Debt";

/// File naming convention for story documents.
pub mod files {
    /// Story files start with this prefix.
    pub const STORY_PREFIX: &str = "story-";

    /// Story files end with this extension (including the dot).
    pub const STORY_EXTENSION: &str = ".md";

    /// Names containing any of these are roll-up documents, not stories.
    pub const EXCLUDED_SUBSTRINGS: [&str; 2] = ["batch", "summary"];
}
