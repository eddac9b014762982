/// Canonical metadata labels used in story documents.
///
/// Story files carry their metadata as bold labels, e.g. `**Effort:** 8 hours`.
/// Always use these constants instead of string literals when building patterns.
pub mod labels {
    pub const STORY_ID: &str = "Story ID";
    pub const EFFORT: &str = "Effort";
    pub const PRIORITY: &str = "Priority";
    pub const SPRINT: &str = "Sprint";
    pub const TYPE: &str = "Type";
}

/// Column names of the CSV section of the text report, in output order.
pub mod columns {
    pub const STORY_ID: &str = "STORY_ID";
    pub const TITLE: &str = "TITLE";
    pub const SPRINT: &str = "SPRINT";
    pub const EFFORT_HOURS: &str = "EFFORT_HOURS";
    pub const PRIORITY: &str = "PRIORITY";
    pub const TYPE: &str = "TYPE";
    pub const CRITERIA_COUNT: &str = "CRITERIA_COUNT";

    pub const ALL: [&str; 7] = [
        STORY_ID,
        TITLE,
        SPRINT,
        EFFORT_HOURS,
        PRIORITY,
        TYPE,
        CRITERIA_COUNT,
    ];
}
