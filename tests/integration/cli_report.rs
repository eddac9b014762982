//! End-to-end checks of the command-line surface and report layout

use super::helpers::*;

#[test]
fn test_default_run_scans_working_directory() {
    let dir = story_dir();
    write_file(dir.path(), "story-001.md", &story_markdown(1, "DEBT-001", 8, "P0"));
    write_file(dir.path(), "story-002.md", &story_markdown(2, "DEBT-002", 4, "P3"));
    write_file(dir.path(), "story-batch-1.md", &story_markdown(9, "DEBT-009", 100, "P0"));
    write_file(dir.path(), "notes.md", &story_markdown(8, "DEBT-008", 100, "P0"));

    let report = report_for(dir.path());

    let expected = "\
Total stories found: 2

STORY_ID,TITLE,SPRINT,EFFORT_HOURS,PRIORITY,TYPE,CRITERIA_COUNT
DEBT-001,\"Story number 1\",Sprint 1,8,P0,\"Refactor\",2
DEBT-002,\"Story number 2\",Sprint 1,4,P3,\"Refactor\",2


TOTAL EFFORT HOURS: 12
AVERAGE EFFORT PER STORY: 6.0h

P0 CRITICAL: 8h (66.7%)
P1 HIGH: 0h (0.0%)
P2 MEDIUM: 0h (0.0%)
P3 LOW: 4h (33.3%)
";
    assert_eq!(report, expected);
}

#[test]
fn test_directory_argument() {
    let root = story_dir();
    let stories = root.path().join("stories");
    std::fs::create_dir(&stories).unwrap();
    write_file(&stories, "story-1.md", &story_markdown(1, "AUTH-1", 5, "P1"));

    let output = run_in(root.path(), &["stories"]);
    assert!(output.status.success());

    let report = String::from_utf8(output.stdout).unwrap();
    assert!(report.starts_with("Total stories found: 1\n"));
    assert!(report.contains("AUTH-1,\"Story number 1\",Sprint 1,5,P1,\"Refactor\",2\n"));
}

#[test]
fn test_json_format() {
    let dir = story_dir();
    write_file(dir.path(), "story-1.md", &story_markdown(1, "AUTH-1", 5, "P1"));
    write_file(dir.path(), "story-2.md", &story_markdown(2, "AUTH-2", 15, "P2"));

    let output = run_in(dir.path(), &["--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stories"][1]["story_id"], "AUTH-2");
    assert_eq!(json["stories"][1]["type"], "Refactor");
    assert_eq!(json["summary"]["story_count"], 2);
    assert_eq!(json["summary"]["total_effort_hours"], 20);
    assert_eq!(json["summary"]["average_effort_hours"], 10.0);
}

#[test]
fn test_unknown_format_is_rejected() {
    let dir = story_dir();
    let output = run_in(dir.path(), &["--format", "xml"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported format"));
}

#[test]
fn test_no_story_files_fails_without_report() {
    let dir = story_dir();
    write_file(dir.path(), "story-summary.md", &story_markdown(1, "X-1", 3, "P0"));

    let output = run_in(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No story files found"));
}

#[test]
fn test_missing_directory_fails() {
    let dir = story_dir();
    let output = run_in(dir.path(), &["does-not-exist"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read story directory"));
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let dir = story_dir();
    write_file(dir.path(), "story-1.md", &story_markdown(1, "AUTH-1", 5, "P1"));

    let quiet = run_in(dir.path(), &[]);
    let verbose = run_in(dir.path(), &["--verbose"]);

    assert!(verbose.status.success());
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("selected story file"));
}
