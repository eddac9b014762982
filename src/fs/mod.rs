pub mod story_files;

pub use story_files::{list_story_files, read_story, story_file_name, StoryFileFilter};
