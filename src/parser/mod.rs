pub mod story;

pub use story::StoryExtractor;
