pub mod constants;
pub mod keys;
pub mod story;

pub use story::{PriorityBucket, Story};
