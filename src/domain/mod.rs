// Domain types and value objects
pub mod color_mode;
pub mod month;
pub mod tweet;

// Re-export commonly used types
pub use color_mode::ColorMode;
pub use month::CanonicalMonth;
pub use tweet::{Tweet, TweetDataset, TweetId};
