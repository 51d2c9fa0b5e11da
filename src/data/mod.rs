// Tweet file loading
pub mod loader;

// Re-export commonly used types
pub use loader::{LoadError, dataset_from_bytes, load_from_path, parse_tweets};
