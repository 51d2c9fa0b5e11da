//! File persistence configuration

/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";

/// Extensions offered by the tweet file chooser
pub const TWEET_FILE_EXTENSIONS: &[&str] = &["json"];
