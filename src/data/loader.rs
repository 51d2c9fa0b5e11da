use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::tweet::{Tweet, TweetDataset};

/// Why an upload delivered no data.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// The file could not be read
    Io(String),
    /// The content is not valid JSON
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "Failed to read tweet file: {}", msg),
            LoadError::Parse(msg) => write!(f, "Invalid JSON file: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Parses the content of an uploaded file.
///
/// Only malformed JSON is an error. A document whose root is not an array
/// carries no tweets and yields an empty list; records are not validated.
pub fn parse_tweets(bytes: &[u8]) -> Result<Vec<Tweet>, LoadError> {
    let root: Value = serde_json::from_slice(bytes)?;

    let tweets = match root {
        Value::Array(items) => items.iter().map(Tweet::from_value).collect(),
        other => {
            log::warn!(
                "Tweet file root is a JSON {}, not an array. Nothing to plot.",
                json_kind(&other)
            );
            Vec::new()
        }
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_file_loads {
        let unplottable = tweets
            .iter()
            .filter(|t: &&Tweet| t.canonical_month().is_none())
            .count();
        log::info!(
            "Parsed {} tweets ({} without a plottable month)",
            tweets.len(),
            unplottable
        );
    }

    Ok(tweets)
}

/// Parses bytes read from `source` into a dataset for the given load generation.
pub fn dataset_from_bytes(
    bytes: &[u8],
    source: impl Into<String>,
    generation: u64,
) -> Result<TweetDataset, LoadError> {
    let tweets = parse_tweets(bytes)?;
    Ok(TweetDataset::new(tweets, source, generation))
}

/// Reads and parses a tweet file from disk. Used by the CLI paths.
pub fn load_from_path(path: &Path, generation: u64) -> Result<TweetDataset> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to open tweet file: {}", path.display()))?;
    dataset_from_bytes(&bytes, display_name(path), generation)
        .with_context(|| format!("Failed to parse tweet file: {}", path.display()))
}

/// File name shown in the UI for a chosen path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
