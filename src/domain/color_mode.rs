use std::fmt;

use serde::{Deserialize, Serialize};

/// Which tweet field drives circle fill and the legend.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    clap::ValueEnum,
)]
pub enum ColorMode {
    #[default]
    Sentiment,
    Subjectivity,
}

impl ColorMode {
    /// Legend caption for the high end of the scale (drawn at the top).
    pub fn high_caption(self) -> &'static str {
        match self {
            ColorMode::Sentiment => "Positive",
            ColorMode::Subjectivity => "Subjective",
        }
    }

    /// Legend caption for the low end of the scale (drawn at the bottom).
    pub fn low_caption(self) -> &'static str {
        match self {
            ColorMode::Sentiment => "Negative",
            ColorMode::Subjectivity => "Objective",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorMode::Sentiment => write!(f, "Sentiment"),
            ColorMode::Subjectivity => write!(f, "Subjectivity"),
        }
    }
}
