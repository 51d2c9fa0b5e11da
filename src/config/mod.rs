//! Configuration module for the tweet swarm application.

mod debug; // Private because of the public re-export. Forces files to use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod layout;
pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use layout::{LAYOUT_CONFIG, LayoutConfig};
pub use persistence::{APP_STATE_PATH, TWEET_FILE_EXTENSIONS};
pub use plot::{PLOT_CONFIG, PlotConfig};
