#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod layout;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

// Re-export commonly used types
pub use data::{LoadError, load_from_path};
pub use domain::{ColorMode, Tweet, TweetDataset, TweetId};
pub use models::{ChartModel, Selection};
pub use ui::TweetSwarmApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tweet file (JSON array) to load at start-up
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Initial colour mode (overrides the saved one)
    #[arg(long, value_enum)]
    pub color_by: Option<ColorMode>,

    /// Write the laid-out chart to this SVG file and exit without a window
    #[arg(long, requires = "file")]
    pub export_svg: Option<PathBuf>,
}

/// What the command line asks the app to start with.
#[derive(Default)]
pub struct StartupState {
    pub dataset: Option<TweetDataset>,
    pub color_mode: Option<ColorMode>,
}

impl StartupState {
    /// Loads `--file` if given. A file that cannot be loaded is logged and the
    /// app starts empty.
    pub fn from_cli(cli: &Cli) -> Self {
        let dataset = cli
            .file
            .as_deref()
            .and_then(|path| match load_from_path(path, 1) {
                Ok(dataset) => Some(dataset),
                Err(e) => {
                    log::error!("{:#}", e);
                    None
                }
            });
        Self {
            dataset,
            color_mode: cli.color_by,
        }
    }
}

/// Headless mode: lays out `--file` and writes it to `out` as SVG.
pub fn export_chart(cli: &Cli, out: &Path) -> Result<()> {
    let file = cli
        .file
        .as_deref()
        .context("--export-svg needs a tweet file (--file)")?;
    let dataset = load_from_path(file, 1)?;
    let chart = ChartModel::build(&dataset, cli.color_by.unwrap_or_default());
    export::write_svg(out, &chart, &Selection::new())?;
    log::info!(
        "Wrote {} circles from {} to {}",
        chart.circles.len(),
        dataset.source,
        out.display()
    );
    Ok(())
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, startup: StartupState) -> Box<dyn eframe::App> {
    let app = ui::TweetSwarmApp::new(cc, startup);
    Box::new(app)
}
