use crate::utils::app_time::now;
use eframe::egui;
use poll_promise::Promise;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(target_arch = "wasm32")]
use std::sync::Arc;
use std::time::Duration;

use crate::config::TWEET_FILE_EXTENSIONS;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{LoadError, dataset_from_bytes};
use crate::domain::TweetDataset;
use crate::ui::app::TweetSwarmApp;

/// A file the user picked but has not uploaded yet.
#[derive(Clone)]
pub(super) struct ChosenFile {
    pub(super) name: String,
    #[cfg(not(target_arch = "wasm32"))]
    pub(super) path: PathBuf,
    // The browser only hands out the content, read at pick time
    #[cfg(target_arch = "wasm32")]
    pub(super) bytes: Arc<Vec<u8>>,
}

pub(super) struct FileLoadResult {
    pub(super) result: Result<TweetDataset, LoadError>,
    pub(super) source: String,
    elapsed_time: Duration,
}

impl FileLoadResult {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl TweetSwarmApp {
    pub(super) fn is_loading(&self) -> bool {
        self.load_promise.is_some() || self.pick_promise.is_some()
    }

    /// Opens the platform file picker. Picking replaces any earlier choice.
    #[cfg(not(target_arch = "wasm32"))]
    pub(super) fn choose_file(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("JSON", TWEET_FILE_EXTENSIONS);
        if let Some(dir) = self.last_file_path.as_deref().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Chose file: {}", path.display());
            }
            self.chosen_file = Some(ChosenFile {
                name: crate::data::loader::display_name(&path),
                path: path.clone(),
            });
            self.last_file_path = Some(path);
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub(super) fn choose_file(&mut self) {
        if self.pick_promise.is_some() {
            return;
        }
        self.pick_promise = Some(Promise::spawn_local(async {
            let handle = rfd::AsyncFileDialog::new()
                .add_filter("JSON", TWEET_FILE_EXTENSIONS)
                .pick_file()
                .await?;
            let bytes = handle.read().await;
            Some(ChosenFile {
                name: handle.file_name(),
                bytes: Arc::new(bytes),
            })
        }));
    }

    pub(super) fn poll_file_pick(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.pick_promise.take() else {
            return;
        };
        match promise.try_take() {
            Ok(Some(file)) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Chose file: {}", file.name);
                }
                self.chosen_file = Some(file);
            }
            // Dialog cancelled, keep whatever was chosen before
            Ok(None) => {}
            Err(promise) => {
                self.pick_promise = Some(promise);
                ctx.request_repaint();
            }
        }
    }

    /// Reads and parses the chosen file off the UI thread.
    pub(super) fn submit_upload(&mut self) {
        if self.load_promise.is_some() {
            return;
        }
        let Some(file) = self.chosen_file.clone() else {
            return;
        };
        let generation = self.data_state.take_generation();

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("tweet_file_read", move || {
            let start = now();
            let result = std::fs::read(&file.path)
                .map_err(LoadError::from)
                .and_then(|bytes| dataset_from_bytes(&bytes, file.name.clone(), generation));
            FileLoadResult {
                result,
                source: file.name,
                elapsed_time: start.elapsed(),
            }
        });

        #[cfg(target_arch = "wasm32")]
        let promise = {
            let start = now();
            let result = dataset_from_bytes(&file.bytes, file.name.clone(), generation);
            Promise::from_ready(FileLoadResult {
                result,
                source: file.name,
                elapsed_time: start.elapsed(),
            })
        };

        self.load_promise = Some(promise);
    }

    pub(super) fn poll_file_load(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.load_promise.take() else {
            return;
        };
        let outcome = match promise.try_take() {
            Ok(outcome) => outcome,
            Err(promise) => {
                self.load_promise = Some(promise);
                ctx.request_repaint();
                return;
            }
        };

        let elapsed = outcome.elapsed_time();
        match outcome.result {
            Ok(dataset) => {
                if elapsed.as_millis() > 100 {
                    log::info!(
                        "Read {} in {:.2}s",
                        outcome.source,
                        elapsed.as_secs_f32()
                    );
                }
                self.apply_dataset(dataset);
            }
            // The previous chart stays on screen
            Err(error) => {
                log::error!("Upload of {} failed: {}", outcome.source, error);
            }
        }
        ctx.request_repaint();
    }

    /// Asks for a target path and writes the current chart as SVG.
    #[cfg(not(target_arch = "wasm32"))]
    pub(super) fn export_svg(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .set_file_name("tweets.svg")
            .save_file()
        else {
            return;
        };

        let chart = self
            .plot_view
            .chart(&self.data_state.dataset, self.color_mode);
        match crate::export::write_svg(&path, chart, &self.selection) {
            Ok(()) => log::info!("Exported chart to {}", path.display()),
            Err(e) => log::error!("SVG export failed: {:#}", e),
        }
    }
}
