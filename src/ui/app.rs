use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::StartupState;
use crate::domain::{ColorMode, TweetDataset, TweetId};
use crate::models::Selection;
use crate::ui::app_async::{ChosenFile, FileLoadResult};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Runtime-only data owned by the app.
pub struct DataState {
    /// The tweets of the last successful upload (empty until then)
    pub dataset: TweetDataset,
    /// Generation handed to the next upload
    pub next_generation: u64,
}

impl DataState {
    pub fn new(dataset: Option<TweetDataset>) -> Self {
        let dataset = dataset.unwrap_or_default();
        let next_generation = dataset.generation + 1;
        Self {
            dataset,
            next_generation,
        }
    }

    /// Generations start at 1 so a fresh upload never matches the empty dataset.
    pub fn take_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }
}

impl Default for DataState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[derive(Deserialize, Serialize)]
pub struct TweetSwarmApp {
    // UI state
    #[serde(default)]
    pub(super) color_mode: ColorMode,
    #[cfg(not(target_arch = "wasm32"))]
    #[serde(default)]
    pub(super) last_file_path: Option<PathBuf>,

    // Data state - skip serialization since it contains runtime-only data
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip)]
    pub(super) plot_view: PlotView,
    #[serde(skip)]
    pub(super) selection: Selection,

    // File chosen but not yet uploaded
    #[serde(skip)]
    pub(super) chosen_file: Option<ChosenFile>,

    // Async file picking (WASM) and reading
    #[serde(skip)]
    pub(super) pick_promise: Option<Promise<Option<ChosenFile>>>,
    #[serde(skip)]
    pub(super) load_promise: Option<Promise<FileLoadResult>>,
}

impl TweetSwarmApp {
    pub fn new(cc: &eframe::CreationContext<'_>, startup: StartupState) -> Self {
        let mut app: TweetSwarmApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Failed to get Tweet Swarm state from storage. Creating anew.");
                }
                app = TweetSwarmApp::new_with_initial_state();
            }
        } else {
            app = TweetSwarmApp::new_with_initial_state();
        }

        // Command line wins over the persisted colour mode
        if let Some(mode) = startup.color_mode {
            app.color_mode = mode;
        }

        app.data_state = DataState::new(startup.dataset);
        app.plot_view = PlotView::new();
        app.selection = Selection::new();
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            color_mode: ColorMode::default(),
            #[cfg(not(target_arch = "wasm32"))]
            last_file_path: None,
            data_state: DataState::default(),
            plot_view: PlotView::default(),
            selection: Selection::new(),
            chosen_file: None,
            pick_promise: None,
            load_promise: None,
        }
    }

    /// Replaces the data wholesale. The previous selection refers to the old
    /// records, so it is dropped.
    pub(super) fn apply_dataset(&mut self, dataset: TweetDataset) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_file_loads {
            log::info!(
                "Loaded {} tweets from {} (generation {})",
                dataset.len(),
                dataset.source,
                dataset.generation
            );
        }
        self.data_state.dataset = dataset;
        self.selection.clear();
    }

    /// Switching colour mode relays out the chart and clears the selection.
    pub(super) fn set_color_mode(&mut self, mode: ColorMode) {
        if self.color_mode == mode {
            return;
        }
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Color mode changed: {} -> {}", self.color_mode, mode);
        }
        self.color_mode = mode;
        self.selection.clear();
    }

    pub(super) fn toggle_tweet(&mut self, id: TweetId) -> bool {
        let selected = self.selection.toggle(id);
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!(
                "Tweet #{} {}",
                id.0,
                if selected { "selected" } else { "deselected" }
            );
        }
        selected
    }

    /// Raw text of each selected tweet, most recent first.
    pub(super) fn selected_entries(&self) -> Vec<(TweetId, &str)> {
        self.selection
            .iter()
            .filter_map(|id| {
                self.data_state
                    .dataset
                    .get(id)
                    .map(|tweet| (id, tweet.raw_text()))
            })
            .collect()
    }
}

impl eframe::App for TweetSwarmApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight file read before the runtime goes away
        self.load_promise = None;
        self.pick_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_file_pick(ctx);
        self.poll_file_load(ctx);

        self.render_top_panel(ctx);
        self.render_selection_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset_from_bytes;

    fn app_with(json: &str) -> TweetSwarmApp {
        let mut app = TweetSwarmApp::new_with_initial_state();
        let generation = app.data_state.take_generation();
        app.apply_dataset(dataset_from_bytes(json.as_bytes(), "test.json", generation).unwrap());
        app
    }

    #[test]
    fn test_click_toggles_selected_text() {
        let mut app = app_with(
            r#"[{"Month":"April","Sentiment":1,"Subjectivity":0.5,"RawTweet":"great day"}]"#,
        );
        let chart = app
            .plot_view
            .chart(&app.data_state.dataset, app.color_mode)
            .clone();
        let circle = &chart.circles[0];
        let clicked = chart.hit_test(circle.x, circle.y, 4.0).unwrap();

        app.toggle_tweet(clicked);
        assert_eq!(app.selected_entries(), vec![(TweetId(0), "great day")]);

        app.toggle_tweet(clicked);
        assert!(app.selected_entries().is_empty());
    }

    #[test]
    fn test_newest_selection_listed_first() {
        let mut app = app_with(
            r#"[{"Month":"March","RawTweet":"first"},{"Month":"May","RawTweet":"second"}]"#,
        );
        app.toggle_tweet(TweetId(0));
        app.toggle_tweet(TweetId(1));
        let texts: Vec<&str> = app.selected_entries().into_iter().map(|(_, t)| t).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn test_color_mode_change_clears_selection_and_recolors() {
        let mut app = app_with(r#"[{"Month":"April","Sentiment":-1,"Subjectivity":1}]"#);
        app.toggle_tweet(TweetId(0));
        let before = app
            .plot_view
            .chart(&app.data_state.dataset, app.color_mode)
            .circles[0]
            .fill;

        app.set_color_mode(ColorMode::Subjectivity);
        assert!(app.selection.is_empty());
        let after = app
            .plot_view
            .chart(&app.data_state.dataset, app.color_mode)
            .circles[0]
            .fill;
        assert_ne!(before, after);
    }

    #[test]
    fn test_same_color_mode_keeps_selection() {
        let mut app = app_with(r#"[{"Month":"April"}]"#);
        app.toggle_tweet(TweetId(0));
        app.set_color_mode(ColorMode::Sentiment);
        assert_eq!(app.selection.len(), 1);
    }

    #[test]
    fn test_new_upload_replaces_data_and_clears_selection() {
        let mut app = app_with(r#"[{"Month":"April","RawTweet":"old"}]"#);
        app.toggle_tweet(TweetId(0));
        let old_generation = app.data_state.dataset.generation;

        let generation = app.data_state.take_generation();
        let replacement =
            dataset_from_bytes(br#"[{"Month":"May","RawTweet":"new"}]"#, "new.json", generation)
                .unwrap();
        app.apply_dataset(replacement);

        assert!(app.selection.is_empty());
        assert!(app.data_state.dataset.generation > old_generation);
        let chart = app
            .plot_view
            .chart(&app.data_state.dataset, app.color_mode);
        assert_eq!(chart.month_labels[0].month.to_string(), "May");
    }
}
