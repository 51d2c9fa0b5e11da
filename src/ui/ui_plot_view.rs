use eframe::egui::{self, Vec2};
use egui_plot::Plot;

use crate::config::PLOT_CONFIG;
use crate::domain::{ColorMode, TweetDataset, TweetId};
use crate::models::{ChartModel, Selection};
use crate::ui::utils::truncate_chars;

// Import the Layer System
use crate::ui::plot_layers::{
    LayerContext, MonthLabelLayer, PlotLayer, SelectionOutlineLayer, TweetCircleLayer,
    paint_legend,
};

/// Hover text shows at most this many characters of the tweet.
const HOVER_TEXT_CHARS: usize = 120;

/// Draws the chart and remembers the last layout.
///
/// The force layout only reruns when the dataset generation or the colour
/// mode changes; clicks and selection changes reuse the cached chart.
#[derive(Default)]
pub struct PlotView {
    cache: Option<ChartModel>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// The chart for this dataset and mode, laid out again only if stale.
    pub fn chart(&mut self, dataset: &TweetDataset, color_mode: ColorMode) -> &ChartModel {
        let stale = self
            .cache
            .as_ref()
            .map(|chart| chart.generation != dataset.generation || chart.color_mode != color_mode)
            .unwrap_or(true);
        if stale {
            self.cache = None;
        }
        self.cache
            .get_or_insert_with(|| ChartModel::build(dataset, color_mode))
    }

    /// Shows the chart. Returns the tweet whose circle was clicked this frame, if any.
    pub fn show_chart(
        &mut self,
        ui: &mut egui::Ui,
        dataset: &TweetDataset,
        color_mode: ColorMode,
        selection: &Selection,
    ) -> Option<TweetId> {
        let chart = self.chart(dataset, color_mode);
        let (width, height) = (chart.width, chart.height);
        let marker_radius = PLOT_CONFIG.circle_radius as f32 * ui.available_width() / width as f32;

        let plot_response = Plot::new("tweet_swarm_plot")
            .view_aspect(PLOT_CONFIG.plot_aspect_ratio)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .set_margin_fraction(Vec2::ZERO)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(0.0..=width);
                plot_ui.set_plot_bounds_y(0.0..=height);

                // 1. Create Context
                let ctx = LayerContext {
                    chart,
                    selection,
                    marker_radius,
                };

                // 2. Define Layer Stack (Back to Front)
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(SelectionOutlineLayer),
                    Box::new(TweetCircleLayer),
                    Box::new(MonthLabelLayer),
                ];

                // 3. Render Loop
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });

        paint_legend(
            &ui.painter_at(plot_response.response.rect),
            &plot_response.transform,
            chart,
        );

        let to_chart = |pos: egui::Pos2| {
            let point = plot_response.transform.value_from_position(pos);
            (point.x, height - point.y)
        };

        if let Some(hovered) = plot_response.response.hover_pos().and_then(|pos| {
            let (x, y) = to_chart(pos);
            chart.hit_test(x, y, PLOT_CONFIG.circle_radius)
        }) {
            if let Some(tweet) = dataset.get(hovered) {
                let text = format!(
                    "{}\nSentiment: {}  |  Subjectivity: {}",
                    truncate_chars(tweet.raw_text(), HOVER_TEXT_CHARS),
                    format_score(tweet.sentiment),
                    format_score(tweet.subjectivity),
                );
                plot_response.response.clone().on_hover_text_at_pointer(text);
            }
        }

        if !plot_response.response.clicked() {
            return None;
        }
        plot_response
            .response
            .interact_pointer_pos()
            .and_then(|pos| {
                let (x, y) = to_chart(pos);
                chart.hit_test(x, y, PLOT_CONFIG.circle_radius)
            })
    }
}

fn format_score(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "n/a".to_string())
}
