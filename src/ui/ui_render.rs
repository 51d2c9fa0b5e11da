use eframe::egui::{CentralPanel, Context, Frame, ScrollArea, TopBottomPanel};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    FileLoaderEvent, FileLoaderPanel, Panel, SelectionPanel, ViewEvent, ViewPanel,
};
use crate::ui::utils::spaced_separator;

use super::app::TweetSwarmApp;

impl TweetSwarmApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let top_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(8.0);
        TopBottomPanel::top("top_panel")
            .frame(top_panel_frame)
            .show(ctx, |ui| {
                let chosen_name = self.chosen_file.as_ref().map(|f| f.name.clone());
                let file_events =
                    FileLoaderPanel::new(chosen_name.as_deref(), self.is_loading()).render(ui);

                ui.add_space(4.0);
                let can_export = cfg!(not(target_arch = "wasm32"))
                    && !self.data_state.dataset.is_empty();
                let view_events = ViewPanel::new(self.color_mode, can_export).render(ui);

                for event in file_events {
                    match event {
                        FileLoaderEvent::Choose => self.choose_file(),
                        FileLoaderEvent::Upload => self.submit_upload(),
                    }
                }

                for event in view_events {
                    match event {
                        ViewEvent::ColorMode(mode) => self.set_color_mode(mode),
                        ViewEvent::ExportSvg => {
                            #[cfg(not(target_arch = "wasm32"))]
                            self.export_svg();
                        }
                    }
                }
            });
    }

    pub(super) fn render_selection_panel(&mut self, ctx: &Context) {
        let panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(8.0);
        TopBottomPanel::bottom("selection_panel")
            .resizable(true)
            .default_height(UI_CONFIG.selection_panel_height)
            .frame(panel_frame)
            .show(ctx, |ui| {
                let deselected = SelectionPanel::new(self.selected_entries()).render(ui);
                for id in deselected {
                    self.toggle_tweet(id);
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                if self.data_state.dataset.is_empty() {
                    ui.centered_and_justified(|ui| ui.label_subdued(UI_TEXT.chart_empty));
                    return;
                }

                ScrollArea::vertical().id_salt("chart").show(ui, |ui| {
                    ui.label_header(&self.data_state.dataset.source);
                    let clicked = self.plot_view.show_chart(
                        ui,
                        &self.data_state.dataset,
                        self.color_mode,
                        &self.selection,
                    );
                    if let Some(id) = clicked {
                        self.toggle_tweet(id);
                    }

                    spaced_separator(ui);
                    let chart = self
                        .plot_view
                        .chart(&self.data_state.dataset, self.color_mode);
                    let (plotted, skipped) = (chart.circles.len(), chart.skipped);
                    ui.horizontal(|ui| {
                        ui.metric(
                            UI_TEXT.tweets_plotted_label,
                            &plotted.to_string(),
                            UI_CONFIG.colors.heading,
                        );
                        ui.add_space(12.0);
                        ui.metric(
                            UI_TEXT.tweets_skipped_label,
                            &skipped.to_string(),
                            UI_CONFIG.colors.subsection_heading,
                        );
                    });
                });
            });
    }
}
