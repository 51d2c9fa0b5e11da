use eframe::egui::{Button, ComboBox, RichText, ScrollArea, Ui};
use strum::IntoEnumIterator;

use crate::domain::{ColorMode, TweetId};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// File chooser and upload button
pub struct FileLoaderPanel<'a> {
    chosen_file: Option<&'a str>,
    is_loading: bool,
}

impl<'a> FileLoaderPanel<'a> {
    pub fn new(chosen_file: Option<&'a str>, is_loading: bool) -> Self {
        Self {
            chosen_file,
            is_loading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLoaderEvent {
    Choose,
    Upload,
}

impl<'a> Panel for FileLoaderPanel<'a> {
    type Event = FileLoaderEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label_header(UI_TEXT.upload_heading);

        ui.horizontal(|ui| {
            if ui.button(UI_TEXT.choose_file_button).clicked() {
                events.push(FileLoaderEvent::Choose);
            }

            match self.chosen_file {
                Some(name) => {
                    ui.label(name);
                }
                None => ui.label_subdued(UI_TEXT.no_file_chosen),
            }

            let can_upload = self.chosen_file.is_some() && !self.is_loading;
            if ui
                .add_enabled(can_upload, Button::new(UI_TEXT.upload_button))
                .clicked()
            {
                events.push(FileLoaderEvent::Upload);
            }

            if self.is_loading {
                ui.spinner();
                ui.label_subdued(UI_TEXT.loading_file);
            }
        });

        events
    }
}

/// Colour mode selector (and SVG export on native builds)
pub struct ViewPanel {
    selected_mode: ColorMode,
    can_export: bool,
}

impl ViewPanel {
    pub fn new(color_mode: ColorMode, can_export: bool) -> Self {
        Self {
            selected_mode: color_mode,
            can_export,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    ColorMode(ColorMode),
    ExportSvg,
}

impl Panel for ViewPanel {
    type Event = ViewEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.label_subheader(UI_TEXT.color_by_label);
            ComboBox::from_id_salt("color_mode")
                .selected_text(self.selected_mode.to_string())
                .show_ui(ui, |ui| {
                    for mode in ColorMode::iter() {
                        if ui
                            .selectable_value(&mut self.selected_mode, mode, mode.to_string())
                            .clicked()
                        {
                            #[cfg(debug_assertions)]
                            if DEBUG_FLAGS.print_ui_interactions {
                                log::info!("Color mode picked: {}", mode);
                            }
                            events.push(ViewEvent::ColorMode(self.selected_mode));
                        }
                    }
                });

            if self.can_export && ui.button(UI_TEXT.export_svg_button).clicked() {
                events.push(ViewEvent::ExportSvg);
            }
        });

        events
    }
}

/// Raw text of the selected tweets, most recent first.
/// Each line has a small button to deselect it.
pub struct SelectionPanel<'a> {
    entries: Vec<(TweetId, &'a str)>,
}

impl<'a> SelectionPanel<'a> {
    pub fn new(entries: Vec<(TweetId, &'a str)>) -> Self {
        Self { entries }
    }
}

impl<'a> Panel for SelectionPanel<'a> {
    type Event = TweetId; // Returns the tweet to deselect

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label(
            RichText::new(format!("{} ({})", UI_TEXT.selection_heading, self.entries.len()))
                .color(UI_CONFIG.colors.subsection_heading),
        );

        if self.entries.is_empty() {
            ui.label_subdued(UI_TEXT.selection_empty);
            return events;
        }

        ScrollArea::vertical()
            .id_salt("selected_tweets")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (id, text) in &self.entries {
                    ui.horizontal_wrapped(|ui| {
                        if ui
                            .small_button("✕")
                            .on_hover_text(UI_TEXT.deselect_hover)
                            .clicked()
                        {
                            events.push(*id);
                        }
                        ui.label(*text);
                    });
                }
            });

        events
    }
}
