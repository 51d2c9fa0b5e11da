use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub month_label: Color32,
    pub legend_caption: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Height the selected-tweet list starts at
    pub selection_panel_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY, // This sets every label globally to this color
        heading: Color32::from_rgb(120, 170, 255),
        subsection_heading: Color32::LIGHT_GRAY,
        central_panel: Color32::from_rgb(30, 30, 34),
        side_panel: Color32::from_rgb(22, 22, 25),
        month_label: Color32::WHITE,
        legend_caption: Color32::WHITE,
    },
    selection_panel_height: 160.0,
};
