//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Chart size in layout units (pixels of the exported SVG)
    pub chart_width: f64,
    pub chart_height: f64,
    pub circle_radius: f64,
    /// Outline drawn around selected circles
    pub selected_stroke_width: f32,
    pub selected_stroke_color: Color32,
    /// Same outline, as written into exported SVG
    pub selected_stroke_css: &'static str,
    /// Horizontal position of the month labels
    pub month_label_x: f64,
    pub month_label_font_size: f32,
    // Colour stops of the two scales (CSS colour names or hex)
    pub sentiment_colors: &'static [&'static str],
    pub sentiment_domain: &'static [f32],
    pub subjectivity_colors: &'static [&'static str],
    pub subjectivity_domain: &'static [f32],
    /// Fill used when the record has no value for the active field
    pub missing_value_color: [u8; 3],
    /// Legend offset from the chart's right edge
    pub legend_right_offset: f64,
    pub legend_width: f64,
    pub legend_height: f64,
    pub legend_caption_font_size: f32,
    /// Plot aspect ratio (width:height)
    pub plot_aspect_ratio: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    chart_width: 1000.0,
    chart_height: 500.0,
    circle_radius: 4.0,
    selected_stroke_width: 2.0,
    selected_stroke_color: Color32::WHITE,
    selected_stroke_css: "black",
    month_label_x: 10.0,
    month_label_font_size: 14.0,
    sentiment_colors: &["red", "#ECECEC", "green"],
    sentiment_domain: &[-1.0, 0.0, 1.0],
    subjectivity_colors: &["#ECECEC", "#4467C4"],
    subjectivity_domain: &[0.0, 1.0],
    missing_value_color: [0, 0, 0],
    legend_right_offset: 120.0,
    legend_width: 25.0,
    legend_height: 200.0,
    legend_caption_font_size: 16.0,
    plot_aspect_ratio: 2.0,
};
