// Chart models: pure logic, independent of egui rendering

pub mod chart;
pub mod color_scale;
pub mod selection;

// Re-export key types for convenience
pub use chart::{ChartModel, LegendModel, MonthLabel, PlacedTweet};
pub use color_scale::{ColorScale, GradientStop, Rgb8};
pub use selection::Selection;
