use colorgrad::Gradient;
use eframe::egui::Color32;

use crate::config::PLOT_CONFIG;
use crate::domain::color_mode::ColorMode;
use crate::domain::tweet::Tweet;

/// An opaque 8-bit sRGB colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(255, 0, 0)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }
}

impl From<colorgrad::Color> for Rgb8 {
    fn from(color: colorgrad::Color) -> Self {
        let [r, g, b, _] = color.to_rgba8();
        Self { r, g, b }
    }
}

/// One stop of the legend gradient. `offset` runs from 0 (bottom, low) to 1 (top, high).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb8,
}

/// Linear colour scale for the active colour mode.
///
/// RGB interpolation between the configured stops. Values beyond the domain
/// clamp to the end colours; a missing or NaN value is drawn black.
pub struct ColorScale {
    mode: ColorMode,
    domain: &'static [f32],
    gradient: colorgrad::LinearGradient,
}

impl ColorScale {
    pub fn for_mode(mode: ColorMode) -> Self {
        let (colors, domain) = match mode {
            ColorMode::Sentiment => (PLOT_CONFIG.sentiment_colors, PLOT_CONFIG.sentiment_domain),
            ColorMode::Subjectivity => (
                PLOT_CONFIG.subjectivity_colors,
                PLOT_CONFIG.subjectivity_domain,
            ),
        };

        let gradient = colorgrad::GradientBuilder::new()
            .html_colors(colors)
            .domain(domain)
            .mode(colorgrad::BlendMode::Rgb)
            .build::<colorgrad::LinearGradient>()
            .expect("Failed to create color gradient");

        Self {
            mode,
            domain,
            gradient,
        }
    }

    pub fn color_at(&self, value: f64) -> Rgb8 {
        if value.is_nan() {
            let [r, g, b] = PLOT_CONFIG.missing_value_color;
            return Rgb8::new(r, g, b);
        }
        self.gradient.at(value as f32).into()
    }

    /// Fill for a tweet, from the field selected by the colour mode.
    pub fn color_for(&self, tweet: &Tweet) -> Rgb8 {
        let value = match self.mode {
            ColorMode::Sentiment => tweet.sentiment,
            ColorMode::Subjectivity => tweet.subjectivity,
        };
        self.color_at(value.unwrap_or(f64::NAN))
    }

    /// One legend stop per domain point, low to high.
    pub fn legend_stops(&self) -> Vec<GradientStop> {
        let (Some(&low), Some(&high)) = (self.domain.first(), self.domain.last()) else {
            return Vec::new();
        };
        let span = high - low;

        self.domain
            .iter()
            .map(|&d| GradientStop {
                offset: if span > 0.0 { (d - low) / span } else { 0.0 },
                color: self.gradient.at(d).into(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Rgb8, expected: Rgb8) {
        let near = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 1;
        assert!(
            near(actual.r, expected.r) && near(actual.g, expected.g) && near(actual.b, expected.b),
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_sentiment_endpoints() {
        let scale = ColorScale::for_mode(ColorMode::Sentiment);
        assert_eq!(scale.color_at(-1.0), Rgb8::new(255, 0, 0));
        assert_eq!(scale.color_at(0.0), Rgb8::new(236, 236, 236));
        assert_eq!(scale.color_at(1.0), Rgb8::new(0, 128, 0));
    }

    #[test]
    fn test_sentiment_interpolates_linearly() {
        let scale = ColorScale::for_mode(ColorMode::Sentiment);
        assert_close(scale.color_at(0.5), Rgb8::new(118, 182, 118));
        assert_close(scale.color_at(-0.5), Rgb8::new(246, 118, 118));
    }

    #[test]
    fn test_subjectivity_endpoints_and_midpoint() {
        let scale = ColorScale::for_mode(ColorMode::Subjectivity);
        assert_eq!(scale.color_at(0.0), Rgb8::new(236, 236, 236));
        assert_eq!(scale.color_at(1.0), Rgb8::new(68, 103, 196));
        assert_close(scale.color_at(0.5), Rgb8::new(152, 170, 216));
    }

    #[test]
    fn test_out_of_domain_clamps_and_missing_is_black() {
        let scale = ColorScale::for_mode(ColorMode::Subjectivity);
        assert_eq!(scale.color_at(2.0), scale.color_at(1.0));
        assert_eq!(scale.color_at(-3.0), scale.color_at(0.0));
        assert_eq!(scale.color_for(&Tweet::default()), Rgb8::new(0, 0, 0));
    }

    #[test]
    fn test_color_for_reads_the_mode_field() {
        let tweet = Tweet {
            sentiment: Some(-1.0),
            subjectivity: Some(1.0),
            ..Tweet::default()
        };
        assert_eq!(
            ColorScale::for_mode(ColorMode::Sentiment).color_for(&tweet),
            Rgb8::new(255, 0, 0)
        );
        assert_eq!(
            ColorScale::for_mode(ColorMode::Subjectivity).color_for(&tweet),
            Rgb8::new(68, 103, 196)
        );
    }

    #[test]
    fn test_legend_stops() {
        let stops = ColorScale::for_mode(ColorMode::Sentiment).legend_stops();
        let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(stops[0].color, Rgb8::new(255, 0, 0));
        assert_eq!(stops[2].color, Rgb8::new(0, 128, 0));

        let stops = ColorScale::for_mode(ColorMode::Subjectivity).legend_stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].color.to_css(), "rgb(68, 103, 196)");
    }
}
