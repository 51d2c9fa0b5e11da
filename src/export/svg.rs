//! Writes a laid-out chart as standalone SVG markup.
//!
//! Same element structure as the interactive chart: one `<circle>` per tweet,
//! one `<text>` per month band and a `<g>` holding the gradient legend.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::PLOT_CONFIG;
use crate::models::{ChartModel, LegendModel, Selection};

const GRADIENT_ID: &str = "color-gradient";

/// Renders `chart` with outlines on every selected circle.
pub fn render_svg(chart: &ChartModel, selection: &Selection) -> String {
    let mut svg = String::new();

    // Writing into a String cannot fail
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        fmt_num(chart.width),
        fmt_num(chart.height)
    );

    for circle in &chart.circles {
        let stroke = if selection.contains(circle.id) {
            PLOT_CONFIG.selected_stroke_css
        } else {
            "none"
        };
        let _ = write!(
            svg,
            r#"<circle r="{}" fill="{}" cx="{}" cy="{}" stroke="{}" stroke-width="{}"></circle>"#,
            fmt_num(PLOT_CONFIG.circle_radius),
            circle.fill.to_css(),
            fmt_num(circle.x),
            fmt_num(circle.y),
            stroke,
            PLOT_CONFIG.selected_stroke_width
        );
    }

    for label in &chart.month_labels {
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" text-anchor="start" style="font-size: {}px; font-weight: bold;">{}</text>"#,
            fmt_num(label.x),
            fmt_num(label.y),
            PLOT_CONFIG.month_label_font_size,
            escape_xml(label.month.as_ref())
        );
    }

    write_legend(&mut svg, &chart.legend);
    svg.push_str("</svg>");
    svg
}

/// Renders and writes the chart to `path`.
pub fn write_svg(path: &Path, chart: &ChartModel, selection: &Selection) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, render_svg(chart, selection))
        .context(format!("Failed to write SVG to: {}", path.display()))
}

fn write_legend(svg: &mut String, legend: &LegendModel) {
    let _ = write!(
        svg,
        r#"<g transform="translate({}, {})"><defs><linearGradient id="{}" x1="0%" y1="100%" x2="0%" y2="0%">"#,
        fmt_num(legend.x),
        fmt_num(legend.y),
        GRADIENT_ID
    );
    for stop in &legend.stops {
        let _ = write!(
            svg,
            r#"<stop offset="{}%" stop-color="{}"></stop>"#,
            fmt_num(f64::from(stop.offset) * 100.0),
            stop.color.to_css()
        );
    }
    let _ = write!(
        svg,
        r#"</linearGradient></defs><rect width="{}" height="{}" style="fill: url(#{});"></rect>"#,
        fmt_num(legend.width),
        fmt_num(legend.height),
        GRADIENT_ID
    );

    let caption_x = legend.width + 5.0;
    for (y, caption) in [(10.0, legend.high_caption), (legend.height, legend.low_caption)] {
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" style="font-size: {}px; font-weight: bold;">{}</text>"#,
            fmt_num(caption_x),
            fmt_num(y),
            PLOT_CONFIG.legend_caption_font_size,
            escape_xml(caption)
        );
    }
    svg.push_str("</g>");
}

/// Integers without a trailing `.0`, everything else to 3 decimals.
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.3}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorMode, Tweet, TweetDataset, TweetId};

    fn chart_of(months: &[&str], mode: ColorMode) -> ChartModel {
        let tweets = months
            .iter()
            .map(|m| Tweet {
                month: Some(m.to_string()),
                sentiment: Some(1.0),
                subjectivity: Some(0.0),
                raw_tweet: Some("hi".to_string()),
            })
            .collect();
        ChartModel::build(&TweetDataset::new(tweets, "test.json", 1), mode)
    }

    #[test]
    fn test_one_circle_per_plotted_tweet_and_one_label_per_month() {
        let chart = chart_of(&["April", "April", "May", "June"], ColorMode::Sentiment);
        let svg = render_svg(&chart, &Selection::new());

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches(r#"fill="rgb(0, 128, 0)""#).count(), 3);
        assert!(svg.contains(">April</text>"));
        assert!(svg.contains(">May</text>"));
        assert!(!svg.contains("June"));
    }

    #[test]
    fn test_selected_circles_get_an_outline() {
        let chart = chart_of(&["March", "March"], ColorMode::Sentiment);
        let mut selection = Selection::new();
        selection.toggle(TweetId(1));

        let svg = render_svg(&chart, &selection);
        assert_eq!(svg.matches(r#"stroke="black""#).count(), 1);
        assert_eq!(svg.matches(r#"stroke="none""#).count(), 1);
    }

    #[test]
    fn test_legend_matches_color_mode() {
        let svg = render_svg(&chart_of(&["March"], ColorMode::Subjectivity), &Selection::new());
        assert!(svg.contains(r#"<g transform="translate(880, 150)">"#));
        assert!(svg.contains(r#"<stop offset="0%" stop-color="rgb(236, 236, 236)">"#));
        assert!(svg.contains(r#"<stop offset="100%" stop-color="rgb(68, 103, 196)">"#));
        assert!(svg.contains(">Subjective</text>"));
        assert!(svg.contains(">Objective</text>"));

        let svg = render_svg(&chart_of(&["March"], ColorMode::Sentiment), &Selection::new());
        assert!(svg.contains(r#"<stop offset="50%""#));
        assert!(svg.contains(">Positive</text>"));
    }

    #[test]
    fn test_fmt_num_and_escape() {
        assert_eq!(fmt_num(250.0), "250");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(1.23456), "1.235");
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_write_svg_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("chart.svg");
        let chart = chart_of(&["May"], ColorMode::Sentiment);

        write_svg(&path, &chart, &Selection::new()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("<circle").count(), 1);
    }
}
