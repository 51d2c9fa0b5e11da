use eframe::egui::{Align2, FontId, Mesh, Painter, Rect, RichText, Shape, pos2};
use egui_plot::{MarkerShape, PlotPoint, PlotPoints, PlotTransform, PlotUi, Points, Text};

use crate::config::PLOT_CONFIG;
use crate::models::{ChartModel, PlacedTweet, Selection};
use crate::ui::config::UI_CONFIG;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub chart: &'a ChartModel,
    pub selection: &'a Selection,
    /// Circle radius in screen points at the current plot size
    pub marker_radius: f32,
}

impl LayerContext<'_> {
    /// Chart coordinates grow downward, plot coordinates upward.
    pub fn plot_point(&self, circle: &PlacedTweet) -> [f64; 2] {
        [circle.x, self.chart.height - circle.y]
    }
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. SELECTION OUTLINE LAYER
// ============================================================================
/// Drawn first: a slightly larger disc behind each selected circle shows as a ring.
pub struct SelectionOutlineLayer;

impl PlotLayer for SelectionOutlineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let outlined: Vec<[f64; 2]> = ctx
            .chart
            .circles
            .iter()
            .filter(|c| ctx.selection.contains(c.id))
            .map(|c| ctx.plot_point(c))
            .collect();
        if outlined.is_empty() {
            return;
        }

        plot_ui.points(
            Points::new("Selected", PlotPoints::new(outlined))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(ctx.marker_radius + PLOT_CONFIG.selected_stroke_width)
                .color(PLOT_CONFIG.selected_stroke_color),
        );
    }
}

// ============================================================================
// 2. TWEET CIRCLE LAYER
// ============================================================================
pub struct TweetCircleLayer;

impl PlotLayer for TweetCircleLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let label = ctx.chart.color_mode.to_string();
        for circle in &ctx.chart.circles {
            plot_ui.points(
                Points::new(label.as_str(), PlotPoints::new(vec![ctx.plot_point(circle)]))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(ctx.marker_radius)
                    .color(circle.fill.to_color32()),
            );
        }
    }
}

// ============================================================================
// 3. MONTH LABEL LAYER
// ============================================================================
pub struct MonthLabelLayer;

impl PlotLayer for MonthLabelLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for label in &ctx.chart.month_labels {
            let name = label.month.to_string();
            let text = RichText::new(name.as_str())
                .size(PLOT_CONFIG.month_label_font_size)
                .strong()
                .color(UI_CONFIG.colors.month_label);

            plot_ui.text(
                Text::new(
                    name.as_str(),
                    PlotPoint::new(label.x, ctx.chart.height - label.y),
                    text,
                )
                .anchor(Align2::LEFT_CENTER),
            );
        }
    }
}

// ============================================================================
// LEGEND OVERLAY (painted over the plot, outside the layer stack)
// ============================================================================

/// Paints the vertical gradient bar and its two captions in screen space.
pub fn paint_legend(painter: &Painter, transform: &PlotTransform, chart: &ChartModel) {
    let legend = &chart.legend;
    let to_screen =
        |x: f64, y: f64| transform.position_from_point(&PlotPoint::new(x, chart.height - y));

    let rect = Rect::from_two_pos(
        to_screen(legend.x, legend.y),
        to_screen(legend.x + legend.width, legend.y + legend.height),
    );

    // Two vertices per stop, low colour at the bottom
    let mut mesh = Mesh::default();
    for stop in &legend.stops {
        let y = rect.bottom() - stop.offset * rect.height();
        let color = stop.color.to_color32();
        mesh.colored_vertex(pos2(rect.left(), y), color);
        mesh.colored_vertex(pos2(rect.right(), y), color);
    }
    for segment in 0..legend.stops.len().saturating_sub(1) {
        let base = (segment * 2) as u32;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    painter.add(Shape::mesh(mesh));

    let font = FontId::proportional(PLOT_CONFIG.legend_caption_font_size);
    let caption_x = legend.x + legend.width + 5.0;
    let captions = [
        (legend.y + 10.0, legend.high_caption),
        (legend.y + legend.height, legend.low_caption),
    ];
    for (y, caption) in captions {
        painter.text(
            to_screen(caption_x, y),
            Align2::LEFT_BOTTOM,
            caption,
            font.clone(),
            UI_CONFIG.colors.legend_caption,
        );
    }
}
