use crate::config::{LAYOUT_CONFIG, PLOT_CONFIG};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::color_mode::ColorMode;
use crate::domain::month::CanonicalMonth;
use crate::domain::tweet::{Tweet, TweetDataset, TweetId};
use crate::layout::{ForceCollide, ForceX, ForceY, MonthBands, Simulation};
use crate::models::color_scale::{ColorScale, GradientStop, Rgb8};
#[cfg(debug_assertions)]
use crate::utils::app_time::now;

/// A tweet frozen at its laid-out position. Coordinates are chart pixels, y down.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTweet {
    pub id: TweetId,
    pub x: f64,
    pub y: f64,
    pub fill: Rgb8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthLabel {
    pub month: CanonicalMonth,
    pub x: f64,
    pub y: f64,
}

/// Vertical gradient bar near the top-right corner. `x`/`y` is its top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendModel {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stops: Vec<GradientStop>,
    pub high_caption: &'static str,
    pub low_caption: &'static str,
}

/// Everything needed to draw one chart, for one dataset and colour mode.
#[derive(Clone, Debug)]
pub struct ChartModel {
    pub width: f64,
    pub height: f64,
    pub color_mode: ColorMode,
    pub generation: u64,
    pub circles: Vec<PlacedTweet>,
    pub month_labels: Vec<MonthLabel>,
    pub legend: LegendModel,
    /// Records within the first `max_tweets` that have no plottable month
    pub skipped: usize,
}

impl ChartModel {
    /// Truncates, bands, colours and lays out the dataset.
    ///
    /// The force simulation always runs the full tick budget, so the same
    /// dataset yields the same positions whatever the colour mode.
    pub fn build(dataset: &TweetDataset, color_mode: ColorMode) -> Self {
        #[cfg(debug_assertions)]
        let started = now();

        let width = PLOT_CONFIG.chart_width;
        let height = PLOT_CONFIG.chart_height;

        let visible: Vec<(TweetId, &Tweet)> = dataset.visible(LAYOUT_CONFIG.max_tweets).collect();
        let bands = MonthBands::from_tweets(visible.iter().map(|(_, tweet)| *tweet), height);

        let plotted: Vec<(TweetId, &Tweet, f64)> = visible
            .iter()
            .filter_map(|&(id, tweet)| bands.center_for(tweet).map(|y| (id, tweet, y)))
            .collect();
        let skipped = visible.len() - plotted.len();
        if skipped > 0 {
            log::debug!("{} tweets have no plottable month and are not drawn", skipped);
        }

        let targets: Vec<f64> = plotted.iter().map(|&(_, _, y)| y).collect();
        let mut simulation = Simulation::new(plotted.len(), &LAYOUT_CONFIG)
            .with_force(ForceX::new(width / 2.0, LAYOUT_CONFIG.x_strength))
            .with_force(ForceY::new(targets, LAYOUT_CONFIG.y_strength))
            .with_force(ForceCollide::new(
                LAYOUT_CONFIG.collide_radius,
                LAYOUT_CONFIG.collide_strength,
            ));
        simulation.run(LAYOUT_CONFIG.tick_count);

        let scale = ColorScale::for_mode(color_mode);
        let circles = plotted
            .iter()
            .zip(simulation.into_nodes())
            .map(|(&(id, tweet, _), node)| PlacedTweet {
                id,
                x: node.x,
                y: node.y,
                fill: scale.color_for(tweet),
            })
            .collect::<Vec<_>>();

        let month_labels = bands
            .iter()
            .map(|(month, y)| MonthLabel {
                month,
                x: PLOT_CONFIG.month_label_x,
                y,
            })
            .collect();

        let legend = LegendModel {
            x: width - PLOT_CONFIG.legend_right_offset,
            y: height / 2.0 - PLOT_CONFIG.legend_height / 2.0,
            width: PLOT_CONFIG.legend_width,
            height: PLOT_CONFIG.legend_height,
            stops: scale.legend_stops(),
            high_caption: color_mode.high_caption(),
            low_caption: color_mode.low_caption(),
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_layout_timing {
            log::info!(
                "Laid out {} tweets ({} skipped) in {:?}",
                circles.len(),
                skipped,
                started.elapsed()
            );
        }

        Self {
            width,
            height,
            color_mode,
            generation: dataset.generation,
            circles,
            month_labels,
            legend,
            skipped,
        }
    }

    /// The top-most circle (last drawn) whose centre is within `radius` of the point.
    pub fn hit_test(&self, x: f64, y: f64, radius: f64) -> Option<TweetId> {
        self.circles
            .iter()
            .rev()
            .find(|c| (c.x - x).hypot(c.y - y) <= radius)
            .map(|c| c.id)
    }
}
