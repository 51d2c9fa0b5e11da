//! Force layout configuration

pub struct LayoutConfig {
    /// Only this many leading records of a file are ever plotted
    pub max_tweets: usize,
    /// Fixed tick budget. The simulation never stops early
    pub tick_count: usize,
    /// Pull toward the horizontal centre of the chart
    pub x_strength: f64,
    /// Pull toward the record's month band
    pub y_strength: f64,
    /// Minimum centre-to-centre half distance between two circles (circle radius + margin)
    pub collide_radius: f64,
    pub collide_strength: f64,
    pub alpha_start: f64,
    pub alpha_min: f64,
    pub alpha_target: f64,
    /// Fraction of velocity lost per tick
    pub velocity_decay: f64,
    /// Initial phyllotaxis spiral spacing
    pub initial_radius: f64,
}

impl LayoutConfig {
    /// Per-tick decay that takes alpha from `alpha_start` to `alpha_min` in `tick_count` ticks.
    pub fn alpha_decay(&self) -> f64 {
        1.0 - self.alpha_min.powf(1.0 / self.tick_count as f64)
    }
}

pub const LAYOUT_CONFIG: LayoutConfig = LayoutConfig {
    max_tweets: 300,
    tick_count: 300,
    x_strength: 0.1,
    y_strength: 4.0,
    collide_radius: 5.0,
    collide_strength: 1.0,
    alpha_start: 1.0,
    alpha_min: 0.001,
    alpha_target: 0.0,
    velocity_decay: 0.4,
    initial_radius: 10.0,
};
