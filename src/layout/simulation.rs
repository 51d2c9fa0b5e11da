use std::f64::consts::PI;

use crate::config::LayoutConfig;

/// A simulated body. Velocities are per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// A force adjusts node velocities once per tick.
pub trait Force {
    fn apply(&mut self, nodes: &mut [Node], alpha: f64, random: &mut Lcg);
}

/// Fixed-seed linear congruential generator, so a given input always lays out the same way.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 1 << 32;

    pub fn new() -> Self {
        Self { state: 1 }
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (Self::A * self.state + Self::C) % Self::M;
        self.state as f64 / Self::M as f64
    }

    /// A tiny non-zero offset used to separate exactly coincident nodes.
    pub fn jiggle(&mut self) -> f64 {
        (self.next_f64() - 0.5) * 1e-6
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

/// Damped-velocity force simulation, stepped by hand.
///
/// Alpha ("temperature") decays geometrically every tick and scales the
/// positional forces, so the layout settles as the tick budget is spent.
/// There is no timer: the caller decides how many ticks to run.
pub struct Simulation {
    nodes: Vec<Node>,
    forces: Vec<Box<dyn Force>>,
    alpha: f64,
    alpha_decay: f64,
    alpha_target: f64,
    velocity_decay: f64,
    random: Lcg,
}

impl Simulation {
    /// Creates `node_count` nodes on a phyllotaxis spiral around the origin.
    pub fn new(node_count: usize, config: &LayoutConfig) -> Self {
        let initial_angle = PI * (3.0 - 5.0_f64.sqrt());
        let nodes = (0..node_count)
            .map(|i| {
                let radius = config.initial_radius * (0.5 + i as f64).sqrt();
                let angle = i as f64 * initial_angle;
                Node {
                    x: radius * angle.cos(),
                    y: radius * angle.sin(),
                    vx: 0.0,
                    vy: 0.0,
                }
            })
            .collect();

        Self {
            nodes,
            forces: Vec::new(),
            alpha: config.alpha_start,
            alpha_decay: config.alpha_decay(),
            alpha_target: config.alpha_target,
            velocity_decay: 1.0 - config.velocity_decay,
            random: Lcg::new(),
        }
    }

    /// Forces run in the order they were added.
    pub fn with_force(mut self, force: impl Force + 'static) -> Self {
        self.forces.push(Box::new(force));
        self
    }

    pub fn tick(&mut self) {
        self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;

        for force in &mut self.forces {
            force.apply(&mut self.nodes, self.alpha, &mut self.random);
        }

        for node in &mut self.nodes {
            node.vx *= self.velocity_decay;
            node.vy *= self.velocity_decay;
            node.x += node.vx;
            node.y += node.vy;
        }
    }

    /// Runs exactly `ticks` steps. No early stop on convergence.
    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LAYOUT_CONFIG;
    use crate::layout::forces::{ForceCollide, ForceX, ForceY};

    #[test]
    fn test_lcg_is_deterministic_and_bounded() {
        let mut a = Lcg::new();
        let mut b = Lcg::new();
        for _ in 0..1000 {
            let value = a.next_f64();
            assert_eq!(value, b.next_f64());
            assert!((0.0..1.0).contains(&value));
        }
        assert!(Lcg::new().jiggle().abs() <= 0.5e-6);
    }

    #[test]
    fn test_initial_spiral_has_distinct_positions() {
        let sim = Simulation::new(3, &LAYOUT_CONFIG);
        let nodes = &sim.nodes;
        assert!((nodes[0].x - 10.0 * 0.5_f64.sqrt()).abs() < 1e-9);
        assert_eq!(nodes[0].y, 0.0);
        assert_ne!(nodes[1], nodes[2]);
    }

    #[test]
    fn test_alpha_reaches_min_after_tick_budget() {
        let mut sim = Simulation::new(1, &LAYOUT_CONFIG);
        sim.run(LAYOUT_CONFIG.tick_count);
        assert!((sim.alpha - LAYOUT_CONFIG.alpha_min).abs() < 1e-6);
    }

    #[test]
    fn test_single_node_settles_on_targets() {
        let mut sim = Simulation::new(1, &LAYOUT_CONFIG)
            .with_force(ForceX::new(500.0, LAYOUT_CONFIG.x_strength))
            .with_force(ForceY::new(vec![250.0], LAYOUT_CONFIG.y_strength));
        sim.run(LAYOUT_CONFIG.tick_count);

        let node = sim.nodes[0];
        assert!((node.x - 500.0).abs() < 5.0, "x = {}", node.x);
        assert!((node.y - 250.0).abs() < 1.0, "y = {}", node.y);
    }

    #[test]
    fn test_collision_spreads_a_crowded_band() {
        let count = 20;
        let mut sim = Simulation::new(count, &LAYOUT_CONFIG)
            .with_force(ForceX::new(500.0, LAYOUT_CONFIG.x_strength))
            .with_force(ForceY::new(vec![250.0; count], LAYOUT_CONFIG.y_strength))
            .with_force(ForceCollide::new(LAYOUT_CONFIG.collide_radius, 1.0));
        sim.run(LAYOUT_CONFIG.tick_count);

        let nodes = &sim.nodes;
        let mut min_distance = f64::MAX;
        for i in 0..count {
            for j in (i + 1)..count {
                let distance = (nodes[i].x - nodes[j].x).hypot(nodes[i].y - nodes[j].y);
                min_distance = min_distance.min(distance);
            }
        }
        assert!(min_distance > 7.0, "closest pair only {min_distance} apart");
        assert!(nodes.iter().all(|n| n.x.is_finite() && n.y.is_finite()));
    }

    #[test]
    fn test_layout_is_repeatable() {
        let run = || {
            let mut sim = Simulation::new(30, &LAYOUT_CONFIG)
                .with_force(ForceX::new(500.0, 0.1))
                .with_force(ForceY::new(vec![100.0; 30], 4.0))
                .with_force(ForceCollide::new(5.0, 1.0));
            sim.run(50);
            sim.into_nodes()
        };
        assert_eq!(run(), run());
    }
}
