use crate::layout::simulation::{Force, Lcg, Node};

/// Pulls every node toward a fixed x, scaled by alpha.
pub struct ForceX {
    target: f64,
    strength: f64,
}

impl ForceX {
    pub fn new(target: f64, strength: f64) -> Self {
        Self { target, strength }
    }
}

impl Force for ForceX {
    fn apply(&mut self, nodes: &mut [Node], alpha: f64, _random: &mut Lcg) {
        for node in nodes {
            node.vx += (self.target - node.x) * self.strength * alpha;
        }
    }
}

/// Pulls each node toward its own y target, scaled by alpha.
/// `targets[i]` belongs to node `i`.
pub struct ForceY {
    targets: Vec<f64>,
    strength: f64,
}

impl ForceY {
    pub fn new(targets: Vec<f64>, strength: f64) -> Self {
        Self { targets, strength }
    }
}

impl Force for ForceY {
    fn apply(&mut self, nodes: &mut [Node], alpha: f64, _random: &mut Lcg) {
        for (node, target) in nodes.iter_mut().zip(&self.targets) {
            node.vy += (target - node.y) * self.strength * alpha;
        }
    }
}

/// Treats nodes as circles of equal radius and pushes overlapping pairs apart.
///
/// Positions are predicted one tick ahead (`x + vx`). Each overlapping pair is
/// visited once and the correction is shared equally. Not scaled by alpha.
pub struct ForceCollide {
    radius: f64,
    strength: f64,
}

impl ForceCollide {
    pub fn new(radius: f64, strength: f64) -> Self {
        Self { radius, strength }
    }
}

impl Force for ForceCollide {
    fn apply(&mut self, nodes: &mut [Node], _alpha: f64, random: &mut Lcg) {
        let r = self.radius * 2.0;
        let r2 = self.radius * self.radius;
        let share = r2 / (r2 + r2);

        for i in 0..nodes.len() {
            let (head, tail) = nodes.split_at_mut(i + 1);
            let node = &mut head[i];
            let xi = node.x + node.vx;
            let yi = node.y + node.vy;

            for other in tail.iter_mut() {
                let mut x = xi - other.x - other.vx;
                let mut y = yi - other.y - other.vy;
                let mut l = x * x + y * y;
                if l >= r * r {
                    continue;
                }

                if x == 0.0 {
                    x = random.jiggle();
                    l += x * x;
                }
                if y == 0.0 {
                    y = random.jiggle();
                    l += y * y;
                }

                let distance = l.sqrt();
                let k = (r - distance) / distance * self.strength;
                x *= k;
                y *= k;

                node.vx += x * share;
                node.vy += y * share;
                other.vx -= x * (1.0 - share);
                other.vy -= y * (1.0 - share);
            }
        }
    }
}
