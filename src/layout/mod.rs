// Force-directed placement of tweets into month bands
pub mod bands;
pub mod forces;
pub mod simulation;

// Re-export key types for convenience
pub use bands::MonthBands;
pub use forces::{ForceCollide, ForceX, ForceY};
pub use simulation::{Force, Node, Simulation};
