// Static chart export
pub mod svg;

pub use svg::{render_svg, write_svg};
