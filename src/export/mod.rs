//! Export generators for colorize runs.

pub mod legend;

pub use legend::generate_color_legend;
