mod axis_geometry;
mod config;
mod engine;

pub use axis_geometry::build_axis_geometry;
pub use config::{Align, AxisNames, ChartOptions, DEFAULT_POINT_COLOUR};
pub use engine::{ChartEngine, MoveOutcome};
