pub mod axis_range;
pub mod registry;
pub mod series;
pub mod ticks;
pub mod types;

pub use axis_range::{AxisRange, AxisRangeTracker, Scales};
pub use registry::{SeriesDescriptor, SeriesRegistry};
pub use series::{Point, PointDescriptor, PointOptions, PointPatch, PointStore, SeriesBounds};
pub use ticks::{AxisTicks, TickVec, find_zeros, generate_ticks, round_to_two_significant};
pub use types::{Axis, DisplayExtents, Position3};
