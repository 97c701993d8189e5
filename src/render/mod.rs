mod null_renderer;

pub use null_renderer::NullRenderer;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::core::{Axis, Position3};
use crate::error::ChartResult;

/// Composite key identifying an actor owned by the rendering collaborator.
///
/// Point actors are keyed by `(series id, point id)` directly; tick labels
/// and axis lines by their axis/index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActorKey {
    Point { series: String, point: String },
    TickLabel { axis: Axis, index: usize },
    AxisLine { index: usize },
}

/// Line role within the axis geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLineKind {
    /// Faint gridline on one of the three axis planes.
    Grid,
    /// Main axis line.
    Axis,
}

/// Fully materialized description of one renderable object.
///
/// Backends dispatch on the variant; the engine never reaches past this
/// boundary into scene-graph or DOM concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderObject {
    Point {
        position: Position3,
        colour: String,
        /// Label text when labels are enabled for the point.
        label: Option<String>,
    },
    TickLabel {
        position: Position3,
        value: f64,
        colour: String,
    },
    AxisLine {
        from: Position3,
        to: Position3,
        kind: AxisLineKind,
        colour: String,
        opacity: f64,
        line_width: f64,
    },
}

/// Contract implemented by any rendering backend.
///
/// The engine pushes display-space positions through this trait and holds
/// opaque handles; drawing code stays isolated from chart domain logic.
pub trait Renderer {
    type Handle: std::fmt::Debug;

    fn create_actor(&mut self, object: &RenderObject) -> ChartResult<Self::Handle>;

    fn set_actor_position(&mut self, handle: &Self::Handle, position: Position3)
    -> ChartResult<()>;

    fn remove_actor(&mut self, handle: Self::Handle) -> ChartResult<()>;

    /// Starts an animated move toward `target`. A second animation on the
    /// same actor supersedes the first.
    fn animate_actor_position(
        &mut self,
        handle: &Self::Handle,
        target: Position3,
        duration: Duration,
        easing: Easing,
    ) -> ChartResult<()>;
}
