//! Watermark axis bounds and scale derivation.

use serde::{Deserialize, Serialize};

use crate::core::series::SeriesBounds;
use crate::core::types::{Axis, DisplayExtents, Position3};
use crate::error::{ChartError, ChartResult};

/// Aggregate bounds of one axis.
///
/// Both edges are watermarks seeded at zero: a new value only ever widens
/// the range, and removing the point that set an edge does not shrink it.
/// An axis whose data is entirely positive therefore keeps `min == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    fn widen(&mut self, value: f64) {
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }
}

/// Per-axis scale factors mapping logical coordinates to display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Scales {
    /// Unit scales, the state of a chart before its first derivation pass.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }

    #[must_use]
    pub fn factor(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Maps a logical position to its display position.
    #[must_use]
    pub fn apply(self, logical: Position3) -> Position3 {
        Position3::new(logical.x * self.x, logical.y * self.y, logical.z * self.z)
    }
}

impl Default for Scales {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tracks running min/max over the three axes and derives scale factors
/// from target display extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRangeTracker {
    x: AxisRange,
    y: AxisRange,
    z: AxisRange,
}

impl AxisRangeTracker {
    /// Widens the axis bounds to include `value`. Never narrows.
    /// Non-finite values are ignored.
    pub fn update(&mut self, axis: Axis, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.range_mut(axis).widen(value);
    }

    /// Folds a series bounding box into the aggregate bounds.
    pub fn fold_bounds(&mut self, bounds: &SeriesBounds) {
        for axis in Axis::ALL {
            self.update(axis, bounds.min(axis));
            self.update(axis, bounds.max(axis));
        }
    }

    #[must_use]
    pub fn range(&self, axis: Axis) -> AxisRange {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Derives the scale factor for one axis: `extent / (max - min)`, with a
    /// 1-unit span substituted when the bounds are degenerate.
    pub fn derive_scale(&self, axis: Axis, extent: f64) -> ChartResult<f64> {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "display extent must be finite and > 0, got {extent}"
            )));
        }

        let span = self.range(axis).span();
        let divisor = if span == 0.0 { 1.0 } else { span };
        Ok(extent / divisor)
    }

    /// Derives all three scale factors in one pass. Bounds must already
    /// reflect every point and tick extreme of the current rebuild.
    pub fn derive_scales(&self, extents: DisplayExtents) -> ChartResult<Scales> {
        Ok(Scales {
            x: self.derive_scale(Axis::X, extents.width)?,
            y: self.derive_scale(Axis::Y, extents.height)?,
            z: self.derive_scale(Axis::Z, extents.depth)?,
        })
    }

    fn range_mut(&mut self, axis: Axis) -> &mut AxisRange {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}
