use serde::{Deserialize, Serialize};

/// One of the three chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// A position in 3D space, either logical (data units) or display
/// (scene units) depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[must_use]
    pub fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Target display size of the chart volume, in scene units per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayExtents {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for DisplayExtents {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            depth: 800.0,
        }
    }
}

impl DisplayExtents {
    #[must_use]
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|extent| extent.is_finite() && *extent > 0.0)
    }

    /// Extent along one axis: width maps to X, height to Y, depth to Z.
    #[must_use]
    pub fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
        }
    }
}
