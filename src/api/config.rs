use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default radial-gradient point colour, cycled when a series carries none.
pub const DEFAULT_POINT_COLOUR: &str = "radial-gradient(rgba(255, 255, 255, 1) 5%, rgba(70,150,255,.7) 20%, rgba(50,100,255,0) 60%)";

/// Placement of the axis planes relative to the chart volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    /// Axis planes cross at the origin.
    #[default]
    Center,
    /// Axis planes sit at the outer edge of the tick range.
    Edge,
}

/// Display names for the three axes, used for tick and tooltip labeling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisNames {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Default for AxisNames {
    fn default() -> Self {
        Self {
            x: "x".to_owned(),
            y: "y".to_owned(),
            z: "z".to_owned(),
        }
    }
}

/// Chart-wide presentation options.
///
/// An immutable per-instance value: defaults are applied by value at
/// construction and never shared between chart instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Series colour palette, cycled by series index.
    pub colours: Vec<String>,
    /// Axis and grid line colour.
    pub colour: String,
    /// Main axis line opacity.
    pub opacity: f64,
    /// Main axis line width.
    pub line_width: f64,
    pub align: Align,
    pub labels_enabled: bool,
    pub label_colour: String,
    pub axis_names: AxisNames,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            colours: vec![DEFAULT_POINT_COLOUR.to_owned()],
            colour: "#bbbbbb".to_owned(),
            opacity: 1.0,
            line_width: 2.0,
            align: Align::Center,
            labels_enabled: true,
            label_colour: "white".to_owned(),
            axis_names: AxisNames::default(),
        }
    }
}

impl ChartOptions {
    pub(crate) fn validate(&self) -> ChartResult<()> {
        if self.colours.is_empty() {
            return Err(ChartError::InvalidData(
                "chart colour palette must not be empty".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(format!(
                "axis opacity must be within [0, 1], got {}",
                self.opacity
            )));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "axis line width must be finite and > 0, got {}",
                self.line_width
            )));
        }
        Ok(())
    }

    /// Palette colour for the series at `index`, cycling over the palette.
    #[must_use]
    pub fn series_colour(&self, index: usize) -> &str {
        &self.colours[index % self.colours.len()]
    }
}
