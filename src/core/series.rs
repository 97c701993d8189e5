//! Per-series point storage with watermark bounds tracking.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{Axis, Position3};
use crate::error::{ChartError, ChartResult};

/// Presentation flags recognized for a single point. Opaque to the scaling
/// core; the rendering collaborator decides what they mean visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointOptions {
    pub select_enabled: bool,
    pub label_enabled: bool,
    pub tooltip_enabled: bool,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            select_enabled: true,
            label_enabled: true,
            tooltip_enabled: true,
        }
    }
}

/// Caller-facing payload for one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDescriptor {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub options: Option<PointOptions>,
}

impl PointDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            z,
            colour: None,
            options: None,
        }
    }
}

/// Explicit partial update for one point.
///
/// An entry with any absent coordinate removes the point. Colour and options
/// are patched only when present; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointPatch {
    pub id: String,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub z: Option<f64>,
    #[serde(default)]
    pub colour: Option<String>,
    #[serde(default)]
    pub options: Option<PointOptions>,
}

impl PointPatch {
    #[must_use]
    pub fn move_to(id: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: id.into(),
            x: Some(x),
            y: Some(y),
            z: Some(z),
            colour: None,
            options: None,
        }
    }

    /// A patch that removes the point: all coordinates absent.
    #[must_use]
    pub fn remove(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// One stored point: logical coordinates, derived display coordinates, and
/// presentation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub display: Position3,
    pub colour: String,
    pub options: PointOptions,
    pub selected: bool,
}

impl Point {
    #[must_use]
    pub fn logical(&self) -> Position3 {
        Position3::new(self.x, self.y, self.z)
    }
}

/// Bounding box of one series.
///
/// Watermark semantics: edges are seeded at zero and only ever widen.
/// Removing the point that set an edge does not recompute it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl SeriesBounds {
    pub fn widen(&mut self, x: f64, y: f64, z: f64) {
        if x > self.max_x {
            self.max_x = x;
        }
        if x < self.min_x {
            self.min_x = x;
        }
        if y > self.max_y {
            self.max_y = y;
        }
        if y < self.min_y {
            self.min_y = y;
        }
        if z > self.max_z {
            self.max_z = z;
        }
        if z < self.min_z {
            self.min_z = z;
        }
    }

    #[must_use]
    pub fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.min_x,
            Axis::Y => self.min_y,
            Axis::Z => self.min_z,
        }
    }

    #[must_use]
    pub fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
            Axis::Z => self.max_z,
        }
    }
}

/// Insertion-ordered id-to-point map for one series.
#[derive(Debug, Clone)]
pub struct PointStore {
    id: String,
    colour: String,
    options: PointOptions,
    points: IndexMap<String, Point>,
    bounds: SeriesBounds,
}

impl PointStore {
    #[must_use]
    pub fn new(id: String, colour: String, options: PointOptions) -> Self {
        Self {
            id,
            colour,
            options,
            points: IndexMap::new(),
            bounds: SeriesBounds::default(),
        }
    }

    /// Inserts a new point. The point inherits the series colour and options
    /// unless the descriptor carries its own. Widens the series bounds.
    pub fn add_point(&mut self, descriptor: PointDescriptor) -> ChartResult<&mut Point> {
        let PointDescriptor {
            id,
            x,
            y,
            z,
            colour,
            options,
        } = descriptor;

        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "point '{id}' coordinates must be finite, got ({x}, {y}, {z})"
            )));
        }
        if self.points.contains_key(&id) {
            return Err(ChartError::DuplicateId { kind: "point", id });
        }

        self.bounds.widen(x, y, z);
        let point = Point {
            id: id.clone(),
            x,
            y,
            z,
            display: Position3::new(x, y, z),
            colour: colour.unwrap_or_else(|| self.colour.clone()),
            options: options.unwrap_or(self.options),
            selected: false,
        };
        Ok(self.points.entry(id).or_insert(point))
    }

    /// Batch insert. Per-point failures are logged and skipped so the rest
    /// of the batch still lands.
    pub fn build_points(&mut self, data: Vec<PointDescriptor>) {
        for descriptor in data {
            let point_id = descriptor.id.clone();
            if let Err(error) = self.add_point(descriptor) {
                tracing::warn!(series = %self.id, point = %point_id, %error, "skipping point");
            }
        }
    }

    /// Applies a batch of partial updates.
    ///
    /// Unknown ids are skipped. An entry missing any coordinate removes the
    /// point. Coordinate updates widen the series bounds; colour and options
    /// are overwritten only when present in the patch. Returns the number of
    /// entries that mutated the store.
    pub fn update_points(&mut self, patches: &[PointPatch]) -> usize {
        let mut applied = 0;

        for patch in patches {
            if !self.points.contains_key(&patch.id) {
                continue;
            }

            let (Some(x), Some(y), Some(z)) = (patch.x, patch.y, patch.z) else {
                self.points.shift_remove(&patch.id);
                applied += 1;
                continue;
            };

            if !(x.is_finite() && y.is_finite() && z.is_finite()) {
                tracing::warn!(series = %self.id, point = %patch.id, "ignoring non-finite patch");
                continue;
            }

            self.bounds.widen(x, y, z);
            if let Some(point) = self.points.get_mut(&patch.id) {
                point.x = x;
                point.y = y;
                point.z = z;
                if let Some(colour) = &patch.colour {
                    point.colour = colour.clone();
                }
                if let Some(options) = patch.options {
                    point.options = options;
                }
                applied += 1;
            }
        }

        applied
    }

    /// Removes every listed point that exists. A missing id is reported as
    /// `NotFound` only after the whole batch has been processed.
    pub fn remove_points(&mut self, ids: &[&str]) -> ChartResult<usize> {
        let mut removed = 0;
        let mut missing: Option<String> = None;

        for id in ids {
            if self.points.shift_remove(*id).is_some() {
                removed += 1;
            } else if missing.is_none() {
                missing = Some((*id).to_owned());
            }
        }

        match missing {
            Some(id) => Err(ChartError::NotFound { kind: "point", id }),
            None => Ok(removed),
        }
    }

    /// Toggles selection on each listed point, honoring `select_enabled`.
    /// Unknown ids are skipped.
    pub fn select_points(&mut self, ids: &[&str]) {
        for id in ids {
            match self.points.get_mut(*id) {
                Some(point) if point.options.select_enabled => point.selected = !point.selected,
                Some(_) => {}
                None => {
                    tracing::debug!(series = %self.id, point = *id, "ignoring selection for unknown point");
                }
            }
        }
    }

    pub(crate) fn set_display(&mut self, id: &str, display: Position3) -> bool {
        match self.points.get_mut(id) {
            Some(point) => {
                point.display = display;
                true
            }
            None => false,
        }
    }

    pub(crate) fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.points.values_mut()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn colour(&self) -> &str {
        &self.colour
    }

    #[must_use]
    pub fn bounds(&self) -> &SeriesBounds {
        &self.bounds
    }

    #[must_use]
    pub fn point(&self, id: &str) -> Option<&Point> {
        self.points.get(id)
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
