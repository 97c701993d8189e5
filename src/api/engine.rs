use crate::animation::{Easing, POINT_MOVE_DURATION};
use crate::api::axis_geometry::build_axis_geometry;
use crate::api::config::ChartOptions;
use crate::core::{
    Axis, AxisRange, AxisRangeTracker, AxisTicks, DisplayExtents, Point, PointDescriptor,
    PointPatch, PointStore, Position3, Scales, SeriesDescriptor, SeriesRegistry, generate_ticks,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ActorKey, RenderObject, Renderer};

use indexmap::IndexMap;

/// Outcome of a point move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A coordinate was absent; the point and its actor were deleted.
    Removed,
    /// The series or point does not exist; nothing was mutated.
    NotFound,
    /// Coordinates were updated and the actor repositioned.
    Moved,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series registry, axis bounds, ticks, and scale
/// factors, and keeps the rendering collaborator's actors consistent with
/// every mutation.
///
/// Construction is the one-time, full rebuild pass: every point is scaled
/// against bounds widened by both data and tick extremes. The incremental
/// mutations (`add_series`, `add_point`, `move_point`) deliberately reuse
/// the CURRENT scale factors and never rescale existing points; callers that
/// want a globally consistent rescale use [`ChartEngine::rescale`].
#[derive(Debug)]
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    options: ChartOptions,
    extents: DisplayExtents,
    registry: SeriesRegistry,
    ranges: AxisRangeTracker,
    scales: Scales,
    ticks: AxisTicks,
    actors: IndexMap<ActorKey, R::Handle>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the chart from its initial data in one non-incremental pass.
    ///
    /// Per-series failures in `data` (duplicate ids, bad points) are logged
    /// and skipped; sibling series still build. Structural failures — invalid
    /// options or extents, a degenerate tick range — abort construction.
    pub fn new(
        renderer: R,
        data: Vec<SeriesDescriptor>,
        options: ChartOptions,
        extents: DisplayExtents,
    ) -> ChartResult<Self> {
        options.validate()?;
        if !extents.is_valid() {
            return Err(ChartError::InvalidData(format!(
                "display extents must be finite and > 0, got {extents:?}"
            )));
        }

        let mut registry = SeriesRegistry::default();
        let mut ranges = AxisRangeTracker::default();
        for descriptor in data {
            let colour = options.series_colour(registry.len()).to_owned();
            let series_id = descriptor.id.clone();
            match registry.add_series(descriptor, &colour) {
                Ok(store) => {
                    let bounds = *store.bounds();
                    ranges.fold_bounds(&bounds);
                }
                Err(error) => tracing::warn!(series = %series_id, %error, "skipping series"),
            }
        }

        let ticks = AxisTicks {
            x: generate_ticks(ranges.range(Axis::X).min, ranges.range(Axis::X).max)?,
            y: generate_ticks(ranges.range(Axis::Y).min, ranges.range(Axis::Y).max)?,
            z: generate_ticks(ranges.range(Axis::Z).min, ranges.range(Axis::Z).max)?,
        };

        // Ticks are generated from rounded bounds and can reach past the raw
        // data; the outermost tick must be inside the scaled volume.
        for axis in Axis::ALL {
            let axis_ticks = ticks.ticks(axis);
            if let (Some(first), Some(last)) = (axis_ticks.first(), axis_ticks.last()) {
                ranges.update(axis, *first);
                ranges.update(axis, *last);
            }
        }

        let scales = ranges.derive_scales(extents)?;

        let mut engine = Self {
            renderer,
            options,
            extents,
            registry,
            ranges,
            scales,
            ticks,
            actors: IndexMap::new(),
        };

        let series_ids: Vec<String> = engine.registry.ids().map(str::to_owned).collect();
        for series_id in &series_ids {
            engine.project_and_create_actors(series_id)?;
        }
        engine.build_axis_actors()?;

        Ok(engine)
    }

    /// Incorporates a new series at the CURRENT scale factors.
    ///
    /// Aggregate bounds are widened but no rescale happens: existing points
    /// keep their display coordinates until the next [`ChartEngine::rescale`].
    /// A duplicate series id fails with `DuplicateId` and leaves the chart
    /// unchanged.
    pub fn add_series(&mut self, descriptor: SeriesDescriptor) -> ChartResult<()> {
        let colour = self.options.series_colour(self.registry.len()).to_owned();
        let series_id = descriptor.id.clone();
        let bounds = {
            let store = self.registry.add_series(descriptor, &colour)?;
            *store.bounds()
        };
        self.ranges.fold_bounds(&bounds);
        self.project_and_create_actors(&series_id)
    }

    /// Adds one point to an existing series, scaled at the current factors.
    ///
    /// An unknown series id is a logged no-op; a duplicate point id fails
    /// with `DuplicateId`.
    pub fn add_point(&mut self, series: &str, descriptor: PointDescriptor) -> ChartResult<()> {
        let (x, y, z) = (descriptor.x, descriptor.y, descriptor.z);
        let point_id = descriptor.id.clone();

        let Some(store) = self.registry.series_mut(series) else {
            tracing::warn!(series, point = %point_id, "ignoring point for unknown series");
            return Ok(());
        };

        let display = self.scales.apply(Position3::new(x, y, z));
        let point = store.add_point(descriptor)?;
        point.display = display;
        let object = RenderObject::Point {
            position: display,
            colour: point.colour.clone(),
            label: point.options.label_enabled.then(|| point_id.clone()),
        };

        let handle = self.renderer.create_actor(&object)?;
        self.actors.insert(
            ActorKey::Point {
                series: series.to_owned(),
                point: point_id,
            },
            handle,
        );

        for (axis, value) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            self.ranges.update(axis, value);
        }
        Ok(())
    }

    /// Moves a point given logical coordinates.
    ///
    /// Any absent coordinate deletes the point and its actor (`Removed`).
    /// A missing series or point mutates nothing (`NotFound`). Otherwise the
    /// point is updated, its display position recomputed at the current
    /// scales, and the actor moved — animated over the fixed move duration
    /// when `animate` is set, snapped otherwise (`Moved`).
    pub fn move_point(
        &mut self,
        series: &str,
        id: &str,
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
        animate: bool,
    ) -> ChartResult<MoveOutcome> {
        let Some(store) = self.registry.series_mut(series) else {
            tracing::warn!(series, point = id, "ignoring move for unknown series");
            return Ok(MoveOutcome::NotFound);
        };
        if store.point(id).is_none() {
            tracing::warn!(series, point = id, "missing point on move");
            return Ok(MoveOutcome::NotFound);
        }

        let (Some(x), Some(y), Some(z)) = (x, y, z) else {
            store.remove_points(&[id])?;
            self.remove_point_actor(series, id)?;
            return Ok(MoveOutcome::Removed);
        };
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "move target for point '{id}' must be finite, got ({x}, {y}, {z})"
            )));
        }

        let display = self.scales.apply(Position3::new(x, y, z));
        store.update_points(&[PointPatch::move_to(id, x, y, z)]);
        store.set_display(id, display);

        for (axis, value) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            self.ranges.update(axis, value);
        }

        let key = ActorKey::Point {
            series: series.to_owned(),
            point: id.to_owned(),
        };
        self.push_actor_position(&key, display, animate)?;
        Ok(MoveOutcome::Moved)
    }

    /// Moves a point given pre-scaled display coordinates, bypassing the
    /// logical-to-display transform. Outcome semantics match
    /// [`ChartEngine::move_point`]; logical coordinates and bounds are left
    /// untouched.
    pub fn move_coordinate(
        &mut self,
        series: &str,
        id: &str,
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
        animate: bool,
    ) -> ChartResult<MoveOutcome> {
        let Some(store) = self.registry.series_mut(series) else {
            tracing::warn!(series, point = id, "ignoring move for unknown series");
            return Ok(MoveOutcome::NotFound);
        };
        if store.point(id).is_none() {
            tracing::warn!(series, point = id, "missing point on move");
            return Ok(MoveOutcome::NotFound);
        }

        let (Some(x), Some(y), Some(z)) = (x, y, z) else {
            store.remove_points(&[id])?;
            self.remove_point_actor(series, id)?;
            return Ok(MoveOutcome::Removed);
        };
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "move target for point '{id}' must be finite, got ({x}, {y}, {z})"
            )));
        }

        let display = Position3::new(x, y, z);
        store.set_display(id, display);

        let key = ActorKey::Point {
            series: series.to_owned(),
            point: id.to_owned(),
        };
        self.push_actor_position(&key, display, animate)?;
        Ok(MoveOutcome::Moved)
    }

    /// Re-derives all scale factors from the unchanged aggregate bounds
    /// against new display extents, then pushes every point's recomputed
    /// display coordinate to its actor and rebuilds the axis geometry.
    pub fn rescale(&mut self, extents: DisplayExtents, animate: bool) -> ChartResult<()> {
        if !extents.is_valid() {
            return Err(ChartError::InvalidData(format!(
                "display extents must be finite and > 0, got {extents:?}"
            )));
        }

        self.extents = extents;
        self.scales = self.ranges.derive_scales(extents)?;
        tracing::debug!(
            scale_x = self.scales.x,
            scale_y = self.scales.y,
            scale_z = self.scales.z,
            "rescaled chart"
        );

        let scales = self.scales;
        let moves: Vec<(String, String, Position3)> = self
            .registry
            .iter()
            .flat_map(|(series_id, store)| {
                store.points().map(move |point| {
                    (
                        series_id.to_owned(),
                        point.id.clone(),
                        scales.apply(point.logical()),
                    )
                })
            })
            .collect();

        for (series, point, display) in moves {
            self.move_coordinate(
                &series,
                &point,
                Some(display.x),
                Some(display.y),
                Some(display.z),
                animate,
            )?;
        }

        self.rebuild_axis_actors()
    }

    /// Toggles selection state for the listed points. Unknown series or
    /// point ids are logged no-ops.
    pub fn select_points(&mut self, series: &str, ids: &[&str]) {
        match self.registry.series_mut(series) {
            Some(store) => store.select_points(ids),
            None => tracing::warn!(series, "ignoring selection for unknown series"),
        }
    }

    /// Removes one point and its actor. A missing point is `NotFound`;
    /// an unknown series is a logged no-op.
    pub fn remove_point(&mut self, series: &str, id: &str) -> ChartResult<()> {
        let Some(store) = self.registry.series_mut(series) else {
            tracing::warn!(series, point = id, "ignoring removal for unknown series");
            return Ok(());
        };
        store.remove_points(&[id])?;
        self.remove_point_actor(series, id)
    }

    #[must_use]
    pub fn range(&self, axis: Axis) -> AxisRange {
        self.ranges.range(axis)
    }

    #[must_use]
    pub fn ticks(&self) -> &AxisTicks {
        &self.ticks
    }

    #[must_use]
    pub fn scales(&self) -> Scales {
        self.scales
    }

    #[must_use]
    pub fn extents(&self) -> DisplayExtents {
        self.extents
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn series(&self, id: &str) -> Option<&PointStore> {
        self.registry.series(id)
    }

    #[must_use]
    pub fn point(&self, series: &str, id: &str) -> Option<&Point> {
        self.registry.series(series).and_then(|s| s.point(id))
    }

    /// Handle of the actor backing one point, when both exist.
    #[must_use]
    pub fn point_actor(&self, series: &str, id: &str) -> Option<&R::Handle> {
        self.actors.get(&ActorKey::Point {
            series: series.to_owned(),
            point: id.to_owned(),
        })
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Applies the current scales to every point of one series and creates
    /// its actors.
    fn project_and_create_actors(&mut self, series_id: &str) -> ChartResult<()> {
        let scales = self.scales;
        let Some(store) = self.registry.series_mut(series_id) else {
            return Ok(());
        };

        for point in store.points_mut() {
            point.display = scales.apply(Position3::new(point.x, point.y, point.z));
            let object = RenderObject::Point {
                position: point.display,
                colour: point.colour.clone(),
                label: point.options.label_enabled.then(|| point.id.clone()),
            };
            let handle = self.renderer.create_actor(&object)?;
            self.actors.insert(
                ActorKey::Point {
                    series: series_id.to_owned(),
                    point: point.id.clone(),
                },
                handle,
            );
        }
        Ok(())
    }

    fn push_actor_position(
        &mut self,
        key: &ActorKey,
        target: Position3,
        animate: bool,
    ) -> ChartResult<()> {
        let Some(handle) = self.actors.get(key) else {
            tracing::warn!(?key, "no actor registered for position update");
            return Ok(());
        };

        if animate {
            self.renderer.animate_actor_position(
                handle,
                target,
                POINT_MOVE_DURATION,
                Easing::ExponentialInOut,
            )
        } else {
            self.renderer.set_actor_position(handle, target)
        }
    }

    fn remove_point_actor(&mut self, series: &str, point: &str) -> ChartResult<()> {
        let key = ActorKey::Point {
            series: series.to_owned(),
            point: point.to_owned(),
        };
        match self.actors.shift_remove(&key) {
            Some(handle) => self.renderer.remove_actor(handle),
            None => {
                tracing::warn!(series, point, "no actor registered for removed point");
                Ok(())
            }
        }
    }

    fn build_axis_actors(&mut self) -> ChartResult<()> {
        for (key, object) in build_axis_geometry(&self.ticks, self.scales, &self.options) {
            let handle = self.renderer.create_actor(&object)?;
            self.actors.insert(key, handle);
        }
        Ok(())
    }

    fn rebuild_axis_actors(&mut self) -> ChartResult<()> {
        let keys: Vec<ActorKey> = self
            .actors
            .keys()
            .filter(|key| !matches!(key, ActorKey::Point { .. }))
            .cloned()
            .collect();
        for key in keys {
            if let Some(handle) = self.actors.shift_remove(&key) {
                self.renderer.remove_actor(handle)?;
            }
        }
        self.build_axis_actors()
    }
}
