//! Axis geometry: ticks and scales translated into tagged render objects.
//!
//! Deterministic and side-effect free so both the engine and tests consume
//! the exact same geometry output. Each of the three axis planes carries a
//! gridline mesh, a main axis line, and the tick labels of its primary axis.

use crate::api::config::{Align, ChartOptions};
use crate::core::{Axis, AxisTicks, Position3, Scales};
use crate::render::{ActorKey, AxisLineKind, RenderObject};

pub(crate) const GRID_OPACITY: f64 = 0.2;
pub(crate) const GRID_LINE_WIDTH: f64 = 0.5;
/// Offset of tick labels from their axis line, in display units.
pub(crate) const TICK_LABEL_OFFSET: f64 = 15.0;

struct GeometryBuilder<'a> {
    options: &'a ChartOptions,
    objects: Vec<(ActorKey, RenderObject)>,
    line_index: usize,
}

impl GeometryBuilder<'_> {
    fn grid_line(&mut self, from: Position3, to: Position3) {
        self.line(from, to, AxisLineKind::Grid, GRID_OPACITY, GRID_LINE_WIDTH);
    }

    fn axis_line(&mut self, from: Position3, to: Position3) {
        self.line(
            from,
            to,
            AxisLineKind::Axis,
            self.options.opacity,
            self.options.line_width,
        );
    }

    fn line(
        &mut self,
        from: Position3,
        to: Position3,
        kind: AxisLineKind,
        opacity: f64,
        line_width: f64,
    ) {
        self.objects.push((
            ActorKey::AxisLine {
                index: self.line_index,
            },
            RenderObject::AxisLine {
                from,
                to,
                kind,
                colour: self.options.colour.clone(),
                opacity,
                line_width,
            },
        ));
        self.line_index += 1;
    }

    fn tick_label(&mut self, axis: Axis, index: usize, value: f64, position: Position3) {
        if !self.options.labels_enabled {
            return;
        }
        self.objects.push((
            ActorKey::TickLabel { axis, index },
            RenderObject::TickLabel {
                position,
                value,
                colour: self.options.label_colour.clone(),
            },
        ));
    }
}

/// Builds the full axis geometry for the given ticks and scale factors.
///
/// Returns an empty list when any axis has no ticks; the engine never
/// produces that state, but partial inputs must not panic.
#[must_use]
pub fn build_axis_geometry(
    ticks: &AxisTicks,
    scales: Scales,
    options: &ChartOptions,
) -> Vec<(ActorKey, RenderObject)> {
    let sx: Vec<f64> = ticks.x.iter().map(|t| t * scales.x).collect();
    let sy: Vec<f64> = ticks.y.iter().map(|t| t * scales.y).collect();
    let sz: Vec<f64> = ticks.z.iter().map(|t| t * scales.z).collect();

    let (Some((&x_first, &x_last)), Some((&y_first, &y_last)), Some((&z_first, &z_last))) = (
        sx.first().zip(sx.last()),
        sy.first().zip(sy.last()),
        sz.first().zip(sz.last()),
    ) else {
        return Vec::new();
    };

    let edge = options.align == Align::Edge;
    let mut builder = GeometryBuilder {
        options,
        objects: Vec::new(),
        line_index: 0,
    };

    // XZ plane: gridlines over x/z, x tick labels, main x axis line.
    let align_y = if edge { y_first } else { 0.0 };
    let align_z = if edge { z_last } else { 0.0 };
    for &x in &sx {
        builder.grid_line(
            Position3::new(x, align_y, z_last),
            Position3::new(x, align_y, z_first),
        );
    }
    for &z in &sz {
        builder.grid_line(
            Position3::new(x_last, align_y, z),
            Position3::new(x_first, align_y, z),
        );
    }
    for (index, (&x, &value)) in sx.iter().zip(ticks.x.iter()).enumerate() {
        builder.tick_label(
            Axis::X,
            index,
            value,
            Position3::new(x, align_y - TICK_LABEL_OFFSET, align_z),
        );
    }
    builder.axis_line(
        Position3::new(x_first, align_y, align_z),
        Position3::new(x_last, align_y, align_z),
    );

    // XY plane: gridlines over x/y, y tick labels, main y axis line.
    let align_z = if edge { z_first } else { 0.0 };
    let align_x = if edge { x_first } else { 0.0 };
    for &y in &sy {
        builder.grid_line(
            Position3::new(x_last, y, align_z),
            Position3::new(x_first, y, align_z),
        );
    }
    for &x in &sx {
        builder.grid_line(
            Position3::new(x, y_last, align_z),
            Position3::new(x, y_first, align_z),
        );
    }
    for (index, (&y, &value)) in sy.iter().zip(ticks.y.iter()).enumerate() {
        builder.tick_label(
            Axis::Y,
            index,
            value,
            Position3::new(align_x + TICK_LABEL_OFFSET, y, align_z),
        );
    }
    builder.axis_line(
        Position3::new(align_x, y_first, align_z),
        Position3::new(align_x, y_last, align_z),
    );

    // ZY plane: gridlines over z/y, z tick labels, main z axis line.
    let align_x = if edge { x_first } else { 0.0 };
    let align_y = if edge { y_first } else { 0.0 };
    for &z in &sz {
        builder.grid_line(
            Position3::new(align_x, y_last, z),
            Position3::new(align_x, y_first, z),
        );
    }
    for &y in &sy {
        builder.grid_line(
            Position3::new(align_x, y, z_last),
            Position3::new(align_x, y, z_first),
        );
    }
    for (index, (&z, &value)) in sz.iter().zip(ticks.z.iter()).enumerate() {
        builder.tick_label(
            Axis::Z,
            index,
            value,
            Position3::new(align_x, align_y - TICK_LABEL_OFFSET, z),
        );
    }
    builder.axis_line(
        Position3::new(align_x, align_y, z_first),
        Position3::new(align_x, align_y, z_last),
    );

    builder.objects
}
