use scatter3d_rs::api::{Align, ChartOptions, build_axis_geometry};
use scatter3d_rs::core::{Axis, AxisTicks, Scales, TickVec};
use scatter3d_rs::render::{ActorKey, AxisLineKind, RenderObject};

fn unit_ticks() -> AxisTicks {
    AxisTicks {
        x: TickVec::from_slice(&[0.0, 1.0]),
        y: TickVec::from_slice(&[0.0, 1.0]),
        z: TickVec::from_slice(&[0.0, 1.0]),
    }
}

#[test]
fn geometry_counts_follow_tick_counts() {
    let objects = build_axis_geometry(&unit_ticks(), Scales::identity(), &ChartOptions::default());

    // Per plane: one gridline per tick of its two axes plus the main line.
    let lines = objects
        .iter()
        .filter(|(_, object)| matches!(object, RenderObject::AxisLine { .. }))
        .count();
    let labels = objects
        .iter()
        .filter(|(_, object)| matches!(object, RenderObject::TickLabel { .. }))
        .count();
    assert_eq!(lines, 15);
    assert_eq!(labels, 6);
}

#[test]
fn exactly_three_main_axis_lines_carry_chart_styling() {
    let options = ChartOptions::default();
    let objects = build_axis_geometry(&unit_ticks(), Scales::identity(), &options);

    let mut main = 0;
    for (_, object) in &objects {
        let RenderObject::AxisLine {
            kind,
            opacity,
            line_width,
            colour,
            ..
        } = object
        else {
            continue;
        };
        assert_eq!(colour, &options.colour);
        match kind {
            AxisLineKind::Axis => {
                assert_eq!(*opacity, options.opacity);
                assert_eq!(*line_width, options.line_width);
                main += 1;
            }
            AxisLineKind::Grid => {
                assert_eq!(*opacity, 0.2);
                assert_eq!(*line_width, 0.5);
            }
        }
    }
    assert_eq!(main, 3);
}

#[test]
fn tick_labels_carry_unscaled_values_at_scaled_positions() {
    let scales = Scales {
        x: 100.0,
        y: 1.0,
        z: 1.0,
    };
    let objects = build_axis_geometry(&unit_ticks(), scales, &ChartOptions::default());

    let x_labels: Vec<_> = objects
        .iter()
        .filter_map(|(key, object)| match (key, object) {
            (
                ActorKey::TickLabel { axis: Axis::X, .. },
                RenderObject::TickLabel {
                    position, value, ..
                },
            ) => Some((*value, position.x)),
            _ => None,
        })
        .collect();

    assert_eq!(x_labels, vec![(0.0, 0.0), (1.0, 100.0)]);
}

#[test]
fn disabling_labels_drops_only_tick_labels() {
    let options = ChartOptions {
        labels_enabled: false,
        ..ChartOptions::default()
    };
    let objects = build_axis_geometry(&unit_ticks(), Scales::identity(), &options);

    assert_eq!(objects.len(), 15);
    assert!(
        objects
            .iter()
            .all(|(_, object)| matches!(object, RenderObject::AxisLine { .. }))
    );
}

#[test]
fn edge_alignment_moves_planes_to_the_tick_extremes() {
    let ticks = AxisTicks {
        x: TickVec::from_slice(&[-1.0, 1.0]),
        y: TickVec::from_slice(&[-1.0, 1.0]),
        z: TickVec::from_slice(&[-1.0, 1.0]),
    };

    let centred = build_axis_geometry(&ticks, Scales::identity(), &ChartOptions::default());
    let edged = build_axis_geometry(
        &ticks,
        Scales::identity(),
        &ChartOptions {
            align: Align::Edge,
            ..ChartOptions::default()
        },
    );

    let x_label_y = |objects: &[(ActorKey, RenderObject)]| -> f64 {
        objects
            .iter()
            .find_map(|(key, object)| match (key, object) {
                (
                    ActorKey::TickLabel { axis: Axis::X, .. },
                    RenderObject::TickLabel { position, .. },
                ) => Some(position.y),
                _ => None,
            })
            .expect("x tick label")
    };

    // Centred planes hang labels off the origin; edge planes off the first tick.
    assert_eq!(x_label_y(&centred), -15.0);
    assert_eq!(x_label_y(&edged), -16.0);
}

#[test]
fn missing_ticks_on_any_axis_yield_no_geometry() {
    let ticks = AxisTicks {
        x: TickVec::from_slice(&[0.0, 1.0]),
        y: TickVec::new(),
        z: TickVec::from_slice(&[0.0, 1.0]),
    };
    let objects = build_axis_geometry(&ticks, Scales::identity(), &ChartOptions::default());
    assert!(objects.is_empty());
}
