use std::time::Duration;

use approx::assert_relative_eq;

use scatter3d_rs::animation::{Easing, POINT_MOVE_DURATION, Tween};
use scatter3d_rs::core::Position3;
use scatter3d_rs::render::{NullRenderer, RenderObject, Renderer};

#[test]
fn easing_is_pinned_at_both_endpoints() {
    for easing in [Easing::Linear, Easing::ExponentialInOut] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        // Out-of-range progress clamps instead of extrapolating.
        assert_eq!(easing.apply(-1.0), 0.0);
        assert_eq!(easing.apply(2.0), 1.0);
    }
}

#[test]
fn exponential_in_out_crosses_half_at_midpoint() {
    assert_eq!(Easing::ExponentialInOut.apply(0.5), 0.5);
    // Slow start, fast middle.
    assert!(Easing::ExponentialInOut.apply(0.25) < 0.25);
    assert!(Easing::ExponentialInOut.apply(0.75) > 0.75);
}

#[test]
fn linear_easing_is_identity_on_progress() {
    for t in [0.1, 0.3, 0.6, 0.9] {
        assert_relative_eq!(Easing::Linear.apply(t), t, max_relative = 1e-15);
    }
}

#[test]
fn tween_steps_toward_its_target() {
    let mut tween = Tween::new(
        Position3::new(0.0, 0.0, 0.0),
        Position3::new(10.0, 20.0, 30.0),
        Duration::from_secs(1),
        Easing::Linear,
    );

    let quarter = tween.step(0.25);
    assert_relative_eq!(quarter.x, 2.5, max_relative = 1e-12);
    assert!(!tween.is_finished());

    let done = tween.step(0.75);
    assert_eq!(done, Position3::new(10.0, 20.0, 30.0));
    assert!(tween.is_finished());
}

#[test]
fn tween_clamps_oversized_steps_to_the_target() {
    let mut tween = Tween::new(
        Position3::new(0.0, 0.0, 0.0),
        Position3::new(1.0, 1.0, 1.0),
        POINT_MOVE_DURATION,
        Easing::ExponentialInOut,
    );

    let position = tween.step(10.0);
    assert_eq!(position, Position3::new(1.0, 1.0, 1.0));
    assert!(tween.is_finished());
}

#[test]
fn tween_ignores_non_positive_and_non_finite_steps() {
    let mut tween = Tween::new(
        Position3::new(0.0, 0.0, 0.0),
        Position3::new(10.0, 0.0, 0.0),
        Duration::from_secs(1),
        Easing::Linear,
    );

    let start = tween.position();
    assert_eq!(tween.step(0.0), start);
    assert_eq!(tween.step(-5.0), start);
    assert_eq!(tween.step(f64::NAN), start);
    assert!(!tween.is_finished());
}

#[test]
fn zero_duration_tween_is_immediately_finished() {
    let tween = Tween::new(
        Position3::new(0.0, 0.0, 0.0),
        Position3::new(5.0, 5.0, 5.0),
        Duration::ZERO,
        Easing::Linear,
    );
    assert!(tween.is_finished());
    assert_eq!(tween.position(), Position3::new(5.0, 5.0, 5.0));
}

fn point_object(position: Position3) -> RenderObject {
    RenderObject::Point {
        position,
        colour: "white".to_owned(),
        label: None,
    }
}

#[test]
fn renderer_animation_supersedes_and_cancels() {
    let mut renderer = NullRenderer::new();
    let handle = renderer
        .create_actor(&point_object(Position3::new(0.0, 0.0, 0.0)))
        .expect("actor");

    renderer
        .animate_actor_position(
            &handle,
            Position3::new(100.0, 0.0, 0.0),
            Duration::from_secs(1),
            Easing::Linear,
        )
        .expect("animate");
    renderer.step_animations(0.5).expect("step");
    assert_relative_eq!(
        renderer.position(handle).expect("position").x,
        50.0,
        max_relative = 1e-12
    );

    // A second animation restarts from the current position.
    renderer
        .animate_actor_position(
            &handle,
            Position3::new(0.0, 0.0, 0.0),
            Duration::from_secs(1),
            Easing::Linear,
        )
        .expect("animate");
    renderer.step_animations(0.5).expect("step");
    assert_relative_eq!(
        renderer.position(handle).expect("position").x,
        25.0,
        max_relative = 1e-12
    );

    // A snap move cancels whatever is in flight.
    renderer
        .set_actor_position(&handle, Position3::new(7.0, 7.0, 7.0))
        .expect("snap");
    assert!(!renderer.is_animating(handle));
    assert_eq!(renderer.step_animations(1.0).expect("step"), 0);
    assert_eq!(
        renderer.position(handle).expect("position"),
        Position3::new(7.0, 7.0, 7.0)
    );
}

#[test]
fn renderer_rejects_invalid_animation_steps() {
    let mut renderer = NullRenderer::new();
    assert!(renderer.step_animations(0.0).is_err());
    assert!(renderer.step_animations(-1.0).is_err());
    assert!(renderer.step_animations(f64::NAN).is_err());
}
