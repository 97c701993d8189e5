//! Deterministic, time-sliced position tweens.
//!
//! A tween owns its own interpolation state and is advanced by explicit
//! `step` calls from an external frame clock; starting a mutation never
//! blocks on an animation in flight. Starting a second tween on the same
//! actor supersedes the first.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Position3;

/// Duration of an animated point move.
pub const POINT_MOVE_DURATION: Duration = Duration::from_millis(500);

/// Interpolation curve applied over a tween's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Exponential ease-in-out, the curve used for point moves.
    #[default]
    ExponentialInOut,
}

impl Easing {
    /// Maps normalized progress `t` in `[0, 1]` to an eased factor.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::ExponentialInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    0.5 * 2f64.powf(20.0 * t - 10.0)
                } else {
                    0.5 * (2.0 - 2f64.powf(-20.0 * t + 10.0))
                }
            }
        }
    }
}

/// In-flight interpolation between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Position3,
    to: Position3,
    duration_secs: f64,
    elapsed_secs: f64,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: Position3, to: Position3, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_secs: duration.as_secs_f64(),
            elapsed_secs: 0.0,
            easing,
        }
    }

    /// Advances the tween by a simulation step and returns the new position.
    /// Non-positive or non-finite deltas leave the tween where it is.
    pub fn step(&mut self, delta_seconds: f64) -> Position3 {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed_secs = (self.elapsed_secs + delta_seconds).min(self.duration_secs);
        }
        self.position()
    }

    /// Current interpolated position.
    #[must_use]
    pub fn position(&self) -> Position3 {
        if self.is_finished() {
            return self.to;
        }

        let eased = self.easing.apply(self.elapsed_secs / self.duration_secs);
        Position3::new(
            lerp(self.from.x, self.to.x, eased),
            lerp(self.from.y, self.to.y, eased),
            lerp(self.from.z, self.to.z, eased),
        )
    }

    #[must_use]
    pub fn target(&self) -> Position3 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.duration_secs <= 0.0 || self.elapsed_secs >= self.duration_secs
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
