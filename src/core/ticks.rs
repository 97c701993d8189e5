//! "Nice number" tick generation.
//!
//! The algorithm reduces an axis range to a small-integer mantissa span,
//! picks a tick count from a fixed table keyed by that span, and emits
//! evenly spaced ticks restored to the range's true magnitude. Tick counts
//! therefore depend only on the mantissa span, never on absolute scale.

use smallvec::SmallVec;

use crate::core::types::Axis;
use crate::error::{ChartError, ChartResult};

/// Tick sequence for one axis. The diff table never asks for more than 8
/// ticks, so the inline capacity covers every table-driven range.
pub type TickVec = SmallVec<[f64; 8]>;

/// Tick count per mantissa diff. A zero diff is widened before lookup and
/// must never reach the spacing step.
const TICK_COUNT_BY_DIFF: [usize; 10] = [0, 3, 5, 4, 5, 6, 7, 8, 5, 4];

/// Ticks for all three axes, in ascending order per axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTicks {
    pub x: TickVec,
    pub y: TickVec,
    pub z: TickVec,
}

impl AxisTicks {
    #[must_use]
    pub fn ticks(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

/// Rounds a value to two significant digits, ties away from zero.
#[must_use]
pub fn round_to_two_significant(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let exponent = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(exponent - 1);
    (value / factor).round() * factor
}

/// Counts the magnitude digits of a value: the number of times it can be
/// integer-divided by 10 before the quotient reaches zero, minus one.
///
/// `find_zeros(900.0) == 2`, `find_zeros(3.0) == 0`, and zero itself yields
/// zero directly.
#[must_use]
pub fn find_zeros(value: f64) -> u32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }

    let mut digits: i32 = -1;
    let mut quotient = value;
    while quotient != 0.0 {
        digits += 1;
        quotient = (quotient / 10.0).trunc();
    }

    digits as u32
}

fn tick_count_for_diff(diff: u64) -> usize {
    match usize::try_from(diff) {
        Ok(d) if d < TICK_COUNT_BY_DIFF.len() => TICK_COUNT_BY_DIFF[d],
        // Past the table both endpoints carry the top magnitude with opposite
        // signs; unit spacing keeps both extremes and even spacing intact.
        _ => diff as usize + 1,
    }
}

/// Generates evenly spaced ticks bracketing `[min, max]`.
///
/// The returned sequence is ascending, includes both extremes of the rounded
/// range, and its length depends only on the mantissa diff of the rounded
/// endpoints. A range that still collapses to a single mantissa value after
/// widening is an [`ChartError::InvalidTickCount`] error.
pub fn generate_ticks(min: f64, max: f64) -> ChartResult<TickVec> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ChartError::InvalidData(format!(
            "tick range must be finite with min <= max, got [{min}, {max}]"
        )));
    }

    let rounded_up = round_to_two_significant(max);
    let rounded_down = round_to_two_significant(min);
    let zeros = find_zeros(rounded_up).max(find_zeros(rounded_down));
    let magnitude = 10f64.powi(zeros as i32);

    let (mut hi, mut lo) = if zeros > 0 {
        (
            (rounded_up / magnitude).round() as i64,
            (rounded_down / magnitude).round() as i64,
        )
    } else {
        (rounded_up.ceil() as i64, rounded_down.floor() as i64)
    };

    let mut diff = hi.abs_diff(lo);
    if diff == 0 {
        if max / magnitude > hi as f64 {
            hi += 1;
        }
        if min / magnitude < lo as f64 {
            lo -= 1;
        }
        diff = hi.abs_diff(lo);
    }

    let count = tick_count_for_diff(diff);
    if count <= 1 {
        return Err(ChartError::InvalidTickCount { diff, count });
    }

    let step = diff as f64 / (count - 1) as f64;
    let mut ticks = TickVec::new();
    for i in 0..count {
        ticks.push((lo as f64 + step * i as f64) * magnitude);
    }

    Ok(ticks)
}
