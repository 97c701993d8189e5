use scatter3d_rs::core::{find_zeros, generate_ticks, round_to_two_significant};
use scatter3d_rs::error::ChartError;

#[test]
fn symmetric_small_range_yields_unit_ticks() {
    let ticks = generate_ticks(-3.0, 3.0).expect("ticks");
    assert_eq!(ticks.as_slice(), &[-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn tick_count_is_scale_invariant() {
    let small = generate_ticks(0.0, 9.0).expect("small ticks");
    let large = generate_ticks(0.0, 900.0).expect("large ticks");

    assert_eq!(small.len(), large.len());
    for (s, l) in small.iter().zip(large.iter()) {
        assert!((l - s * 100.0).abs() <= 1e-9);
    }
    assert_eq!(small.as_slice(), &[0.0, 3.0, 6.0, 9.0]);
}

#[test]
fn ticks_are_evenly_spaced_and_bracket_the_rounded_range() {
    let ticks = generate_ticks(0.0, 2.0).expect("ticks");
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks.last(), Some(&2.0));

    let step = ticks[1] - ticks[0];
    for pair in ticks.windows(2) {
        assert!((pair[1] - pair[0] - step).abs() <= 1e-12);
    }
}

#[test]
fn fractional_range_rounds_before_spacing() {
    // ceil(0.5) = 1, floor(0) = 0, diff 1 -> 3 ticks.
    let ticks = generate_ticks(0.0, 0.5).expect("ticks");
    assert_eq!(ticks.as_slice(), &[0.0, 0.5, 1.0]);
}

#[test]
fn equal_mantissas_widen_before_spacing() {
    // 48 and 52 both round to mantissa 5; widening restores a usable diff.
    let ticks = generate_ticks(48.0, 52.0).expect("ticks");
    assert_eq!(ticks.as_slice(), &[40.0, 45.0, 50.0, 55.0, 60.0]);
}

#[test]
fn one_sided_widening_only_extends_the_exceeded_edge() {
    let ticks = generate_ticks(50.0, 52.0).expect("ticks");
    assert_eq!(ticks.as_slice(), &[50.0, 55.0, 60.0]);
}

#[test]
fn opposite_sign_top_magnitude_range_falls_back_to_unit_spacing() {
    // diff 18 is past the tick-count table; one tick per mantissa unit.
    let ticks = generate_ticks(-900.0, 900.0).expect("ticks");
    assert_eq!(ticks.len(), 19);
    assert_eq!(ticks.first(), Some(&-900.0));
    assert_eq!(ticks.last(), Some(&900.0));
    for pair in ticks.windows(2) {
        assert!((pair[1] - pair[0] - 100.0).abs() <= 1e-9);
    }
}

#[test]
fn degenerate_range_is_an_invalid_tick_count() {
    let error = generate_ticks(5.0, 5.0).expect_err("degenerate range");
    assert!(matches!(
        error,
        ChartError::InvalidTickCount { diff: 0, count: 0 }
    ));
}

#[test]
fn inverted_or_non_finite_ranges_are_rejected() {
    assert!(generate_ticks(3.0, -3.0).is_err());
    assert!(generate_ticks(f64::NAN, 1.0).is_err());
    assert!(generate_ticks(0.0, f64::INFINITY).is_err());
}

#[test]
fn find_zeros_counts_magnitude_digits() {
    assert_eq!(find_zeros(0.0), 0);
    assert_eq!(find_zeros(3.0), 0);
    assert_eq!(find_zeros(0.5), 0);
    assert_eq!(find_zeros(-35.0), 1);
    assert_eq!(find_zeros(900.0), 2);
    assert_eq!(find_zeros(-1234.0), 3);
}

#[test]
fn rounding_keeps_two_significant_digits() {
    assert_eq!(round_to_two_significant(947.0), 950.0);
    assert_eq!(round_to_two_significant(-947.0), -950.0);
    assert_eq!(round_to_two_significant(0.0), 0.0);
    assert_eq!(round_to_two_significant(3.0), 3.0);
    assert!((round_to_two_significant(0.000_123) - 0.000_12).abs() <= 1e-18);
}
