// Host-side tests for progress easing and clamping.

use blob_core::{clamp_fraction, ease_in_out_circ};

#[test]
fn ease_hits_fixed_points_exactly() {
    assert_eq!(ease_in_out_circ(0.0), 0.0);
    assert_eq!(ease_in_out_circ(0.5), 0.5);
    assert_eq!(ease_in_out_circ(1.0), 1.0);
}

#[test]
fn ease_stays_in_unit_range_and_is_monotonic() {
    let mut prev = ease_in_out_circ(0.0);
    for i in 1..=1000 {
        let t = i as f64 / 1000.0;
        let v = ease_in_out_circ(t);
        assert!((0.0..=1.0).contains(&v), "ease({t}) = {v} out of range");
        assert!(v >= prev, "ease not monotonic at t={t}: {v} < {prev}");
        prev = v;
    }
}

#[test]
fn ease_is_symmetric_about_midpoint() {
    for i in 0..=50 {
        let t = i as f64 / 100.0;
        let a = ease_in_out_circ(t);
        let b = ease_in_out_circ(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-12, "asymmetry at t={t}");
    }
}

#[test]
fn ease_is_finite_next_to_the_joints() {
    for t in [1e-12, 0.5 - 1e-15, 0.5 + 1e-15, 1.0 - 1e-15] {
        let v = ease_in_out_circ(t);
        assert!(v.is_finite(), "ease({t}) not finite");
    }
}

#[test]
fn ease_clamps_out_of_range_input() {
    assert_eq!(ease_in_out_circ(-3.0), 0.0);
    assert_eq!(ease_in_out_circ(7.5), 1.0);
}

#[test]
fn clamp_fraction_never_leaves_unit_range() {
    let inputs = [
        -1e300,
        -2.0,
        -0.0,
        0.0,
        0.25,
        1.0,
        1.0000001,
        42.0,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ];
    for x in inputs {
        let c = clamp_fraction(x);
        assert!((0.0..=1.0).contains(&c), "clamp({x}) = {c}");
    }
    assert_eq!(clamp_fraction(0.25), 0.25);
    assert_eq!(clamp_fraction(f64::NAN), 0.0);
}
