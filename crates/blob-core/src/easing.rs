//! Progress easing and clamping.

/// Clamp a progress value into `[0, 1]`.
///
/// Timing overshoot from clock jitter or dropped frames lands here, so any
/// input is accepted. `NaN` maps to `0`.
#[inline]
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction > 1.0 {
        1.0
    } else if fraction > 0.0 {
        fraction
    } else {
        0.0
    }
}

/// Circular ease-in-out: two quarter-circle arcs joined at `(0.5, 0.5)`.
///
/// Input is clamped first; radicands are floored at zero so the endpoints
/// stay exact under rounding.
#[inline]
pub fn ease_in_out_circ(t: f64) -> f64 {
    let t = clamp_fraction(t);
    if t < 0.5 {
        let a = 2.0 * t;
        (1.0 - (1.0 - a * a).max(0.0).sqrt()) / 2.0
    } else {
        let a = -2.0 * t + 2.0;
        ((1.0 - a * a).max(0.0).sqrt() + 1.0) / 2.0
    }
}
