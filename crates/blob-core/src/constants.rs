// Shared tuning constants used by the core and both front-ends.

use std::f64::consts::TAU;

// Transition timing (milliseconds)
pub const SCALE_DURATION_MS: f64 = 750.0; // full expand or collapse
pub const REACTIVE_SPEED_DURATION_MS: f64 = 750.0; // full energy ramp up or down

// Pointer sampling
pub const REACTIVE_POLL_INTERVAL_MS: f64 = 16.66; // ~60 Hz
pub const ENERGY_THRESHOLD_RATIO: f64 = 0.001; // 0.1% of the diagonal per poll

// Viewport handling
pub const RESIZE_DEBOUNCE_MS: f64 = 200.0;
pub const WIDTH_BREAK_POINT: f64 = 768.0; // narrower viewports keep their geometry

// Radius layout, as fractions of the surface diagonal
pub const BASE_RADIUS_COVERAGE: f64 = 0.4;
pub const BUMP_RADIUS_DIVISOR: f64 = 7.0; // bump = base_radius / 7

// Startup ramp of the angular phase
pub const THETA_RAMP_DEST: f64 = 12.0;
pub const THETA_RAMP_DAMP: f64 = 25.0;
pub const THETA_RAMP_SETTLED: f64 = 0.99; // ramp counts as done past 99% of dest

// Angular speed mapping
pub const THETA_DELTA_REFERENCE_DIAGONAL: f64 = 2500.0;
pub const THETA_DELTA_BASE_SCALE: f64 = 0.02;
pub const THETA_DELTA_MAX_MULTIPLIER: f64 = 6.0;
pub const THETA_DELTA_CAP: f64 = 0.12;

// Fill
pub const FILL_COLOR: &str = "#41ffc9";
pub const SHADOW_BLUR: f64 = 20.0;
pub const SHADOW_COLOR: &str = "black";

// Default construction parameters
pub const DEFAULT_SEGMENTS: usize = 10;
/// Upper bound on `BlobConfig::segments`; each frame allocates `segments + 3` anchors.
pub const MAX_SEGMENTS: usize = 4096;
pub const DEFAULT_SECTOR_ANGLE: f64 = TAU / 4.0;
pub const DEFAULT_MIN_DEVIATION: f64 = TAU / 4.0;
