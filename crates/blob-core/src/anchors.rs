//! Per-frame anchor ring generation.

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Fixed per-segment tables drawn once at construction.
#[derive(Clone, Debug)]
pub struct RingProfile {
    pub segments: usize,
    /// Angle between consecutive samples.
    pub step: f64,
    /// Bump amplitude per sample, in `[-half_bump_radius, half_bump_radius)`.
    pub radii: Vec<f64>,
    /// Phase offset per sample, in `[min_deviation, 2π)`.
    pub theta_off: Vec<f64>,
    pub bump_radius: f64,
    pub half_bump_radius: f64,
}

impl RingProfile {
    /// Draw `segments + 2` bump amplitudes and phase offsets from `rng`.
    ///
    /// `min_deviation` is expected to be at most `2π` already.
    pub fn generate<R: Rng + ?Sized>(
        segments: usize,
        sector_angle: f64,
        min_deviation: f64,
        bump_radius: f64,
        rng: &mut R,
    ) -> Self {
        let half_bump_radius = bump_radius / 2.0;
        let len = segments + 2;
        let mut radii = Vec::with_capacity(len);
        let mut theta_off = Vec::with_capacity(len);
        for _ in 0..len {
            radii.push(rng.gen::<f64>() * bump_radius - half_bump_radius);
            theta_off.push(rng.gen::<f64>() * (TAU - min_deviation) + min_deviation);
        }
        Self {
            segments,
            step: sector_angle / segments as f64,
            radii,
            theta_off,
            bump_radius,
            half_bump_radius,
        }
    }

    /// Points emitted per frame: the fixed anchor plus one per table entry.
    #[inline]
    pub fn anchor_count(&self) -> usize {
        self.radii.len() + 1
    }
}

/// Frame-varying inputs to [`generate_anchors`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPose {
    pub surface_width: f64,
    pub base_radius: f64,
    pub radius_offset: f64,
    pub theta: f64,
    pub theta_ramp: f64,
}

/// Rebuild the anchor ring into `out`.
///
/// The first anchor is pinned at `(surface_width, base_radius)`; the rest
/// sample a circle of radius `base_radius + radius_offset` centred on the top
/// right corner, each pushed in or out by its own phase-shifted sinusoidal
/// bump.
pub fn generate_anchors(profile: &RingProfile, pose: &RingPose, out: &mut Vec<DVec2>) {
    out.clear();
    out.push(DVec2::new(pose.surface_width, pose.base_radius));

    let phase = pose.theta + pose.theta_ramp;
    let radius = pose.base_radius + pose.radius_offset;
    for (i, (bump, off)) in profile.radii.iter().zip(&profile.theta_off).enumerate() {
        let sine = (off + phase).sin();
        let r = radius + bump * sine;
        let angle = profile.step * i as f64;
        out.push(DVec2::new(pose.surface_width - r * angle.sin(), r * angle.cos()));
    }
}
