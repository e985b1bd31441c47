//! The blob: ring geometry, both state machines, and one render per update.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;

use crate::anchors::{generate_anchors, RingPose, RingProfile};
use crate::clock::Clock;
use crate::constants::{
    BASE_RADIUS_COVERAGE, BUMP_RADIUS_DIVISOR, DEFAULT_MIN_DEVIATION, DEFAULT_SECTOR_ANGLE,
    DEFAULT_SEGMENTS, MAX_SEGMENTS, THETA_RAMP_DAMP, THETA_RAMP_DEST, THETA_RAMP_SETTLED,
};
use crate::energy::{energy_threshold, EnergyMachine, EnergyState, EnergyStep, ThetaRange};
use crate::error::{BlobError, Result};
use crate::shape::{RadiusExtent, ShapeMachine, ShapeState, ShapeStep};
use crate::skin::skin;
use crate::surface::{FillStyle, Surface};

#[derive(Clone, Debug)]
pub struct BlobConfig {
    /// Detail level: number of skinned segments.
    pub segments: usize,
    /// Angle swept by the sampled ring.
    pub sector_angle: f64,
    /// Lower bound of the per-segment phase offsets; clamped to `2π`.
    pub min_deviation: f64,
    /// Seed for the per-segment tables. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub fill: FillStyle,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            sector_angle: DEFAULT_SECTOR_ANGLE,
            min_deviation: DEFAULT_MIN_DEVIATION,
            seed: None,
            fill: FillStyle::default(),
        }
    }
}

impl BlobConfig {
    /// Check the configuration and return the effective minimum deviation.
    pub fn validate(&self) -> Result<f64> {
        if self.segments == 0 {
            return Err(BlobError::InvalidConfiguration(
                "segment count must be at least 1".into(),
            ));
        }
        if self.segments > MAX_SEGMENTS {
            return Err(BlobError::InvalidConfiguration(format!(
                "segment count must be at most {}, got {}",
                MAX_SEGMENTS, self.segments
            )));
        }
        if !self.sector_angle.is_finite() {
            return Err(BlobError::InvalidConfiguration(format!(
                "sector angle must be finite, got {}",
                self.sector_angle
            )));
        }
        if !self.min_deviation.is_finite() {
            return Err(BlobError::InvalidConfiguration(format!(
                "minimum deviation must be finite, got {}",
                self.min_deviation
            )));
        }
        Ok(self.min_deviation.min(TAU))
    }
}

pub struct Blob<S, C> {
    surface: S,
    clock: C,
    fill: FillStyle,
    profile: RingProfile,

    base_radius: f64,
    theta: f64,
    theta_ramp: f64,
    theta_ramp_dest: f64,
    ramp_damp: f64,

    anchors: Vec<DVec2>,
    shape: ShapeMachine,
    energy: EnergyMachine,
}

impl<S: Surface, C: Clock> Blob<S, C> {
    /// Build a blob sized to the surface's current viewport.
    pub fn new(config: BlobConfig, mut surface: S, clock: C) -> Result<Self> {
        let min_deviation = config.validate()?;

        surface.fit_to_viewport();
        let diagonal = surface.diagonal();
        let base_radius = diagonal * BASE_RADIUS_COVERAGE;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let profile = RingProfile::generate(
            config.segments,
            config.sector_angle,
            min_deviation,
            base_radius / BUMP_RADIUS_DIVISOR,
            &mut rng,
        );
        let anchors = vec![DVec2::ZERO; profile.anchor_count()];
        let energy = EnergyMachine::new(ThetaRange::for_diagonal(diagonal).base);

        log::info!(
            "[blob] segments={} diagonal={:.1} base_radius={:.1} bump_radius={:.1}",
            profile.segments,
            diagonal,
            base_radius,
            profile.bump_radius
        );

        Ok(Self {
            surface,
            clock,
            fill: config.fill,
            profile,
            base_radius,
            theta: 0.0,
            theta_ramp: 0.0,
            theta_ramp_dest: THETA_RAMP_DEST,
            ramp_damp: THETA_RAMP_DAMP,
            anchors,
            shape: ShapeMachine::new(),
            energy,
        })
    }

    // ---------------- Geometry ----------------

    /// Fit the surface to the viewport and recompute the base radius.
    pub fn update_values(&mut self) {
        self.surface.fit_to_viewport();
        self.base_radius = self.diagonal() * BASE_RADIUS_COVERAGE;
    }

    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.surface.diagonal()
    }

    pub fn radius_extent(&self) -> RadiusExtent {
        RadiusExtent::new(self.diagonal(), self.base_radius, self.profile.bump_radius)
    }

    pub fn theta_range(&self) -> ThetaRange {
        ThetaRange::for_diagonal(self.diagonal())
    }

    fn ramping_in(&self) -> bool {
        self.theta_ramp < self.theta_ramp_dest * THETA_RAMP_SETTLED
    }

    fn should_refresh(&self) -> bool {
        self.shape.state().is_animating() || self.ramping_in()
    }

    fn update_anchors(&mut self) {
        self.theta_ramp += (self.theta_ramp_dest - self.theta_ramp) / self.ramp_damp;
        self.theta += self.energy.theta_delta();

        let pose = RingPose {
            surface_width: self.surface.size().x,
            base_radius: self.base_radius,
            radius_offset: self.shape.radius_offset(),
            theta: self.theta,
            theta_ramp: self.theta_ramp,
        };
        generate_anchors(&self.profile, &pose, &mut self.anchors);
    }

    // ---------------- Per-frame steps ----------------

    /// Redraw the blob. Skipped entirely while expanded.
    pub fn update(&mut self) -> Result<()> {
        if self.shape.state() == ShapeState::Expanded {
            return Ok(());
        }

        self.surface.clear();
        if self.should_refresh() {
            self.update_values();
        }
        self.update_anchors();

        let width = self.surface.size().x;
        self.surface.begin_path();
        self.surface.move_to(DVec2::ZERO);
        skin(&mut self.surface, &self.anchors, false)?;
        self.surface.line_to(DVec2::new(width, 0.0));
        self.surface.fill(&self.fill);
        Ok(())
    }

    /// Advance the shape transition, if one is running.
    pub fn animate(&mut self) -> Option<ShapeStep> {
        let extent = self.radius_extent();
        let now = self.clock.now_ms();
        self.shape.animate(now, &extent)
    }

    /// Advance the energy transition, if one is running.
    pub fn energize(&mut self) -> Option<EnergyStep> {
        let range = self.theta_range();
        let now = self.clock.now_ms();
        self.energy.energize(now, &range)
    }

    /// `energize`, `animate`, then `update`: one display frame.
    pub fn tick(&mut self) -> Result<()> {
        self.energize();
        self.animate();
        self.update()
    }

    // ---------------- Inputs ----------------

    /// Feed a pointer speed sample (pixels per millisecond).
    pub fn reactive_px(&mut self, speed: f64) -> bool {
        let threshold = energy_threshold(self.diagonal());
        let now = self.clock.now_ms();
        self.energy.react(speed, threshold, now)
    }

    pub fn cue_expansion(&mut self) -> bool {
        let now = self.clock.now_ms();
        self.shape.cue_expansion(now)
    }

    pub fn cue_collapse(&mut self) -> bool {
        let now = self.clock.now_ms();
        self.shape.cue_collapse(now)
    }

    // ---------------- Read-only inspection ----------------

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access for hosts that need to adjust the viewport.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn profile(&self) -> &RingProfile {
        &self.profile
    }

    pub fn anchors(&self) -> &[DVec2] {
        &self.anchors
    }

    pub fn fill(&self) -> &FillStyle {
        &self.fill
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn radius_offset(&self) -> f64 {
        self.shape.radius_offset()
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn theta_ramp(&self) -> f64 {
        self.theta_ramp
    }

    pub fn theta_ramp_dest(&self) -> f64 {
        self.theta_ramp_dest
    }

    pub fn theta_delta(&self) -> f64 {
        self.energy.theta_delta()
    }

    pub fn shape(&self) -> &ShapeMachine {
        &self.shape
    }

    pub fn shape_state(&self) -> ShapeState {
        self.shape.state()
    }

    pub fn energy(&self) -> &EnergyMachine {
        &self.energy
    }

    pub fn energy_state(&self) -> EnergyState {
        self.energy.state()
    }
}
