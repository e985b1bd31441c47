//! Expansion/collapse state machine for the blob's radius offset.

use std::fmt;

use crate::constants::SCALE_DURATION_MS;
use crate::easing::{clamp_fraction, ease_in_out_circ};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeState {
    /// Fully covering the surface; rendering is skipped.
    Expanded,
    Expanding,
    #[default]
    Regular,
    Collapsing,
}

impl ShapeState {
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, ShapeState::Expanding | ShapeState::Collapsing)
    }
}

impl fmt::Display for ShapeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeState::Expanded => "expanded",
            ShapeState::Expanding => "expanding",
            ShapeState::Regular => "regular",
            ShapeState::Collapsing => "collapsing",
        })
    }
}

/// Surface-dependent radii the transition interpolates between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusExtent {
    pub base_radius: f64,
    pub max_radius: f64,
    pub diagonal: f64,
}

impl RadiusExtent {
    /// `max_radius = diagonal + bump_radius`.
    pub fn new(diagonal: f64, base_radius: f64, bump_radius: f64) -> Self {
        Self {
            base_radius,
            max_radius: diagonal + bump_radius,
            diagonal,
        }
    }

    #[inline]
    pub fn offset_at(&self, time_fraction: f64) -> f64 {
        (self.max_radius - self.base_radius) * ease_in_out_circ(time_fraction)
    }
}

/// Outcome of one shape tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStep {
    pub state: ShapeState,
    pub time_fraction: f64,
    pub radius_offset: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ShapeMachine {
    state: ShapeState,
    recorded_time_ms: f64,
    last_time_fraction: f64,
    current_time_fraction: f64,
    radius_offset: f64,
}

impl ShapeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ShapeState {
        self.state
    }

    pub fn recorded_time_ms(&self) -> f64 {
        self.recorded_time_ms
    }

    pub fn last_time_fraction(&self) -> f64 {
        self.last_time_fraction
    }

    pub fn current_time_fraction(&self) -> f64 {
        self.current_time_fraction
    }

    pub fn radius_offset(&self) -> f64 {
        self.radius_offset
    }

    /// Start growing unless already expanded or expanding. Returns whether
    /// the cue took effect.
    pub fn cue_expansion(&mut self, now_ms: f64) -> bool {
        if matches!(self.state, ShapeState::Expanded | ShapeState::Expanding) {
            return false;
        }
        self.track_time(now_ms);
        self.state = ShapeState::Expanding;
        log::debug!(
            "[shape] expanding from fraction {:.3}",
            self.last_time_fraction
        );
        true
    }

    /// Start shrinking unless already regular or collapsing.
    pub fn cue_collapse(&mut self, now_ms: f64) -> bool {
        if matches!(self.state, ShapeState::Regular | ShapeState::Collapsing) {
            return false;
        }
        self.track_time(now_ms);
        self.state = ShapeState::Collapsing;
        log::debug!(
            "[shape] collapsing from fraction {:.3}",
            self.last_time_fraction
        );
        true
    }

    fn track_time(&mut self, now_ms: f64) {
        self.recorded_time_ms = now_ms;
        self.last_time_fraction = self.current_time_fraction;
    }

    /// Progress of the running transition, clamped to `[0, 1]`.
    pub fn elapsed_fraction(&self, now_ms: f64) -> f64 {
        clamp_fraction((now_ms - self.recorded_time_ms) / SCALE_DURATION_MS)
    }

    /// Compute the next step without applying it. `None` outside
    /// `Expanding`/`Collapsing`.
    pub fn next(&self, now_ms: f64, extent: &RadiusExtent) -> Option<ShapeStep> {
        match self.state {
            ShapeState::Expanding => {
                if self.radius_offset >= extent.diagonal {
                    return Some(ShapeStep {
                        state: ShapeState::Expanded,
                        time_fraction: 1.0,
                        radius_offset: extent.max_radius,
                    });
                }
                let time_fraction =
                    clamp_fraction(self.elapsed_fraction(now_ms) + self.last_time_fraction);
                Some(ShapeStep {
                    state: ShapeState::Expanding,
                    time_fraction,
                    radius_offset: extent.offset_at(time_fraction),
                })
            }
            ShapeState::Collapsing => {
                if self.current_time_fraction == 0.0 {
                    return Some(ShapeStep {
                        state: ShapeState::Regular,
                        time_fraction: 0.0,
                        radius_offset: 0.0,
                    });
                }
                let time_fraction =
                    clamp_fraction(self.last_time_fraction - self.elapsed_fraction(now_ms));
                Some(ShapeStep {
                    state: ShapeState::Collapsing,
                    time_fraction,
                    radius_offset: extent.offset_at(time_fraction),
                })
            }
            ShapeState::Expanded | ShapeState::Regular => None,
        }
    }

    /// Advance one tick. Returns the applied step, if any.
    pub fn animate(&mut self, now_ms: f64, extent: &RadiusExtent) -> Option<ShapeStep> {
        let step = self.next(now_ms, extent)?;
        if step.state != self.state {
            log::debug!("[shape] {} -> {}", self.state, step.state);
        }
        self.state = step.state;
        self.current_time_fraction = step.time_fraction;
        self.radius_offset = step.radius_offset;
        Some(step)
    }
}
