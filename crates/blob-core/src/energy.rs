//! Motion-energy state machine driving the blob's angular speed.

use std::fmt;

use crate::constants::{
    ENERGY_THRESHOLD_RATIO, REACTIVE_SPEED_DURATION_MS, THETA_DELTA_BASE_SCALE, THETA_DELTA_CAP,
    THETA_DELTA_MAX_MULTIPLIER, THETA_DELTA_REFERENCE_DIAGONAL,
};
use crate::easing::{clamp_fraction, ease_in_out_circ};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EnergyState {
    #[default]
    Rest,
    Increasing,
    Decreasing,
    Maximum,
}

impl fmt::Display for EnergyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnergyState::Rest => "rest",
            EnergyState::Increasing => "increasing",
            EnergyState::Decreasing => "decreasing",
            EnergyState::Maximum => "maximum",
        })
    }
}

/// Angular speed bounds for a given surface diagonal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThetaRange {
    pub base: f64,
    pub max: f64,
}

impl ThetaRange {
    pub fn for_diagonal(diagonal: f64) -> Self {
        let base = (diagonal / THETA_DELTA_REFERENCE_DIAGONAL) * THETA_DELTA_BASE_SCALE;
        Self {
            base,
            max: (base * THETA_DELTA_MAX_MULTIPLIER).min(THETA_DELTA_CAP),
        }
    }

    #[inline]
    pub fn delta_at(&self, theta_fraction: f64) -> f64 {
        (self.max - self.base) * ease_in_out_circ(theta_fraction) + self.base
    }
}

/// Motion speed above which the blob gains energy: 0.1% of the diagonal.
#[inline]
pub fn energy_threshold(diagonal: f64) -> f64 {
    diagonal * ENERGY_THRESHOLD_RATIO
}

/// Outcome of one energy tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyStep {
    pub state: EnergyState,
    pub theta_fraction: f64,
    pub theta_delta: f64,
}

#[derive(Clone, Debug)]
pub struct EnergyMachine {
    state: EnergyState,
    recorded_time_ms: f64,
    last_theta_fraction: f64,
    current_theta_fraction: f64,
    theta_delta: f64,
}

impl EnergyMachine {
    pub fn new(initial_theta_delta: f64) -> Self {
        Self {
            state: EnergyState::Rest,
            recorded_time_ms: 0.0,
            last_theta_fraction: 0.0,
            current_theta_fraction: 0.0,
            theta_delta: initial_theta_delta,
        }
    }

    pub fn state(&self) -> EnergyState {
        self.state
    }

    pub fn recorded_time_ms(&self) -> f64 {
        self.recorded_time_ms
    }

    pub fn last_theta_fraction(&self) -> f64 {
        self.last_theta_fraction
    }

    pub fn current_theta_fraction(&self) -> f64 {
        self.current_theta_fraction
    }

    pub fn theta_delta(&self) -> f64 {
        self.theta_delta
    }

    fn track_time(&mut self, now_ms: f64) {
        self.recorded_time_ms = now_ms;
        self.last_theta_fraction = self.current_theta_fraction;
    }

    pub fn elapsed_fraction(&self, now_ms: f64) -> f64 {
        clamp_fraction((now_ms - self.recorded_time_ms) / REACTIVE_SPEED_DURATION_MS)
    }

    /// Feed a motion speed sample. A sample above `threshold` starts (or
    /// restarts) the ramp up; anything else starts the ramp down unless the
    /// blob is already calming or calm. Ignored while ramping up.
    ///
    /// Returns whether a transition was recorded.
    pub fn react(&mut self, speed: f64, threshold: f64, now_ms: f64) -> bool {
        if self.state == EnergyState::Increasing {
            return false;
        }
        let next = if speed.abs() > threshold {
            EnergyState::Increasing
        } else if matches!(self.state, EnergyState::Decreasing | EnergyState::Rest) {
            return false;
        } else {
            EnergyState::Decreasing
        };
        self.track_time(now_ms);
        log::debug!("[energy] {} -> {} (speed {:.4})", self.state, next, speed);
        self.state = next;
        true
    }

    /// Compute the next step without applying it. `None` at `Rest`/`Maximum`.
    pub fn next(&self, now_ms: f64, range: &ThetaRange) -> Option<EnergyStep> {
        match self.state {
            EnergyState::Increasing => {
                let theta_fraction =
                    clamp_fraction(self.last_theta_fraction + self.elapsed_fraction(now_ms));
                let state = if theta_fraction >= 1.0 {
                    EnergyState::Maximum
                } else {
                    EnergyState::Increasing
                };
                Some(EnergyStep {
                    state,
                    theta_fraction,
                    theta_delta: range.delta_at(theta_fraction),
                })
            }
            EnergyState::Decreasing => {
                let settled =
                    self.theta_delta == range.base || self.current_theta_fraction < 0.0;
                let theta_fraction =
                    clamp_fraction(self.last_theta_fraction - self.elapsed_fraction(now_ms));
                Some(EnergyStep {
                    state: if settled {
                        EnergyState::Rest
                    } else {
                        EnergyState::Decreasing
                    },
                    theta_fraction,
                    theta_delta: range.delta_at(theta_fraction),
                })
            }
            EnergyState::Rest | EnergyState::Maximum => None,
        }
    }

    /// Advance one tick. Returns the applied step, if any.
    pub fn energize(&mut self, now_ms: f64, range: &ThetaRange) -> Option<EnergyStep> {
        let step = self.next(now_ms, range)?;
        if step.state != self.state {
            log::debug!("[energy] {} -> {}", self.state, step.state);
        }
        self.state = step.state;
        self.current_theta_fraction = step.theta_fraction;
        self.theta_delta = step.theta_delta;
        Some(step)
    }
}
