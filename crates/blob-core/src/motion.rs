use glam::DVec2;

use crate::constants::REACTIVE_POLL_INTERVAL_MS;

/// Turns raw pointer positions into a scalar speed at a fixed poll rate.
///
/// Positions are recorded as events arrive; each poll diffs the latest
/// position against the one seen at the previous poll.
#[derive(Clone, Debug)]
pub struct MotionSampler {
    interval_ms: f64,
    last: Option<DVec2>,
    current: Option<DVec2>,
}

impl Default for MotionSampler {
    fn default() -> Self {
        Self::new(REACTIVE_POLL_INTERVAL_MS)
    }
}

impl MotionSampler {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last: None,
            current: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Record the latest pointer position (screen pixels).
    #[inline]
    pub fn record(&mut self, position: DVec2) {
        self.current = Some(position);
    }

    /// Speed in pixels per millisecond since the previous poll, or `None`
    /// until two positions have been seen.
    pub fn poll(&mut self) -> Option<f64> {
        let speed = match (self.last, self.current) {
            (Some(last), Some(current)) => {
                let movement = (current - last).abs().length();
                Some(movement / self.interval_ms)
            }
            _ => None,
        };
        self.last = self.current;
        speed
    }
}
