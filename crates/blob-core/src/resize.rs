use crate::constants::{RESIZE_DEBOUNCE_MS, WIDTH_BREAK_POINT};

/// Deadline-based debounce for viewport resizes.
///
/// Every accepted request pushes the commit deadline out by the quiet
/// period, so a burst of resizes commits once, after the last one settles.
#[derive(Clone, Debug)]
pub struct ResizeDebounce {
    quiet_ms: f64,
    min_width: f64,
    deadline_ms: Option<f64>,
}

impl Default for ResizeDebounce {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS, WIDTH_BREAK_POINT)
    }
}

impl ResizeDebounce {
    pub fn new(quiet_ms: f64, min_width: f64) -> Self {
        Self {
            quiet_ms,
            min_width,
            deadline_ms: None,
        }
    }

    /// Register a resize. Viewports narrower than the breakpoint are
    /// ignored. Returns whether the request was accepted.
    pub fn request(&mut self, now_ms: f64, viewport_width: f64) -> bool {
        if viewport_width < self.min_width {
            return false;
        }
        self.deadline_ms = Some(now_ms + self.quiet_ms);
        true
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Returns `true` once per burst, when the quiet period has elapsed.
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
