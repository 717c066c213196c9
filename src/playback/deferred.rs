/// Quiet period before a coalesced refresh fires.
pub const REFRESH_DELAY_SECS: f64 = 0.5;

/// Debounced "check again later" marker.
///
/// Every `schedule` replaces the previous deadline, so a burst of input changes yields one
/// refresh `delay_secs` after the last of them. Time is supplied by the caller in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeferredRefresh {
    delay_secs: f64,
    due_at: Option<f64>,
}

impl Default for DeferredRefresh {
    fn default() -> Self {
        Self::new(REFRESH_DELAY_SECS)
    }
}

impl DeferredRefresh {
    pub fn new(delay_secs: f64) -> Self {
        Self {
            delay_secs,
            due_at: None,
        }
    }

    pub fn schedule(&mut self, now: f64) {
        self.due_at = Some(now + self.delay_secs);
    }

    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    pub fn due_at(&self) -> Option<f64> {
        self.due_at
    }

    /// Clears and reports the deadline once `now` has reached it.
    pub fn take_due(&mut self, now: f64) -> bool {
        match self.due_at {
            Some(at) if now >= at => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}
