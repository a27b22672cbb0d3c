use std::time::{Duration, Instant};

/// Restartable quiet-period timer for lookup scheduling.
///
/// Every keystroke reschedules the deadline; only the most recent one can
/// fire. Callers pass the clock explicitly so timing is testable.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arm (or re-arm) the timer one window after `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the quiet period has elapsed. Clears the deadline so each
    /// scheduled window fires at most once.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    #[test]
    fn test_new_debouncer_is_idle() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(Instant::now()));
    }

    #[test]
    fn test_does_not_fire_inside_the_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.schedule(start);
        assert!(!debouncer.fire(start + Duration::from_millis(199)));
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_fires_once_after_the_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.schedule(start);
        assert!(debouncer.fire(start + Duration::from_millis(200)));

        // A fired deadline does not fire again
        assert!(!debouncer.fire(start + Duration::from_millis(400)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_restarts_the_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(150));

        // The first deadline has passed but was superseded
        assert!(!debouncer.fire(start + Duration::from_millis(210)));
        assert!(debouncer.fire(start + Duration::from_millis(350)));
    }

    #[test]
    fn test_cancel_clears_the_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.schedule(start);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(start + Duration::from_millis(500)));
    }
}
