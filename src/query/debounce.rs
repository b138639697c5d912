use std::time::{Duration, Instant};

pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(500);

/// Longer windows are clamped to this.
pub const MAX_QUIET_WINDOW: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Trailing debounce.
///
/// Every [`input`](Debouncer::input) replaces whatever was pending and
/// re-arms the deadline one quiet window later. [`poll`](Debouncer::poll)
/// hands out the pending value once the deadline has passed, after which the
/// debouncer is idle again. Time is passed in by the caller so the event
/// loop owns the clock.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window: window.min(MAX_QUIET_WINDOW),
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value fires, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn input(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now.checked_add(self.window).unwrap_or(now),
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some(pending) if now >= pending.deadline => Some(pending.value),
            still_waiting => {
                self.pending = still_waiting;
                None
            }
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_fires_once_with_last_value() {
        let t = Instant::now();
        let mut debouncer = Debouncer::new(ms(500));

        debouncer.input("r", t);
        debouncer.input("ru", t + ms(100));
        debouncer.input("rus", t + ms(200));

        let mut fired = Vec::new();
        for step in 0..=80 {
            if let Some(value) = debouncer.poll(t + ms(step * 10)) {
                fired.push((step * 10, value));
            }
        }

        assert_eq!(fired, vec![(700, "rus")]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_not_fired_before_window() {
        let t = Instant::now();
        let mut debouncer = Debouncer::new(ms(500));

        debouncer.input(1, t);
        assert_eq!(debouncer.poll(t + ms(499)), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(t + ms(500)), Some(1));
        assert_eq!(debouncer.poll(t + ms(501)), None);
    }

    #[test]
    fn test_new_input_cancels_pending() {
        let t = Instant::now();
        let mut debouncer = Debouncer::new(ms(500));

        debouncer.input("first", t);
        debouncer.input("second", t + ms(400));

        // The first deadline passes without firing.
        assert_eq!(debouncer.poll(t + ms(600)), None);
        assert_eq!(debouncer.deadline(), Some(t + ms(900)));
        assert_eq!(debouncer.poll(t + ms(900)), Some("second"));
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let t = Instant::now();
        let mut debouncer = Debouncer::new(ms(500));

        debouncer.input("a", t);
        assert_eq!(debouncer.poll(t + ms(500)), Some("a"));

        debouncer.input("b", t + ms(1000));
        assert_eq!(debouncer.poll(t + ms(1500)), Some("b"));
    }

    #[test]
    fn test_huge_window_is_clamped() {
        let t = Instant::now();
        let mut debouncer = Debouncer::new(Duration::MAX);
        assert_eq!(debouncer.window(), MAX_QUIET_WINDOW);

        debouncer.input("x", t);
        assert_eq!(debouncer.deadline(), Some(t + MAX_QUIET_WINDOW));
        assert_eq!(debouncer.poll(t + MAX_QUIET_WINDOW), Some("x"));
    }

    #[test]
    fn test_cancel() {
        let t = Instant::now();
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.window(), DEFAULT_QUIET_WINDOW);

        debouncer.input("x", t);
        debouncer.cancel();
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.poll(t + ms(5000)), None);
    }
}
