/// Explicit frame scheduler for the animation loop.
///
/// The effect itself is a free-running loop with no exit condition; owning
/// the timing in a small object lets a driver pump it from real time while
/// tests step it against a synthetic clock. An `interval` of zero makes a
/// running ticker fire on every poll, one step per display refresh.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    running: bool,
    interval: f64,
    last_tick: f64,
}

impl Ticker {
    /// Creates a stopped ticker with the given minimum seconds between
    /// frames.
    pub fn new(interval: f64) -> Self {
        Self {
            running: false,
            interval,
            last_tick: 0.0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Polls the ticker at time `now` (seconds, any monotonic origin).
    ///
    /// Returns `true` and consumes a step when the ticker is running and
    /// at least `interval` has elapsed since the last step. A stopped
    /// ticker never fires.
    pub fn due(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }
        if now - self.last_tick >= self.interval {
            self.last_tick = now;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_ticker_never_fires() {
        let mut t = Ticker::new(0.0);
        assert!(!t.due(0.0));
        assert!(!t.due(100.0));
    }

    #[test]
    fn zero_interval_fires_every_poll_once_started() {
        let mut t = Ticker::new(0.0);
        t.start();
        assert!(t.due(0.0));
        assert!(t.due(0.016));
        assert!(t.due(0.032));
    }

    #[test]
    fn interval_spaces_out_steps() {
        let mut t = Ticker::new(0.1);
        t.start();

        assert!(t.due(0.1));
        assert!(!t.due(0.15), "only 0.05 s since the last step");
        assert!(t.due(0.25));
    }

    #[test]
    fn stop_pauses_and_start_resumes() {
        let mut t = Ticker::new(0.0);
        t.start();
        assert!(t.due(1.0));

        t.stop();
        assert!(!t.is_running());
        assert!(!t.due(2.0));

        t.start();
        assert!(t.due(3.0));
    }
}
