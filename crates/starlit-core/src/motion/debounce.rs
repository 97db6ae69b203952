//! Trailing-edge debouncing and fixed-step frame pacing.

use std::time::Duration;

/// Maximum simulation frames replayed after a stall before the remainder is
/// dropped
const MAX_CATCH_UP_FRAMES: u32 = 5;

/// Trailing-edge debouncer.
///
/// Every `trigger()` restarts the quiet period; the debouncer fires once the
/// full delay passes without another trigger. Used to coalesce resize bursts
/// into a single particle regeneration.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    remaining: Option<Duration>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    /// Arm (or re-arm) the debouncer, restarting the quiet period.
    pub fn trigger(&mut self) {
        self.remaining = Some(self.delay);
    }

    /// Advance by elapsed time. Returns true exactly once per armed period,
    /// when the quiet period has fully elapsed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(rem) if dt >= rem => {
                self.remaining = None;
                true
            }
            Some(rem) => {
                self.remaining = Some(rem - dt);
                false
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }
}

/// Converts elapsed wall time into a whole number of fixed simulation frames.
///
/// Particle velocities are per-frame units, so the simulation must advance in
/// frame-sized steps no matter how irregularly the event loop wakes up.
/// Catch-up after a stall is capped; anything older is dropped rather than
/// replayed.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    accumulator: Duration,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            accumulator: Duration::ZERO,
        }
    }

    /// Standard 60 Hz frame step.
    pub fn sixty_hz() -> Self {
        Self::new(Duration::from_nanos(16_666_667))
    }

    /// Add elapsed time and return the number of whole frames now due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.frame.is_zero() {
            return 0;
        }
        self.accumulator += dt;
        let mut frames = 0;
        while self.accumulator >= self.frame && frames < MAX_CATCH_UP_FRAMES {
            self.accumulator -= self.frame;
            frames += 1;
        }
        if frames == MAX_CATCH_UP_FRAMES && self.accumulator >= self.frame {
            self.accumulator = Duration::ZERO;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        debouncer.trigger();
        assert!(!debouncer.advance(Duration::from_millis(100)));
        assert!(!debouncer.advance(Duration::from_millis(100)));
        assert!(debouncer.advance(Duration::from_millis(100)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debounce_retrigger_postpones() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        debouncer.trigger();
        assert!(!debouncer.advance(Duration::from_millis(200)));
        // A new trigger restarts the full quiet period
        debouncer.trigger();
        assert!(!debouncer.advance(Duration::from_millis(200)));
        assert!(debouncer.advance(Duration::from_millis(60)));
    }

    #[test]
    fn test_debounce_fires_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        debouncer.trigger();
        assert!(debouncer.advance(Duration::from_millis(80)));
        assert!(!debouncer.advance(Duration::from_millis(80)));
    }

    #[test]
    fn test_debounce_idle_without_trigger() {
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        assert!(!debouncer.advance(Duration::from_secs(10)));
    }

    #[test]
    fn test_frame_clock_accumulates_fractions() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
        assert_eq!(clock.advance(Duration::from_millis(16)), 1);
    }

    #[test]
    fn test_frame_clock_whole_frames() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        assert_eq!(clock.advance(Duration::from_millis(48)), 3);
        // Remainder already consumed
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_frame_clock_caps_catch_up() {
        let mut clock = FrameClock::new(Duration::from_millis(16));
        // A two-second stall must not replay 125 frames
        assert_eq!(clock.advance(Duration::from_secs(2)), MAX_CATCH_UP_FRAMES);
        // The excess backlog is dropped, not carried over
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }
}
