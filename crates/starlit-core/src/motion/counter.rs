//! Animated stat counter.

use std::time::Duration;

use super::timing::progress;

/// Counts from zero to a target over a fixed duration.
///
/// The displayed value floors during the run and lands exactly on the target,
/// so "250+" never reads "249+" at the end. Counting starts only when the
/// owning section scrolls into view, via [`CountUp::start`].
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    duration: Duration,
    elapsed: Duration,
    running: bool,
    done: bool,
}

impl CountUp {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            elapsed: Duration::ZERO,
            running: false,
            done: false,
        }
    }

    /// Begin counting. Calling again while running or after completion is a
    /// no-op, so a section re-entering the viewport does not restart it.
    pub fn start(&mut self) {
        if !self.running && !self.done {
            self.running = true;
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.running = false;
            self.done = true;
        }
    }

    /// Current display value.
    pub fn value(&self) -> u64 {
        if self.done {
            return self.target;
        }
        if !self.running {
            return 0;
        }
        let t = progress(self.elapsed, self.duration);
        (self.target as f64 * t as f64).floor() as u64
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
