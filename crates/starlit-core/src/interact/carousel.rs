//! Testimonial carousel state.

use std::time::Duration;

/// Slide index with wrap-around navigation and timed autoplay.
///
/// Autoplay accumulates time only while unpaused (the pointer resting on the
/// carousel pauses it) and any manual navigation restarts the full autoplay
/// period. An interval of zero disables autoplay entirely.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: Duration,
    elapsed: Duration,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize, autoplay: Duration) -> Self {
        Self {
            len,
            index: 0,
            autoplay,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next slide, wrapping at the end.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Go back one slide, wrapping at the start.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Jump straight to a slide (dot navigation). Out-of-range is ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Pause or resume autoplay (pointer hover).
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Feed elapsed time. Returns true when autoplay moved to another slide.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.paused || self.len < 2 || self.autoplay.is_zero() {
            return false;
        }
        self.elapsed += dt;
        let mut advanced = false;
        while self.elapsed >= self.autoplay {
            self.elapsed -= self.autoplay;
            self.index = (self.index + 1) % self.len;
            advanced = true;
        }
        advanced
    }
}
