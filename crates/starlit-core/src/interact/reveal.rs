//! Scroll-triggered entrance animations.

use std::time::Duration;

use crate::motion::timing::progress;
use crate::motion::Easing;

/// Fraction of a section that must be visible before its reveal fires.
pub const REVEAL_VISIBLE_FRACTION: f32 = 0.1;
/// Stat counters wait for half the section before starting their run.
pub const COUNTER_VISIBLE_FRACTION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum RevealState {
    Hidden,
    Running(Duration),
    Shown,
}

/// One-shot entrance fade with an optional stagger delay.
///
/// `trigger()` arms it the first time its element scrolls into view; after
/// the delay the opacity eases from 0 to 1 and stays there. Scrolling away
/// and back never replays it.
#[derive(Debug, Clone)]
pub struct Reveal {
    delay: Duration,
    duration: Duration,
    easing: Easing,
    state: RevealState,
}

impl Reveal {
    pub fn new(delay: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            delay,
            duration,
            easing,
            state: RevealState::Hidden,
        }
    }

    /// Begin the reveal. Idempotent after the first call.
    pub fn trigger(&mut self) {
        if self.state == RevealState::Hidden {
            self.state = RevealState::Running(Duration::ZERO);
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if let RevealState::Running(elapsed) = self.state {
            let elapsed = elapsed + dt;
            if elapsed >= self.delay + self.duration {
                self.state = RevealState::Shown;
            } else {
                self.state = RevealState::Running(elapsed);
            }
        }
    }

    /// Current opacity in [0, 1].
    pub fn opacity(&self) -> f32 {
        match self.state {
            RevealState::Hidden => 0.0,
            RevealState::Shown => 1.0,
            RevealState::Running(elapsed) => {
                if elapsed < self.delay {
                    0.0
                } else {
                    self.easing.apply(progress(elapsed - self.delay, self.duration))
                }
            }
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.state != RevealState::Hidden
    }

    pub fn is_shown(&self) -> bool {
        self.state == RevealState::Shown
    }
}

/// Fraction of a row span currently inside the viewport.
///
/// `top`/`height` position the section on the page, `scroll` is the first
/// visible page row, `viewport` the number of visible rows.
pub fn visible_fraction(top: u16, height: u16, scroll: u16, viewport: u16) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let section_end = top.saturating_add(height);
    let view_end = scroll.saturating_add(viewport);
    let overlap_start = top.max(scroll);
    let overlap_end = section_end.min(view_end);
    if overlap_end <= overlap_start {
        return 0.0;
    }
    (overlap_end - overlap_start) as f32 / height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal() -> Reveal {
        Reveal::new(
            Duration::from_millis(100),
            Duration::from_millis(300),
            Easing::Linear,
        )
    }

    #[test]
    fn test_hidden_until_triggered() {
        let mut r = reveal();
        r.advance(Duration::from_secs(5));
        assert_eq!(r.opacity(), 0.0);
        assert!(!r.is_triggered());
    }

    #[test]
    fn test_delay_then_fade() {
        let mut r = reveal();
        r.trigger();
        r.advance(Duration::from_millis(50));
        // Still inside the stagger delay
        assert_eq!(r.opacity(), 0.0);
        r.advance(Duration::from_millis(200));
        // 150ms into a 300ms linear fade
        assert!((r.opacity() - 0.5).abs() < 0.01);
        r.advance(Duration::from_millis(200));
        assert_eq!(r.opacity(), 1.0);
        assert!(r.is_shown());
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut r = reveal();
        r.trigger();
        r.advance(Duration::from_secs(1));
        assert!(r.is_shown());
        // A second trigger must not restart the fade
        r.trigger();
        assert_eq!(r.opacity(), 1.0);
        assert!(r.is_shown());
    }

    #[test]
    fn test_zero_delay_starts_immediately() {
        let mut r = Reveal::new(Duration::ZERO, Duration::from_millis(300), Easing::Linear);
        r.trigger();
        r.advance(Duration::from_millis(150));
        assert!((r.opacity() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_visible_fraction() {
        // Section rows 10..20, viewport rows 0..15: rows 10..15 visible
        assert!((visible_fraction(10, 10, 0, 15) - 0.5).abs() < 1e-6);
        // Fully inside
        assert_eq!(visible_fraction(2, 5, 0, 20), 1.0);
        // Entirely below the viewport
        assert_eq!(visible_fraction(30, 10, 0, 20), 0.0);
        // Entirely above (scrolled past)
        assert_eq!(visible_fraction(0, 10, 15, 20), 0.0);
        // Degenerate section
        assert_eq!(visible_fraction(5, 0, 0, 20), 0.0);
    }

    #[test]
    fn test_visible_fraction_thresholds() {
        // A tall section can satisfy the reveal threshold but not the
        // counter threshold with the same sliver visible
        let fraction = visible_fraction(0, 50, 40, 20);
        assert!(fraction >= REVEAL_VISIBLE_FRACTION);
        assert!(fraction < COUNTER_VISIBLE_FRACTION);
    }
}
