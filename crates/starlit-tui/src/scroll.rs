//! Smooth scroll controller for the page viewport.
//!
//! Wraps the easing and timing primitives from `starlit_core::motion` in an
//! `Instant`-driven animator. Call `scroll_to()` / `scroll_by()` from input
//! handling, then `update()` each frame to get the interpolated position.

use std::time::{Duration, Instant};

use starlit_core::config::MotionConfig;
use starlit_core::motion::timing::{lerp_u16, progress};
use starlit_core::Easing;

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting scroll position
    from: u16,
    /// Target scroll position
    to: u16,
}

/// Scroll animation controller
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Whether animations run at all; when false every scroll is a jump
    smooth: bool,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: Easing,
    /// Current scroll position (always up-to-date)
    current_scroll: u16,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::from_motion(&MotionConfig::default())
    }
}

impl ScrollAnimator {
    /// Create an animator from the motion configuration
    pub fn from_motion(config: &MotionConfig) -> Self {
        Self {
            animation: None,
            smooth: config.smooth_scroll,
            duration: Duration::from_millis(config.scroll_duration_ms),
            easing: config.easing,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending delta)
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Get the target scroll position (final position after animation)
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    /// Get the current interpolated scroll position
    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Start a scroll animation to a target position
    ///
    /// If smooth scrolling is disabled, jumps immediately to target.
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16) {
        let target = target.min(max_scroll);

        if !self.smooth {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        let from = self.current_scroll;
        if from == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: target,
        });
    }

    /// Scroll by a delta amount (positive = down, negative = up)
    ///
    /// Multiple scroll events within the same animation frame are batched
    /// together for smoother handling of rapid key presses.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.smooth {
            let new_scroll =
                (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.current_scroll = new_scroll;
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Scroll down by half of the viewport
    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page, max_scroll);
    }

    /// Scroll up by half of the viewport
    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page, max_scroll);
    }

    /// Scroll down by a full viewport
    pub fn scroll_full_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height as i32, max_scroll);
    }

    /// Scroll up by a full viewport
    pub fn scroll_full_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height as i32), max_scroll);
    }

    /// Update animation state and return current scroll position
    ///
    /// Call this every frame to advance the animation.
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        // Fold any batched deltas into a new target
        if self.pending_delta != 0 {
            let target = self.target_scroll();
            let new_target =
                (target as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: Instant::now(),
                    from: self.current_scroll,
                    to: new_target,
                });
            } else {
                self.animation = None;
            }
        }

        if let Some(ref anim) = self.animation {
            let elapsed = anim.start.elapsed();
            if elapsed >= self.duration {
                self.current_scroll = anim.to;
                self.animation = None;
            } else {
                let t = progress(elapsed, self.duration);
                let eased_t = self.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased_t);
            }
        }

        // The page can shrink under us (resize, accordion closing)
        self.current_scroll = self.current_scroll.min(max_scroll);
        self.current_scroll
    }

    /// Cancel any active animation and stop at current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> MotionConfig {
        MotionConfig {
            smooth_scroll: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::from_motion(&instant_config());

        animator.scroll_to(100, 200);
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = ScrollAnimator::default();

        animator.scroll_to(100, 200);
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100);
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = ScrollAnimator::default();

        // Multiple scroll_by calls within one frame should batch
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(200);
        assert_eq!(animator.target_scroll(), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = ScrollAnimator::from_motion(&instant_config());
        animator.set_scroll(50);
        animator.scroll_to(300, 100);
        animator.update(100);
        assert_eq!(animator.current_scroll(), 100);
    }

    #[test]
    fn test_pending_delta_clamps_below_zero() {
        let mut animator = ScrollAnimator::default();
        animator.scroll_by(-10, 100);
        animator.update(100);
        assert_eq!(animator.target_scroll(), 0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_half_page_uses_viewport() {
        let mut animator = ScrollAnimator::from_motion(&instant_config());
        animator.scroll_half_page_down(40, 200);
        assert_eq!(animator.current_scroll(), 20);
        animator.scroll_half_page_up(40, 200);
        assert_eq!(animator.current_scroll(), 0);
    }
}
