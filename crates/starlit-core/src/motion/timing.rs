//! Time calculation utilities for animations.
//!
//! Pure functions over explicit elapsed times, so callers control the clock.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
///
/// A zero duration is treated as already complete.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f32() / duration.as_secs_f32();
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Linear interpolation for u16 values (scroll positions)
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    lerp(from as f32, to as f32, t).round() as u16
}

/// Remap a value from one range onto another
///
/// The input is not clamped; values outside [in_min, in_max] extrapolate.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + ((value - in_min) * (out_max - out_min)) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(0, 100, 1.0), 100);
    }

    #[test]
    fn test_progress() {
        let duration = Duration::from_millis(200);
        assert!((progress(Duration::ZERO, duration) - 0.0).abs() < 0.001);
        assert!((progress(Duration::from_millis(100), duration) - 0.5).abs() < 0.001);
        assert!((progress(Duration::from_millis(200), duration) - 1.0).abs() < 0.001);
        // Past the end stays clamped
        assert!((progress(Duration::from_millis(900), duration) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Duration::from_millis(5), Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_map_range() {
        assert!((map_range(5.0, 0.0, 10.0, 0.0, 100.0) - 50.0).abs() < 0.001);
        assert!((map_range(0.0, 0.0, 10.0, -1.0, 1.0) - -1.0).abs() < 0.001);
        assert!((map_range(10.0, 0.0, 10.0, -1.0, 1.0) - 1.0).abs() < 0.001);
    }
}
