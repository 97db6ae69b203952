//! Smoothed pointer follower and magnetic-button pull.

use crate::geometry::Vec2;

/// Default interpolation factor for the pointer follower.
pub const GLIDE_FACTOR: f32 = 0.15;

/// A position that chases the raw pointer with per-frame interpolation,
/// giving the drawn cursor dot its trailing feel.
#[derive(Debug, Clone)]
pub struct PointerGlide {
    position: Vec2,
    target: Vec2,
    factor: f32,
    engaged: bool,
}

impl PointerGlide {
    pub fn new(factor: f32) -> Self {
        Self {
            position: Vec2::zero(),
            target: Vec2::zero(),
            factor,
            engaged: false,
        }
    }

    /// Point the glide at a new raw pointer position. The very first target
    /// snaps the position so the dot does not sweep in from the origin.
    pub fn retarget(&mut self, target: Vec2) {
        if !self.engaged {
            self.position = target;
            self.engaged = true;
        }
        self.target = target;
    }

    /// Advance one simulation frame.
    pub fn step(&mut self) {
        if self.engaged {
            self.position = self.position.lerp(self.target, self.factor);
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// False until the first pointer event; nothing should be drawn before.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

impl Default for PointerGlide {
    fn default() -> Self {
        Self::new(GLIDE_FACTOR)
    }
}

/// Offset a magnetic element toward the pointer.
///
/// The pull is the pointer's offset from the element center scaled by
/// `strength`; callers clamp the result to whatever travel their layout
/// allows.
pub fn magnetic_offset(pointer: Vec2, center: Vec2, strength: f32) -> Vec2 {
    (pointer - center) * strength
}
