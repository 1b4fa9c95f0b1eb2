//! Linear position tweens
//!
//! A [`PositionTween`] is the published target the Sync Loop hands to the
//! renderer: move this entity linearly from `from` to `to` over `duration`
//! seconds. The per-frame tween system owns its progression; the loop never
//! waits on it. Re-inserting a tween replaces any in-flight one, so a
//! retarget always starts from the current rendered position.

use bevy::prelude::{Component, Vec3};

/// Linear position animation toward the latest simulated position
#[derive(Component, Debug, Clone, Copy)]
pub struct PositionTween {
    pub from: Vec3, // rendered position when the tween was issued
    pub to: Vec3, // simulated position after the step
    pub elapsed: f32, // seconds since issue
    pub duration: f32, // total tween length in seconds
}

impl PositionTween {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance the tween clock by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Whether the tween has reached (or passed) its end
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current interpolated position
    /// Clamps at the endpoint, so a finished tween samples exactly `to`
    pub fn sample(&self) -> Vec3 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from.lerp(self.to, t)
    }
}
