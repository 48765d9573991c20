use crate::core::math::Vec3;

use super::orientation::{EulerOrientation, Orientation};

/// Kinematic state of the thrown body
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicBody<O: Orientation = EulerOrientation> {
    // === Linear ===
    /// Center position in world units
    pub position: Vec3,
    /// Units per reference tick
    pub velocity: Vec3,

    // === Angular ===
    pub orientation: O,
    /// Radians per reference tick, per axis
    pub angular_velocity: Vec3,

    // === Lifecycle ===
    /// Simulated this frame?
    pub is_active: bool,
    /// Seconds since the throw
    pub animation_time: f32,
}

impl<O: Orientation> KinematicBody<O> {
    /// Body at rest at `position` with the default orientation
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zero(),
            orientation: O::default(),
            angular_velocity: Vec3::zero(),
            is_active: false,
            animation_time: 0.0,
        }
    }

    /// Zero all linear and angular motion
    #[inline]
    pub fn halt(&mut self) {
        self.velocity = Vec3::zero();
        self.angular_velocity = Vec3::zero();
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.velocity != Vec3::zero() || self.angular_velocity != Vec3::zero()
    }
}
