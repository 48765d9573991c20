//! Orbit camera for the dice scene.
//!
//! Dragging orbits around the table, the wheel zooms. The camera only
//! stores angles and a zoom factor; `eye()` turns them into a position.

use std::f32::consts::FRAC_PI_2;

use crate::core::math::Vec3;

/// Radians per pixel of drag
pub const DRAG_SENSITIVITY: f32 = 0.01;
/// Zoom units per wheel delta unit
pub const WHEEL_SENSITIVITY: f32 = 0.01;
pub const MIN_DISTANCE: f32 = 1.0;
pub const MAX_DISTANCE: f32 = 15.0;
/// Pitch stays this far away from straight up/down
pub const PITCH_MARGIN: f32 = 0.1;

/// Point the camera orbits around
pub const ORBIT_TARGET: Vec3 = Vec3::new(0.0, -15.0, 0.0);
pub const ORBIT_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Zoom factor; the first wheel event pulls it into [1, 15]
    pub distance: f32,
    /// Yaw
    pub angle_x: f32,
    /// Pitch
    pub angle_y: f32,
    pub dragging: bool,
    pub last_pointer: (f32, f32),
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance: 0.1,
            angle_x: 0.0,
            angle_y: 0.3,
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = (x, y);
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn pointer_leave(&mut self) {
        self.dragging = false;
    }

    /// Orbit by the distance moved since the last pointer event
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let (lx, ly) = self.last_pointer;
        self.angle_x += (x - lx) * DRAG_SENSITIVITY;
        self.angle_y = (self.angle_y + (y - ly) * DRAG_SENSITIVITY)
            .clamp(-FRAC_PI_2 + PITCH_MARGIN, FRAC_PI_2 - PITCH_MARGIN);
        self.last_pointer = (x, y);
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.distance =
            (self.distance + delta_y * WHEEL_SENSITIVITY).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn eye(&self) -> Vec3 {
        let base = 150.0 + self.distance * 50.0;
        let (sx, cx) = self.angle_x.sin_cos();
        let (sy, cy) = self.angle_y.sin_cos();
        Vec3::new(base * sx * cy, base * sy - 15.0, base * cx * cy)
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        ORBIT_TARGET
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        ORBIT_UP
    }

    /// CSS cursor matching the drag state
    pub fn cursor(&self) -> &'static str {
        if self.dragging {
            "grabbing"
        } else {
            "grab"
        }
    }
}
