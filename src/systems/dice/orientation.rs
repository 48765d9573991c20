use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Debug;

use crate::core::math::Vec3;

/// How the body stores and settles its rotation.
///
/// The integrator only talks to this trait, so a different representation
/// can replace the per-axis Euler angles without touching `DicePhysics`.
pub trait Orientation: Clone + Debug + Default {
    /// Advance by `angular_velocity * k` (k = time scaled to reference ticks)
    fn integrate(&mut self, angular_velocity: Vec3, k: f32);

    /// Jump to the closest of the resting "face up" orientations
    fn snap_to_stable_face(&mut self);

    /// Square the body up so a face lies flat on the table
    fn snap_to_quarter_turns(&mut self);

    /// Current rotation as per-axis angles for the renderer
    fn euler(&self) -> Vec3;
}

/// The six resting orientations, one per face, in Euler space.
///
/// Angles are applied per axis, so these are not guaranteed to put the
/// face they are named after on top.
pub const STABLE_FACES: [Vec3; 6] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(FRAC_PI_2, 0.0, 0.0),
    Vec3::new(-FRAC_PI_2, 0.0, 0.0),
    Vec3::new(0.0, 0.0, FRAC_PI_2),
    Vec3::new(0.0, 0.0, -FRAC_PI_2),
    Vec3::new(PI, 0.0, 0.0),
];

/// Three independent angles, integrated and snapped axis by axis
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerOrientation {
    pub angles: Vec3,
}

impl EulerOrientation {
    pub fn new(angles: Vec3) -> Self {
        Self { angles }
    }
}

/// L1 distance between two angle triples (no wrap-around)
#[inline]
pub fn rotation_distance(a: Vec3, b: Vec3) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
}

/// Index of the closest stable face; ties go to the earlier face
pub fn nearest_stable_face(angles: Vec3) -> usize {
    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (i, face) in STABLE_FACES.iter().enumerate() {
        let d = rotation_distance(angles, *face);
        if d < best_distance {
            best_distance = d;
            best = i;
        }
    }
    best
}

/// Nearest multiple of 90 degrees after folding into (-2π, 2π).
///
/// The fold is a truncating remainder and halves round up, so -45° snaps
/// to 0 and 45° snaps to 90°.
pub fn snap_to_quarter(angle: f32) -> f32 {
    let folded = angle % TAU;
    let index = (folded / FRAC_PI_2 + 0.5).floor();
    index * FRAC_PI_2
}

impl Orientation for EulerOrientation {
    fn integrate(&mut self, angular_velocity: Vec3, k: f32) {
        self.angles += angular_velocity * k;
    }

    fn snap_to_stable_face(&mut self) {
        self.angles = STABLE_FACES[nearest_stable_face(self.angles)];
    }

    fn snap_to_quarter_turns(&mut self) {
        self.angles = Vec3::new(
            snap_to_quarter(self.angles.x),
            snap_to_quarter(self.angles.y),
            snap_to_quarter(self.angles.z),
        );
    }

    fn euler(&self) -> Vec3 {
        self.angles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_snap_rounds_to_nearest_right_angle() {
        assert_eq!(snap_to_quarter(0.1), 0.0);
        assert_eq!(snap_to_quarter(1.4), FRAC_PI_2);
        assert_eq!(snap_to_quarter(-1.4), -FRAC_PI_2);
        assert_eq!(snap_to_quarter(PI), PI);
    }

    #[test]
    fn quarter_snap_folds_full_turns() {
        // 2π + 0.2 folds to 0.2, which snaps to zero
        assert!(snap_to_quarter(TAU + 0.2).abs() < 1e-6);
        // -2π - 1.5 folds to -1.5
        assert!((snap_to_quarter(-TAU - 1.5) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn nearest_face_uses_l1_distance() {
        assert_eq!(nearest_stable_face(Vec3::new(0.2, 0.3, -0.1)), 0);
        assert_eq!(nearest_stable_face(Vec3::new(1.3, 0.1, 0.0)), 1);
        assert_eq!(nearest_stable_face(Vec3::new(-1.2, 0.0, 0.2)), 2);
        assert_eq!(nearest_stable_face(Vec3::new(0.0, 0.4, 1.5)), 3);
        assert_eq!(nearest_stable_face(Vec3::new(0.1, 0.0, -1.7)), 4);
        assert_eq!(nearest_stable_face(Vec3::new(3.0, 0.2, 0.0)), 5);
    }

    #[test]
    fn stable_face_snap_replaces_all_axes() {
        let mut o = EulerOrientation::new(Vec3::new(1.4, 0.3, -0.2));
        o.snap_to_stable_face();
        assert_eq!(o.euler(), Vec3::new(FRAC_PI_2, 0.0, 0.0));
    }

    #[test]
    fn integrate_scales_by_tick_factor() {
        let mut o = EulerOrientation::default();
        o.integrate(Vec3::new(1.0, -2.0, 0.5), 0.5);
        assert_eq!(o.euler(), Vec3::new(0.5, -1.0, 0.25));
    }
}
