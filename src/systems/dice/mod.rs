//! DicePhysics - single-body kinematic integrator for the dice scene
//!
//! A cube of fixed size is thrown upward, falls under gravity, bounces on a
//! flat table and comes to rest showing one face.
//!
//! Current behavior:
//! - Velocities are per 60 Hz reference tick and scaled by `dt * 60`.
//! - The table is the only collider; x/z are clamped to a square arena.
//! - Rotation is kinematic (no torque), damped on every impact.
//! - Settling snaps the rotation so a face lies flat on the table.

mod body;
mod collision;
mod orientation;
mod system;

pub use body::KinematicBody;
pub use orientation::{
    nearest_stable_face, rotation_distance, snap_to_quarter, EulerOrientation, Orientation,
    STABLE_FACES,
};
pub use system::{DicePhysics, DiceTransform};
