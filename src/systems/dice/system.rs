use crate::core::math::Vec3;
use crate::core::random::RandomSource;
use crate::domain::config::PhysicsSettings;

use super::body::KinematicBody;
use super::collision::{
    constrain_position, handle_table_collision, is_completely_still,
};
use super::orientation::{EulerOrientation, Orientation};

/// Snapshot handed to the renderer each frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiceTransform {
    pub position: Vec3,
    /// Per-axis Euler angles, applied x then y then z
    pub rotation: Vec3,
    pub is_active: bool,
}

/// Owns the one dice body and steps it against the table
#[derive(Clone, Debug)]
pub struct DicePhysics<O: Orientation = EulerOrientation> {
    settings: PhysicsSettings,
    body: KinematicBody<O>,
}

impl<O: Orientation> DicePhysics<O> {
    pub fn new(settings: PhysicsSettings) -> Self {
        let body = KinematicBody::at_rest(settings.rest_position());
        Self { settings, body }
    }

    /// Throw with random motion. Ignored while a throw is in flight.
    ///
    /// Draws six values in order: vx, vy, vz, then angular x, y, z.
    pub fn throw_dice(&mut self, rng: &mut dyn RandomSource) -> bool {
        if self.body.is_active {
            return false;
        }
        let vx = (rng.next_f32() - 0.5) * 8.0;
        let vy = rng.next_f32() * 15.0 + 10.0;
        let vz = (rng.next_f32() - 0.5) * 8.0;
        let ax = (rng.next_f32() - 0.5) * 2.0;
        let ay = (rng.next_f32() - 0.5) * 2.0;
        let az = (rng.next_f32() - 0.5) * 2.0;
        self.launch(Vec3::new(vx, vy, vz), Vec3::new(ax, ay, az))
    }

    /// Start a throw with explicit initial motion.
    ///
    /// Returns `false` (and changes nothing) if the body is already moving.
    pub fn launch(&mut self, velocity: Vec3, angular_velocity: Vec3) -> bool {
        if self.body.is_active {
            return false;
        }
        self.body.is_active = true;
        self.body.animation_time = 0.0;
        self.body.velocity = velocity;
        self.body.angular_velocity = angular_velocity;
        log::info!(
            "dice thrown: v=({:.2}, {:.2}, {:.2})",
            velocity.x,
            velocity.y,
            velocity.z
        );
        true
    }

    /// Advance by `dt` seconds. No-op while at rest.
    pub fn update(&mut self, dt: f32) {
        if !self.body.is_active {
            return;
        }
        let s = &self.settings;

        self.body.animation_time += dt;
        if self.body.animation_time > s.max_animation_time {
            self.stop_physics();
            return;
        }

        let k = dt * s.reference_rate;

        self.body.velocity.y += s.gravity * k;
        self.body.velocity.x *= s.air_resistance;
        self.body.velocity.z *= s.air_resistance;

        self.body.position += self.body.velocity * k;
        let av = self.body.angular_velocity;
        self.body.orientation.integrate(av, k);

        let contact = s.contact_height();
        if self.body.position.y <= contact {
            handle_table_collision(&mut self.body, s);
        }

        if self.body.position.y <= contact + 1.0 && is_completely_still(&self.body, s) {
            self.stop_physics();
            return;
        }

        if constrain_position(&mut self.body, s) {
            log::warn!("dice fell below the table, stopping");
            self.stop_physics();
        }
    }

    /// Come to rest on the table with a face flat against it
    pub fn stop_physics(&mut self) {
        self.body.is_active = false;
        self.body.halt();
        self.body.position.y = self.settings.contact_height();
        self.body.orientation.snap_to_quarter_turns();
        let r = self.body.orientation.euler();
        log::info!(
            "dice settled at ({:.1}, {:.1}, {:.1}) rotation ({:.3}, {:.3}, {:.3})",
            self.body.position.x,
            self.body.position.y,
            self.body.position.z,
            r.x,
            r.y,
            r.z
        );
    }

    /// Back to the initial at-rest state
    pub fn reset(&mut self) {
        self.body = KinematicBody::at_rest(self.settings.rest_position());
    }

    pub fn transform(&self) -> DiceTransform {
        DiceTransform {
            position: self.body.position,
            rotation: self.body.orientation.euler(),
            is_active: self.body.is_active,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.body.is_active
    }

    #[inline]
    pub fn body(&self) -> &KinematicBody<O> {
        &self.body
    }

    #[inline]
    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }
}

impl Default for DicePhysics {
    fn default() -> Self {
        Self::new(PhysicsSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    struct Fixed(Vec<f32>, usize);

    impl RandomSource for Fixed {
        fn next_f32(&mut self) -> f32 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    const DT: f32 = 1.0 / 60.0;

    fn fresh() -> DicePhysics {
        DicePhysics::default()
    }

    #[test]
    fn starts_at_rest() {
        let dice = fresh();
        let t = dice.transform();
        assert!(!t.is_active);
        assert_eq!(t.position, Vec3::new(0.0, -15.0, 0.0));
        assert_eq!(t.rotation, Vec3::zero());
    }

    #[test]
    fn throw_draws_upward_motion_in_range() {
        for r in [0.0, 0.25, 0.5, 0.999] {
            let mut dice = fresh();
            assert!(dice.throw_dice(&mut Fixed(vec![r], 0)));
            let b = dice.body();
            assert!(b.is_active);
            assert!(b.velocity.y >= 10.0 && b.velocity.y < 25.0);
            assert!(b.velocity.x.abs() <= 4.0 && b.velocity.z.abs() <= 4.0);
            assert!(b.angular_velocity.max_abs() <= 1.0);
        }
    }

    #[test]
    fn throw_uses_draw_order() {
        let mut dice = fresh();
        let mut rng = Fixed(vec![0.75, 0.375, 0.375, 0.75, 0.25, 1.0], 0);
        dice.throw_dice(&mut rng);
        let b = dice.body();
        assert_eq!(b.velocity, Vec3::new(2.0, 15.625, -1.0));
        assert_eq!(b.angular_velocity, Vec3::new(0.5, -0.5, 1.0));
    }

    #[test]
    fn throw_while_active_is_ignored() {
        let mut dice = fresh();
        dice.launch(Vec3::new(0.0, 12.0, 0.0), Vec3::zero());
        dice.update(DT);
        let before = dice.body().clone();
        assert!(!dice.throw_dice(&mut Fixed(vec![0.9], 0)));
        assert_eq!(dice.body(), &before);
    }

    #[test]
    fn inactive_update_is_noop() {
        let mut dice = fresh();
        let before = dice.body().clone();
        dice.update(0.5);
        assert_eq!(dice.body(), &before);
    }

    #[test]
    fn first_step_applies_gravity_then_moves() {
        let mut dice = fresh();
        dice.launch(Vec3::new(1.0, 12.0, 0.0), Vec3::new(0.6, 0.0, 0.0));
        dice.update(DT);
        let b = dice.body();
        // vy = 12 - 0.8, y = -15 + 11.2
        assert!((b.velocity.y - 11.2).abs() < 1e-5);
        assert!((b.position.y + 3.8).abs() < 1e-4);
        assert!((b.velocity.x - 0.99).abs() < 1e-6);
        assert!((b.orientation.euler().x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn ceiling_stops_long_throws() {
        let mut dice = fresh();
        dice.launch(Vec3::new(0.0, 20.0, 0.0), Vec3::zero());
        dice.update(4.0);
        // lands under the table and bounces back up
        dice.update(1.5);
        assert!(!dice.is_active());
        assert_eq!(dice.body().position.y, -15.0);
        assert!(!dice.body().is_moving());
    }

    #[test]
    fn stop_snaps_rotation_to_quarter_turns() {
        let mut dice = fresh();
        dice.launch(Vec3::zero(), Vec3::zero());
        dice.body.orientation = EulerOrientation::new(Vec3::new(1.4, -0.2, 3.3));
        dice.body.position.y = 10.0;
        dice.stop_physics();
        let t = dice.transform();
        assert!(!t.is_active);
        assert_eq!(t.position.y, -15.0);
        assert_eq!(t.rotation, Vec3::new(FRAC_PI_2, 0.0, 2.0 * FRAC_PI_2));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut dice = fresh();
        dice.launch(Vec3::new(3.0, 15.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
        for _ in 0..10 {
            dice.update(DT);
        }
        dice.reset();
        assert_eq!(dice.transform(), fresh().transform());
        assert!(!dice.body().is_moving());
    }

    #[test]
    fn custom_settings_move_contact_height() {
        let settings = PhysicsSettings {
            table_height: 0.0,
            half_extent: 5.0,
            ..PhysicsSettings::default()
        };
        let mut dice: DicePhysics = DicePhysics::new(settings);
        assert_eq!(dice.body().position.y, 5.0);
        dice.launch(Vec3::new(0.0, 5.0, 0.0), Vec3::zero());
        for _ in 0..600 {
            dice.update(DT);
            assert!(dice.body().position.y >= 5.0);
        }
        assert!(!dice.is_active());
        assert_eq!(dice.body().position.y, 5.0);
    }
}
