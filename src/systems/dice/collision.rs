use crate::domain::config::PhysicsSettings;

use super::body::KinematicBody;
use super::orientation::Orientation;

/// Bounce off the table top.
///
/// Leaves `position.y` exactly at the contact height. Small bounces are
/// killed and, once the body is nearly still, it is snapped onto the
/// closest stable face with all motion removed.
pub(super) fn handle_table_collision<O: Orientation>(
    body: &mut KinematicBody<O>,
    settings: &PhysicsSettings,
) {
    body.position.y = settings.contact_height();

    body.velocity.y = -body.velocity.y * settings.damping;
    body.angular_velocity *= settings.damping;

    if body.velocity.y.abs() < settings.settle_bounce_threshold {
        body.velocity.y = 0.0;
        body.velocity.x *= settings.settle_friction;
        body.velocity.z *= settings.settle_friction;

        if is_nearly_still(body, settings) {
            body.orientation.snap_to_stable_face();
            body.halt();
            log::debug!("dice aligned to face {:?}", body.orientation.euler());
        }
    }

    // Slow spins bleed off faster
    let av = &mut body.angular_velocity;
    for axis in [&mut av.x, &mut av.y, &mut av.z] {
        if axis.abs() < settings.spin_friction_threshold {
            *axis *= settings.spin_friction;
        }
    }
}

/// Every linear and angular component below the still threshold
pub(super) fn is_completely_still<O: Orientation>(
    body: &KinematicBody<O>,
    settings: &PhysicsSettings,
) -> bool {
    let t = settings.still_threshold;
    body.velocity.max_abs() < t && body.angular_velocity.max_abs() < t
}

/// Horizontal speed and every spin axis below the nearly-still threshold.
/// Vertical speed is ignored (it was just zeroed by the caller).
pub(super) fn is_nearly_still<O: Orientation>(
    body: &KinematicBody<O>,
    settings: &PhysicsSettings,
) -> bool {
    let t = settings.nearly_still_threshold;
    body.velocity.x.abs() < t
        && body.velocity.z.abs() < t
        && body.angular_velocity.max_abs() < t
}

/// Clamp x/z to the arena, reflecting the velocity on contact.
///
/// Returns `true` when the body has fallen far below the table and should
/// be stopped.
pub(super) fn constrain_position<O: Orientation>(
    body: &mut KinematicBody<O>,
    settings: &PhysicsSettings,
) -> bool {
    let limit = settings.bounds;

    if body.position.x.abs() > limit {
        body.position.x = limit.copysign(body.position.x);
        body.velocity.x = -body.velocity.x * settings.damping;
    }
    if body.position.z.abs() > limit {
        body.position.z = limit.copysign(body.position.z);
        body.velocity.z = -body.velocity.z * settings.damping;
    }

    body.position.y < settings.table_height - settings.lost_depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec3;
    use crate::systems::dice::EulerOrientation;

    fn body_at(y: f32) -> KinematicBody<EulerOrientation> {
        KinematicBody::at_rest(Vec3::new(0.0, y, 0.0))
    }

    #[test]
    fn hard_impact_bounces_with_damping() {
        let s = PhysicsSettings::default();
        let mut b = body_at(-16.0);
        b.velocity = Vec3::new(4.0, -10.0, 0.0);
        b.angular_velocity = Vec3::new(6.0, 0.0, 0.0);

        handle_table_collision(&mut b, &s);

        assert_eq!(b.position.y, -15.0);
        assert_eq!(b.velocity.y, 5.0);
        assert_eq!(b.velocity.x, 4.0);
        // 6 * 0.5 = 3, above the spin friction threshold
        assert_eq!(b.angular_velocity.x, 3.0);
    }

    #[test]
    fn soft_impact_settles_and_applies_friction() {
        let s = PhysicsSettings::default();
        let mut b = body_at(-15.5);
        b.velocity = Vec3::new(3.0, -3.0, -2.0);
        b.angular_velocity = Vec3::new(3.0, 1.0, 0.0);

        handle_table_collision(&mut b, &s);

        assert_eq!(b.velocity.y, 0.0);
        assert!((b.velocity.x - 1.8).abs() < 1e-6);
        assert!((b.velocity.z + 1.2).abs() < 1e-6);
        // x: 1.5 then * 0.8; y: 0.5 then * 0.8
        assert!((b.angular_velocity.x - 1.2).abs() < 1e-6);
        assert!((b.angular_velocity.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn nearly_still_impact_snaps_to_face() {
        let s = PhysicsSettings::default();
        let mut b = body_at(-15.2);
        b.velocity = Vec3::new(0.5, -1.0, 0.5);
        b.angular_velocity = Vec3::new(0.4, 0.2, -0.2);
        b.orientation = EulerOrientation::new(Vec3::new(1.3, 0.2, 0.1));

        handle_table_collision(&mut b, &s);

        assert!(!b.is_moving());
        assert_eq!(
            b.orientation.euler(),
            Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0)
        );
    }

    #[test]
    fn still_checks_use_their_thresholds() {
        let s = PhysicsSettings::default();
        let mut b = body_at(-15.0);
        assert!(is_completely_still(&b, &s));

        b.angular_velocity.z = 0.5;
        assert!(!is_completely_still(&b, &s));
        assert!(is_nearly_still(&b, &s));

        b.velocity.y = 50.0;
        assert!(is_nearly_still(&b, &s));
        b.velocity.x = -1.0;
        assert!(!is_nearly_still(&b, &s));
    }

    #[test]
    fn arena_walls_reflect_velocity() {
        let s = PhysicsSettings::default();
        let mut b = body_at(0.0);
        b.position.x = 85.0;
        b.position.z = -90.0;
        b.velocity = Vec3::new(4.0, 0.0, -2.0);

        let lost = constrain_position(&mut b, &s);

        assert!(!lost);
        assert_eq!(b.position.x, 80.0);
        assert_eq!(b.position.z, -80.0);
        assert_eq!(b.velocity.x, -2.0);
        assert_eq!(b.velocity.z, 1.0);
    }

    #[test]
    fn falling_far_below_table_is_lost() {
        let s = PhysicsSettings::default();
        let mut b = body_at(-131.0);
        assert!(constrain_position(&mut b, &s));
        b.position.y = -130.0;
        assert!(!constrain_position(&mut b, &s));
    }
}
