use super::SceneCore;

/// Cube rotation added every frame, independent of dt
pub const SPIN_STEP: f32 = 0.02;

pub(super) fn advance(scene: &mut SceneCore, now_ms: f64) -> f32 {
    let dt = scene.clock.tick(now_ms);

    scene.spin += SPIN_STEP;

    if let Some(dice) = scene.dice.as_mut() {
        dice.update(dt);
    }

    scene.frames += 1;
    dt
}
