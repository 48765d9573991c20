use crate::core::random::Xorshift32;
use crate::core::timer::FrameClock;
use crate::domain::config::{SceneConfig, SceneKind};
use crate::systems::camera::OrbitCamera;
use crate::systems::dice::DicePhysics;

use super::SceneCore;

pub(super) fn create_scene_core(kind: SceneKind, config: SceneConfig, rng: Xorshift32) -> SceneCore {
    let dice = match kind {
        SceneKind::Dice => Some(DicePhysics::new(config.physics.clone())),
        SceneKind::Cube => None,
    };

    SceneCore {
        kind,
        config,
        spin: 0.0,
        dice,
        camera: OrbitCamera::new(),
        clock: FrameClock::new(),
        frames: 0,
        rng,
        last_draw_ms: 0.0,
    }
}
